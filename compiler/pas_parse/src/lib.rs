//! Recursive descent parser for Pascal declarations and expressions.
//!
//! Produces type descriptors in a [`TypeArena`], flat expression trees in an
//! [`ExprArena`] and a [`SymbolTable`], bundled as a [`Unit`]. Syntax errors
//! never abort parsing: each is flagged to the [`DiagnosticSink`], the parser
//! synchronizes on a token set and carries on with a best-effort result.

mod cursor;
mod grammar;
pub mod recovery;

pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet};

use pas_diagnostic::{unexpected_token, Diagnostic, DiagnosticSink, ErrorCode};
use pas_ir::{
    ExprArena, ExprId, Span, StringInterner, SymbolTable, TokenKind, TokenList, TypeArena,
};
use tracing::debug;

const COMPONENT: &str = "parser";

/// Limits on parser recursion.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParserConfig {
    /// Maximum nesting of type specifications (`set of array [..] of ...`).
    pub max_type_depth: u32,
    /// Maximum nesting of expressions (parentheses, `not`, set literals).
    pub max_expr_depth: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_type_depth: 64,
            max_expr_depth: 1000,
        }
    }
}

/// Everything the parser builds for one compilation unit.
#[derive(Clone, Debug)]
pub struct Unit {
    pub types: TypeArena,
    pub exprs: ExprArena,
    pub symbols: SymbolTable,
}

impl Unit {
    /// An empty unit with the predefined types and constants.
    pub fn new(interner: &StringInterner) -> Self {
        Unit {
            types: TypeArena::new(),
            exprs: ExprArena::new(),
            symbols: SymbolTable::with_predefined(interner),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    unit: Unit,
    sink: &'a mut dyn DiagnosticSink,
    config: ParserConfig,
    type_depth: u32,
    expr_depth: u32,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens` with a fresh [`Unit`].
    pub fn new(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            unit: Unit::new(interner),
            sink,
            config: ParserConfig::default(),
            type_depth: 0,
            expr_depth: 0,
        }
    }

    /// Continue building an existing unit, e.g. to parse an expression
    /// against previously parsed declarations.
    #[must_use]
    pub fn resume(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn into_unit(self) -> Unit {
        self.unit
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Parse an expression that must span the remaining tokens.
    ///
    /// Tokens left over after the expression are flagged as unexpected.
    pub fn parse_whole_expression(&mut self) -> ExprId {
        let expr = self.parse_expression();
        if !self.is_at_end() {
            let kind = *self.cursor.current_kind();
            let span = self.cursor.current_span();
            debug!(?span, "trailing tokens after expression");
            self.emit(unexpected_token(span, "end of expression", kind.display_name()));
        }
        expr
    }

    /// Report `code` at `span` with its default message.
    fn flag(&mut self, span: Span, code: ErrorCode) {
        self.sink.flag(span, code, COMPONENT);
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(diagnostic.with_component(COMPONENT));
    }

    /// Flag an unexpected token if the current one is not in `set`, then skip
    /// to the first token that is.
    ///
    /// Lexer error tokens were already reported and are skipped silently.
    fn synchronize(&mut self, set: TokenSet, expected: &str) {
        let kind = *self.cursor.current_kind();
        if set.contains(&kind) {
            return;
        }
        if !matches!(kind, TokenKind::Eof | TokenKind::Error) {
            let span = self.cursor.current_span();
            self.emit(unexpected_token(span, expected, kind.display_name()));
        }
        recovery::synchronize(&mut self.cursor, set);
    }

    /// Consume `kind` if it is current; otherwise flag `code` at the current
    /// token without consuming anything.
    fn consume_or_flag(&mut self, kind: &TokenKind, code: ErrorCode) -> bool {
        if self.cursor.check(kind) {
            self.cursor.advance();
            true
        } else {
            let span = self.cursor.current_span();
            self.flag(span, code);
            false
        }
    }
}

/// Parse a sequence of `const`, `type` and `var` sections.
pub fn parse_declarations(
    tokens: &TokenList,
    interner: &StringInterner,
    sink: &mut dyn DiagnosticSink,
) -> Unit {
    let mut parser = Parser::new(tokens, interner, sink);
    parser.parse_declarations();
    parser.into_unit()
}

/// Parse a single expression against the declarations in `unit`.
pub fn parse_expression(
    tokens: &TokenList,
    interner: &StringInterner,
    unit: Unit,
    sink: &mut dyn DiagnosticSink,
) -> (Unit, ExprId) {
    let mut parser = Parser::new(tokens, interner, sink).resume(unit);
    let expr = parser.parse_whole_expression();
    (parser.into_unit(), expr)
}

#[cfg(test)]
mod tests;
