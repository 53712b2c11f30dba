//! Expression parsing.
//!
//! Pascal has four precedence levels, lowest first:
//!
//! ```text
//! expression := simple [relop simple]           relop: = <> < <= > >= in
//! simple     := [+|-] term {addop term}         addop: + - or
//! term       := factor {mulop factor}           mulop: * / div mod and
//! factor     := identifier | number | string | not factor
//!             | ( expression ) | [ set members ]
//! ```
//!
//! Constants are folded to literals while parsing. Variables, `true` and
//! `false` stay as `Variable` nodes and are bound at run time.

mod operators;
mod primary;

use pas_diagnostic::ErrorCode;
use pas_ir::{BinaryOp, Expr, ExprId, ExprKind, Span, TokenKind};
use pas_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::Parser;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Always returns a node; where no expression can be found the result is
    /// an `IntegerLiteral(0)` placeholder.
    pub fn parse_expression(&mut self) -> ExprId {
        self.with_expr_depth(Self::parse_relational)
    }

    /// Run `parse` one nesting level deeper, flagging when the limit is hit.
    fn with_expr_depth(&mut self, parse: fn(&mut Self) -> ExprId) -> ExprId {
        if self.expr_depth >= self.config.max_expr_depth {
            let span = self.cursor.current_span();
            debug!(depth = self.expr_depth, "expression nesting limit reached");
            self.flag(span, ErrorCode::E1014);
            return self.alloc(ExprKind::IntegerLiteral(0), span);
        }

        self.expr_depth += 1;
        let id = ensure_sufficient_stack(|| parse(self));
        self.expr_depth -= 1;
        id
    }

    /// Parse `simple [relop simple]`.
    ///
    /// The left operand of `in` is tested against ordinals, so a
    /// one-character string there becomes its ordinal as set members do.
    fn parse_relational(&mut self) -> ExprId {
        let left = self.parse_simple_expression();
        let Some(op) = self.match_relational_op() else {
            return left;
        };
        self.cursor.advance();
        let left = if op == BinaryOp::In {
            self.char_to_ordinal(left)
        } else {
            left
        };
        let right = self.parse_simple_expression();
        self.alloc_binary(op, left, right)
    }

    /// Parse a signed sequence of terms.
    ///
    /// A leading `-` negates the first term only; a leading `+` builds no node.
    fn parse_simple_expression(&mut self) -> ExprId {
        let start = self.cursor.current_span();
        let negative = match self.cursor.current_kind() {
            TokenKind::Minus => Some(true),
            TokenKind::Plus => Some(false),
            _ => None,
        };
        if negative.is_some() {
            self.cursor.advance();
        }

        let mut left = self.parse_term();
        if negative == Some(true) {
            let span = start.merge(self.span_of(left));
            left = self.alloc(ExprKind::Negate(left), span);
        }

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_term();
            left = self.alloc_binary(op, left, right);
        }
        left
    }

    fn parse_term(&mut self) -> ExprId {
        let mut left = self.parse_factor();
        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_factor();
            left = self.alloc_binary(op, left, right);
        }
        left
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.unit.exprs.alloc_expr(Expr::new(kind, span))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.unit.exprs.get_expr(id).span
    }
}
