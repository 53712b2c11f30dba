//! Declaration sections: `const`, `type` and `var`.
//!
//! Each section is a run of `;`-terminated definitions. A malformed
//! definition is flagged and recovery resumes at the next identifier or
//! section keyword, so one bad line does not hide the rest of the unit.

use pas_diagnostic::{unexpected_token, ErrorCode};
use pas_ir::{ConstValue, Name, Span, SymbolKind, TokenKind, TypeId};
use tracing::debug;

use crate::recovery::{
    self, COLON_SET, CONST_EQUALS_SET, DECLARATION_START, DECL_IDENT_SET, NEXT_START,
    TYPE_EQUALS_SET, VAR_NAME_FOLLOW,
};
use crate::Parser;

impl Parser<'_> {
    /// Parse sections until the end of input.
    pub fn parse_declarations(&mut self) {
        while !self.cursor.is_at_end() {
            match self.cursor.current_kind() {
                TokenKind::Const => {
                    self.cursor.advance();
                    self.parse_constant_definitions();
                }
                TokenKind::Type => {
                    self.cursor.advance();
                    self.parse_type_definitions();
                }
                TokenKind::Var => {
                    self.cursor.advance();
                    self.parse_variable_declarations();
                }
                kind => {
                    let kind = *kind;
                    if kind != TokenKind::Error {
                        let span = self.cursor.current_span();
                        self.emit(unexpected_token(
                            span,
                            "`const`, `type` or `var`",
                            kind.display_name(),
                        ));
                    }
                    self.cursor.advance();
                    recovery::synchronize(&mut self.cursor, DECLARATION_START);
                }
            }
        }
        debug!(symbols = self.unit.symbols.len(), "declarations parsed");
    }

    /// `name = constant ;` ...
    fn parse_constant_definitions(&mut self) {
        self.synchronize(DECL_IDENT_SET, "identifier");
        while let Some(name) = self.cursor.current_ident() {
            let span = self.cursor.current_span();
            self.cursor.advance();

            self.synchronize(CONST_EQUALS_SET, "`=`");
            self.consume_or_flag(&TokenKind::Eq, ErrorCode::E1009);

            let (value, ty) = self
                .parse_constant()
                .unwrap_or((ConstValue::Integer(0), TypeId::ERROR));
            self.define(name, span, SymbolKind::Constant { value, ty });

            self.finish_definition();
            self.synchronize(DECL_IDENT_SET, "identifier");
        }
    }

    /// `name = type-spec ;` ...
    fn parse_type_definitions(&mut self) {
        self.synchronize(DECL_IDENT_SET, "identifier");
        while let Some(name) = self.cursor.current_ident() {
            let span = self.cursor.current_span();
            self.cursor.advance();

            self.synchronize(TYPE_EQUALS_SET, "`=`");
            self.consume_or_flag(&TokenKind::Eq, ErrorCode::E1009);

            let ty = self.parse_type_spec();
            self.define(name, span, SymbolKind::Type(ty));

            self.finish_definition();
            self.synchronize(DECL_IDENT_SET, "identifier");
        }
    }

    /// `a, b : type-spec ;` ...
    ///
    /// Names are defined after the type is parsed, so a variable cannot be
    /// used in its own type.
    fn parse_variable_declarations(&mut self) {
        self.synchronize(DECL_IDENT_SET, "identifier");
        while self.cursor.current_ident().is_some() {
            let names = self.parse_identifier_list();

            self.synchronize(COLON_SET, "`:`");
            self.consume_or_flag(&TokenKind::Colon, ErrorCode::E1010);

            let ty = self.parse_type_spec();
            for (name, span) in names {
                self.define(name, span, SymbolKind::Variable(ty));
            }

            self.finish_definition();
            self.synchronize(DECL_IDENT_SET, "identifier");
        }
    }

    fn parse_identifier_list(&mut self) -> Vec<(Name, Span)> {
        let mut names = Vec::new();
        loop {
            let span = self.cursor.current_span();
            if let Some(name) = self.cursor.current_ident() {
                self.cursor.advance();
                names.push((name, span));
            } else {
                self.flag(span, ErrorCode::E1011);
            }

            self.synchronize(VAR_NAME_FOLLOW, "`,` or `:`");
            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
            } else if self.cursor.current_ident().is_some()
                && matches!(
                    self.cursor.peek_next_kind(),
                    TokenKind::Comma | TokenKind::Colon
                )
            {
                // `a b : t` - another name follows without a comma
                let span = self.cursor.current_span();
                self.emit(unexpected_token(span, "`,`", "identifier"));
            } else {
                break;
            }
        }
        names
    }

    /// Consume one or more `;`. A missing `;` is only flagged when the next
    /// definition or section plainly starts here.
    fn finish_definition(&mut self) {
        if self.cursor.check(&TokenKind::Semicolon) {
            while self.cursor.check(&TokenKind::Semicolon) {
                self.cursor.advance();
            }
        } else if NEXT_START.contains(self.cursor.current_kind()) {
            let span = self.cursor.current_span();
            self.flag(span, ErrorCode::E1008);
        }
    }
}
