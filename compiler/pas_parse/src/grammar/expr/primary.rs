//! Factors: identifiers, literals, `not`, parentheses and set literals.

use pas_diagnostic::{undefined_identifier, ErrorCode};
use pas_ir::{ConstValue, ExprId, ExprKind, Name, Span, SymbolKind, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_factor(&mut self) -> ExprId {
        let span = self.cursor.current_span();
        match *self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let kind = self.identifier_kind(name, span);
                self.alloc(kind, span)
            }
            TokenKind::Int(n) => {
                self.cursor.advance();
                self.alloc(ExprKind::IntegerLiteral(n), span)
            }
            TokenKind::Real(bits) => {
                self.cursor.advance();
                self.alloc(ExprKind::RealLiteral(f64::from_bits(bits)), span)
            }
            TokenKind::Str(name) => {
                self.cursor.advance();
                self.alloc(ExprKind::StringLiteral(name), span)
            }
            TokenKind::Not => {
                self.cursor.advance();
                let operand = self.with_expr_depth(Self::parse_factor);
                let span = span.merge(self.span_of(operand));
                self.alloc(ExprKind::Not(operand), span)
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expression();
                self.consume_or_flag(&TokenKind::RParen, ErrorCode::E1007);
                inner
            }
            TokenKind::LBracket => self.with_expr_depth(Self::parse_set_literal),
            _ => {
                self.flag(span, ErrorCode::E1013);
                self.alloc(ExprKind::IntegerLiteral(0), span)
            }
        }
    }

    /// Resolve an identifier in expression position.
    ///
    /// Constants fold to literals; enumeration constants become their
    /// ordinal. Everything else is looked up at run time.
    fn identifier_kind(&mut self, name: Name, span: Span) -> ExprKind {
        match self.unit.symbols.lookup(name).map(|s| s.kind) {
            Some(SymbolKind::Constant { value, .. }) => match value {
                ConstValue::Integer(n) | ConstValue::Enum(n) => ExprKind::IntegerLiteral(n),
                ConstValue::Real(x) => ExprKind::RealLiteral(x),
                ConstValue::Char(c) => {
                    let text = self.cursor.interner().intern(c.encode_utf8(&mut [0; 4]));
                    ExprKind::StringLiteral(text)
                }
                ConstValue::Str(text) => ExprKind::StringLiteral(text),
                ConstValue::Boolean(_) => ExprKind::Variable(name),
            },
            Some(SymbolKind::Variable(_)) => ExprKind::Variable(name),
            Some(SymbolKind::Type(_)) => {
                self.flag(span, ErrorCode::E1013);
                ExprKind::Variable(name)
            }
            None => {
                let text = self.cursor.interner().lookup(name);
                self.emit(undefined_identifier(span, text));
                ExprKind::Variable(name)
            }
        }
    }

    /// Parse `[m1, m2, lo..hi, ...]`.
    ///
    /// A range member `lo..hi` is stored as two members: the `lo` expression,
    /// then a `Subrange` node carrying the resolved bounds. `hi` must be a
    /// constant; `lo` may be any expression. One-character string members
    /// are stored as their ordinal.
    fn parse_set_literal(&mut self) -> ExprId {
        let start = self.cursor.current_span();
        self.cursor.advance();

        let mut members = Vec::new();
        if !self.cursor.check(&TokenKind::RBracket) {
            loop {
                self.parse_set_member(&mut members);
                if self.cursor.check(&TokenKind::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        self.consume_or_flag(&TokenKind::RBracket, ErrorCode::E1004);

        let range = self.unit.exprs.alloc_expr_list(members);
        let span = start.merge(self.cursor.previous_span());
        self.alloc(ExprKind::SetLiteral(range), span)
    }

    fn parse_set_member(&mut self, members: &mut Vec<ExprId>) {
        let member = self.parse_expression();
        let member = self.char_to_ordinal(member);
        members.push(member);

        if !self.cursor.check(&TokenKind::DotDot) {
            return;
        }
        self.cursor.advance();

        let high_span = self.cursor.current_span();
        let high = match self.parse_constant() {
            Some((value, _)) => value.ordinal().unwrap_or_else(|| {
                let span = high_span.merge(self.cursor.previous_span());
                self.flag(span, ErrorCode::E1012);
                0
            }),
            None => 0,
        };
        // A computed low bound reaches the range as the member evaluated
        // just before it; the node itself then only records `high`.
        let low = self.constant_ordinal(member).unwrap_or(high);

        let span = self.span_of(member).merge(self.cursor.previous_span());
        let subrange = self.alloc(ExprKind::Subrange { low, high }, span);
        members.push(subrange);
    }

    /// Replace a one-character string literal with its ordinal.
    pub(crate) fn char_to_ordinal(&mut self, id: ExprId) -> ExprId {
        let expr = *self.unit.exprs.get_expr(id);
        let ExprKind::StringLiteral(name) = expr.kind else {
            return id;
        };
        let mut chars = self.cursor.interner().lookup(name).chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                self.alloc(ExprKind::IntegerLiteral(i64::from(u32::from(c))), expr.span)
            }
            _ => id,
        }
    }

    /// Constant value of a range's low bound: an integer literal, possibly
    /// negated.
    fn constant_ordinal(&self, id: ExprId) -> Option<i64> {
        match self.unit.exprs.get_expr(id).kind {
            ExprKind::IntegerLiteral(n) => Some(n),
            ExprKind::Negate(inner) => self
                .unit
                .exprs
                .get_expr(inner)
                .kind
                .integer_literal()
                .map(i64::wrapping_neg),
            _ => None,
        }
    }
}
