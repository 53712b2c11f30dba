//! Type specification parsing.
//!
//! Dispatches on the current token: `set` and `array` to their own
//! productions, everything else to the simple-type grammar (named types,
//! enumerations and subranges). Descriptors are allocated in the unit's
//! `TypeArena` with children first, so a named type is shared by ID rather
//! than copied.

mod set;

use pas_diagnostic::{redefined_identifier, undefined_identifier, unexpected_token, ErrorCode};
use pas_ir::{ConstValue, Name, Span, Symbol, SymbolKind, TokenKind, TypeForm, TypeId};
use pas_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::recovery::{
    DOT_DOT_SET, ENUM_CONSTANT_START, ENUM_DEFINITION_FOLLOW, INDEX_CONTINUE, INDEX_FOLLOW,
    INDEX_START, LEFT_BRACKET_SET, OF_SET, RIGHT_BRACKET_SET,
};
use crate::Parser;

impl Parser<'_> {
    /// Parse a type specification.
    ///
    /// Always returns a descriptor; after an unrecoverable error that is
    /// [`TypeId::ERROR`].
    pub fn parse_type_spec(&mut self) -> TypeId {
        if self.type_depth >= self.config.max_type_depth {
            let span = self.cursor.current_span();
            debug!(depth = self.type_depth, "type nesting limit reached");
            self.flag(span, ErrorCode::E1014);
            return TypeId::ERROR;
        }

        self.type_depth += 1;
        let kind = *self.cursor.current_kind();
        let ty = ensure_sufficient_stack(|| match kind {
            TokenKind::Set => self.parse_set_type(),
            TokenKind::Array => self.parse_array_type(),
            _ => self.parse_simple_type(),
        });
        self.type_depth -= 1;
        ty
    }

    /// Parse a named type, enumeration or subrange.
    pub(crate) fn parse_simple_type(&mut self) -> TypeId {
        let span = self.cursor.current_span();
        match *self.cursor.current_kind() {
            TokenKind::Ident(name) => match self.unit.symbols.lookup(name).map(|s| s.kind) {
                Some(SymbolKind::Type(ty)) => {
                    self.cursor.advance();
                    ty
                }
                Some(SymbolKind::Constant { .. }) => self.parse_subrange(),
                Some(SymbolKind::Variable(_)) => {
                    self.cursor.advance();
                    self.flag(span, ErrorCode::E2005);
                    TypeId::ERROR
                }
                None => {
                    self.cursor.advance();
                    let text = self.cursor.interner().lookup(name);
                    self.emit(undefined_identifier(span, text));
                    TypeId::ERROR
                }
            },
            TokenKind::LParen => self.parse_enumeration(),
            TokenKind::Int(_)
            | TokenKind::Real(_)
            | TokenKind::Str(_)
            | TokenKind::Plus
            | TokenKind::Minus => self.parse_subrange(),
            _ => {
                self.flag(span, ErrorCode::E1005);
                TypeId::ERROR
            }
        }
    }

    /// Parse `min..max`.
    fn parse_subrange(&mut self) -> TypeId {
        let start = self.cursor.current_span();
        let min = self.parse_constant();

        self.synchronize(DOT_DOT_SET, "`..`");
        self.consume_or_flag(&TokenKind::DotDot, ErrorCode::E1006);

        let max = self.parse_constant();
        let span = start.merge(self.cursor.previous_span());

        match (min, max) {
            (Some(min), Some(max)) => self.subrange_type(min, max, span),
            _ => TypeId::ERROR,
        }
    }

    fn subrange_type(
        &mut self,
        (min, min_ty): (ConstValue, TypeId),
        (max, max_ty): (ConstValue, TypeId),
        span: Span,
    ) -> TypeId {
        if min_ty != max_ty {
            self.flag(span, ErrorCode::E2003);
            return TypeId::ERROR;
        }
        let (Some(min), Some(max)) = (min.ordinal(), max.ordinal()) else {
            // Real and string bounds
            self.flag(span, ErrorCode::E1005);
            return TypeId::ERROR;
        };
        if min > max {
            self.flag(span, ErrorCode::E2004);
            return TypeId::ERROR;
        }
        self.unit.types.alloc(TypeForm::Subrange {
            base: min_ty,
            min,
            max,
        })
    }

    /// Parse `(a, b, c)`, defining each name as a constant of the new type.
    fn parse_enumeration(&mut self) -> TypeId {
        self.cursor.advance();
        let mut constants: Vec<(Name, Span)> = Vec::new();

        loop {
            self.synchronize(ENUM_CONSTANT_START, "identifier");
            let span = self.cursor.current_span();
            if let Some(name) = self.cursor.current_ident() {
                self.cursor.advance();
                if let Some(&(_, previous)) = constants.iter().find(|(seen, _)| *seen == name) {
                    let text = self.cursor.interner().lookup(name);
                    self.emit(redefined_identifier(span, previous, text));
                } else {
                    constants.push((name, span));
                }
            } else {
                self.flag(span, ErrorCode::E1011);
            }

            self.synchronize(ENUM_DEFINITION_FOLLOW, "`,` or `)`");
            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.consume_or_flag(&TokenKind::RParen, ErrorCode::E1007);

        let ty = self.unit.types.alloc(TypeForm::Enumeration {
            constants: constants.iter().map(|(name, _)| *name).collect(),
        });
        for (ordinal, (name, span)) in (0_i64..).zip(constants) {
            self.define(
                name,
                span,
                SymbolKind::Constant {
                    value: ConstValue::Enum(ordinal),
                    ty,
                },
            );
        }
        ty
    }

    /// Parse `array [index {, index}] of element`.
    ///
    /// Several index types nest right to left, so `array [a, b] of t` builds
    /// `array [a] of array [b] of t`.
    fn parse_array_type(&mut self) -> TypeId {
        self.cursor.advance();

        self.synchronize(LEFT_BRACKET_SET, "`[`");
        self.consume_or_flag(&TokenKind::LBracket, ErrorCode::E1003);

        let mut indexes = Vec::new();
        loop {
            let before = self.cursor.position();
            self.synchronize(INDEX_START, "index type");

            let start = self.cursor.current_span();
            let index = self.parse_simple_type();
            if index != TypeId::ERROR && self.unit.types.ordinal_count(index).is_none() {
                let span = start.merge(self.cursor.previous_span());
                self.flag(span, ErrorCode::E1005);
            }
            indexes.push(index);

            self.synchronize(INDEX_FOLLOW, "`,` or `]`");
            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
            } else if INDEX_CONTINUE.contains(self.cursor.current_kind())
                && self.cursor.position() > before
            {
                let kind = *self.cursor.current_kind();
                let span = self.cursor.current_span();
                self.emit(unexpected_token(span, "`,`", kind.display_name()));
            } else {
                break;
            }
        }

        self.synchronize(RIGHT_BRACKET_SET, "`]`");
        self.consume_or_flag(&TokenKind::RBracket, ErrorCode::E1004);

        self.synchronize(OF_SET, "`of`");
        self.consume_or_flag(&TokenKind::Of, ErrorCode::E1002);

        let mut element = self.parse_type_spec();
        for index in indexes.into_iter().rev() {
            let count = self.unit.types.ordinal_count(index).unwrap_or(0);
            element = self.unit.types.alloc(TypeForm::Array {
                index,
                element,
                count,
            });
        }
        element
    }

    /// Parse an optionally signed constant: a literal or a constant's name.
    ///
    /// One-character strings are characters. Returns `None` after flagging
    /// when no constant is present.
    pub(crate) fn parse_constant(&mut self) -> Option<(ConstValue, TypeId)> {
        let start = self.cursor.current_span();
        let negative = match self.cursor.current_kind() {
            TokenKind::Minus => Some(true),
            TokenKind::Plus => Some(false),
            _ => None,
        };
        if negative.is_some() {
            self.cursor.advance();
        }

        let span = self.cursor.current_span();
        let constant = match *self.cursor.current_kind() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                (ConstValue::Integer(n), TypeId::INTEGER)
            }
            TokenKind::Real(bits) => {
                self.cursor.advance();
                (ConstValue::Real(f64::from_bits(bits)), TypeId::REAL)
            }
            TokenKind::Str(name) => {
                self.cursor.advance();
                let text = self.cursor.interner().lookup(name);
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => (ConstValue::Char(c), TypeId::CHAR),
                    _ => (ConstValue::Str(name), TypeId::STRING),
                }
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                match self.unit.symbols.lookup(name).map(|s| s.kind) {
                    Some(SymbolKind::Constant { value, ty }) => (value, ty),
                    Some(_) => {
                        self.flag(span, ErrorCode::E1012);
                        return None;
                    }
                    None => {
                        let text = self.cursor.interner().lookup(name);
                        self.emit(undefined_identifier(span, text));
                        return None;
                    }
                }
            }
            _ => {
                self.flag(span, ErrorCode::E1012);
                return None;
            }
        };

        match negative {
            None => Some(constant),
            Some(negative) => {
                let (value, ty) = constant;
                let value = match value {
                    ConstValue::Integer(n) if negative => ConstValue::Integer(n.wrapping_neg()),
                    ConstValue::Real(x) if negative => ConstValue::Real(-x),
                    ConstValue::Integer(_) | ConstValue::Real(_) => value,
                    _ => {
                        let span = start.merge(self.cursor.previous_span());
                        self.flag(span, ErrorCode::E2003);
                        return None;
                    }
                };
                Some((value, ty))
            }
        }
    }

    /// Enter a symbol, reporting a redefinition instead if the name is taken.
    pub(crate) fn define(&mut self, name: Name, span: Span, kind: SymbolKind) {
        if let Err(existing) = self.unit.symbols.define(Symbol { name, kind, span }) {
            let previous = self.unit.symbols.get(existing).span;
            let text = self.cursor.interner().lookup(name);
            self.emit(redefined_identifier(span, previous, text));
        }
    }
}

#[cfg(test)]
mod tests;
