//! Operator Matching Helpers
//!
//! Map the current token to a binary operator at each precedence level.

use pas_ir::{BinaryOp, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::Ne),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::Le),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::Ge),
            TokenKind::In => Some(BinaryOp::In),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::FloatDivide),
            TokenKind::Div => Some(BinaryOp::IntegerDivide),
            TokenKind::Mod => Some(BinaryOp::Mod),
            TokenKind::And => Some(BinaryOp::And),
            _ => None,
        }
    }
}
