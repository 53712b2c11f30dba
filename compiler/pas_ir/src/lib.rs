//! Core IR for the Pascal set front end.
//!
//! Flat, arena-allocated data shared by the lexer, parser and evaluator:
//! - [`Span`] byte ranges and interned [`Name`]s
//! - [`Token`] streams
//! - [`ExprArena`] expression trees addressed by [`ExprId`]
//! - [`TypeArena`] type descriptors addressed by [`TypeId`]
//! - the [`SymbolTable`] filled by declaration sections

mod expr;
mod name;
mod span;
mod symbol;
mod token;
mod types;

pub use expr::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprRange};
pub use name::{Name, StringInterner};
pub use span::Span;
pub use symbol::{ConstValue, Symbol, SymbolId, SymbolKind, SymbolTable};
pub use token::{Token, TokenKind, TokenList};
pub use types::{ScalarKind, TypeArena, TypeForm, TypeId};
