//! Flat expression trees.
//!
//! Expressions are allocated in an [`ExprArena`] and referenced by
//! [`ExprId`]. Children are always allocated before their parent, so a tree
//! can never contain a cycle. Set-literal members are stored as a contiguous
//! range of IDs in the arena's shared list storage.

use std::fmt;

use crate::{Name, Span};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// A contiguous run of expression IDs in the arena's list storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    start: u32,
    len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic (set union/difference/intersection for set operands)
    Add,
    Subtract,
    Multiply,
    FloatDivide,
    IntegerDivide,
    Mod,

    // Boolean
    And,
    Or,

    // Relational
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::FloatDivide => "/",
            BinaryOp::IntegerDivide => "div",
            BinaryOp::Mod => "mod",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::In => "in",
        }
    }

    /// Whether this is one of `/`, `div`, `mod`.
    pub fn is_division(self) -> bool {
        matches!(
            self,
            BinaryOp::FloatDivide | BinaryOp::IntegerDivide | BinaryOp::Mod
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Expression node kinds.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Reference to a name whose value is bound at run time.
    Variable(Name),
    IntegerLiteral(i64),
    RealLiteral(f64),
    StringLiteral(Name),
    Negate(ExprId),
    Not(ExprId),
    /// `[m1, m2, ...]`; members in source order.
    SetLiteral(ExprRange),
    /// Set-literal range member with resolved inclusive bounds.
    Subrange { low: i64, high: i64 },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

impl ExprKind {
    /// Integer payload of a literal node, if this is one.
    pub fn integer_literal(&self) -> Option<i64> {
        match self {
            ExprKind::IntegerLiteral(n) => Some(*n),
            _ => None,
        }
    }
}

/// An expression node with its source location.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Arena owning expression nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(expr);
        ExprId(id)
    }

    /// Store a list of expression IDs contiguously, returning its range.
    ///
    /// # Panics
    /// Panics if list storage exceeds `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        let to_u32 = |n: usize| {
            u32::try_from(n).unwrap_or_else(|_| panic!("expression list storage exceeded u32::MAX"))
        };
        ExprRange {
            start: to_u32(start),
            len: to_u32(self.expr_lists.len() - start),
        }
    }

    /// Get an expression by ID.
    ///
    /// IDs are only ever minted by this arena, so indexing is in bounds.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get the IDs stored in a range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
