//! Set literal construction.
//!
//! Members are folded left to right over `(set, previous)`, where
//! `previous` starts at 0 and tracks the last integer member. A `Subrange`
//! member inserts every value from `previous` through its high bound; its
//! own low bound is not consulted. The parser lowers `lo..hi` to the pair
//! `lo, Subrange[lo, hi]`, which makes the two readings agree for source
//! literals.

use pas_diagnostic::ErrorCode;
use pas_ir::{ExprId, ExprKind, ExprRange, Span};
use tracing::debug;

use super::Interpreter;
use crate::{IntSet, Value, COMPONENT};

/// A set under construction, capped at a member budget.
struct SetBuilder {
    set: IntSet,
    limit: usize,
    truncated: bool,
}

impl SetBuilder {
    fn new(limit: usize) -> Self {
        SetBuilder {
            set: IntSet::new(),
            limit,
            truncated: false,
        }
    }

    fn has_room_for(&self, n: i64) -> bool {
        self.set.len() < self.limit || self.set.contains(n)
    }

    fn insert(&mut self, n: i64) {
        if self.has_room_for(n) {
            self.set.insert(n);
        } else {
            self.truncated = true;
        }
    }

    /// Insert `low..=high`; empty when `low > high`.
    fn insert_range(&mut self, low: i64, high: i64) {
        for n in low..=high {
            if !self.has_room_for(n) {
                self.truncated = true;
                return;
            }
            self.set.insert(n);
        }
    }
}

impl Interpreter<'_> {
    pub(super) fn eval_set_literal(&mut self, members: ExprRange, span: Span) -> Value {
        let arena = self.arena;
        let start = (SetBuilder::new(self.config.max_set_elements), 0_i64);
        let (builder, _) = arena
            .get_expr_list(members)
            .iter()
            .fold(start, |(mut builder, previous), &member| {
                let previous = self.add_member(&mut builder, previous, member);
                (builder, previous)
            });
        self.finish(builder, span)
    }

    /// A bare subrange outside a literal denotes `[low..high]`.
    pub(super) fn eval_subrange(&mut self, low: i64, high: i64, span: Span) -> Value {
        let mut builder = SetBuilder::new(self.config.max_set_elements);
        builder.insert_range(low, high);
        self.finish(builder, span)
    }

    /// Add one member and return the new previous bound.
    fn add_member(&mut self, builder: &mut SetBuilder, previous: i64, member: ExprId) -> i64 {
        match self.arena.get_expr(member).kind {
            ExprKind::IntegerLiteral(n) => {
                builder.insert(n);
                n
            }
            ExprKind::Subrange { high, .. } => {
                builder.insert_range(previous, high);
                high
            }
            _ => match self.evaluate(member) {
                Value::Integer(n) => {
                    builder.insert(n);
                    n
                }
                other => {
                    debug!(ty = other.type_name(), "non-integer set member ignored");
                    previous
                }
            },
        }
    }

    fn finish(&mut self, builder: SetBuilder, span: Span) -> Value {
        if builder.truncated {
            debug!(limit = builder.limit, "set literal truncated");
            self.sink.flag(span, ErrorCode::E6070, COMPONENT);
        }
        Value::Set(builder.set)
    }
}
