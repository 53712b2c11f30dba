//! Tree-walking interpreter for Pascal expressions.
//!
//! Children are evaluated before their parent combines them, left operand
//! first. Every recursive step is depth-counted and runs under
//! `ensure_sufficient_stack`, so hand-built or very deep trees degrade to a
//! flagged sentinel instead of overflowing the stack.

mod set_literal;

use pas_diagnostic::{DiagnosticSink, ErrorCode};
use pas_ir::{ExprArena, ExprId, ExprKind, Name};
use pas_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{evaluate_binary, negate, not, Environment, Value, COMPONENT};

/// Limits on evaluation work.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EvalConfig {
    /// Maximum expression nesting before `E6031`.
    pub max_depth: u32,
    /// Maximum members of one set literal before `E6070`.
    pub max_set_elements: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: 10_000,
            max_set_elements: 1 << 20,
        }
    }
}

pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    env: &'a Environment,
    sink: &'a mut dyn DiagnosticSink,
    config: EvalConfig,
    depth: u32,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        arena: &'a ExprArena,
        env: &'a Environment,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Interpreter {
            arena,
            env,
            sink,
            config: EvalConfig::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate the expression rooted at `id`.
    pub fn evaluate(&mut self, id: ExprId) -> Value {
        if self.depth >= self.config.max_depth {
            let span = self.arena.get_expr(id).span;
            debug!(depth = self.depth, "evaluation depth limit reached");
            self.sink.flag(span, ErrorCode::E6031, COMPONENT);
            return Value::SENTINEL;
        }

        self.depth += 1;
        let value = ensure_sufficient_stack(|| self.eval_expr(id));
        self.depth -= 1;
        value
    }

    fn eval_expr(&mut self, id: ExprId) -> Value {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Variable(name) => self.eval_variable(name),
            ExprKind::IntegerLiteral(n) => Value::Integer(n),
            ExprKind::RealLiteral(x) => Value::Real(x),
            ExprKind::StringLiteral(name) => Value::String(name),
            ExprKind::Negate(operand) => {
                let value = self.evaluate(operand);
                negate(&value)
            }
            ExprKind::Not(operand) => {
                let value = self.evaluate(operand);
                not(&value)
            }
            ExprKind::SetLiteral(members) => self.eval_set_literal(members, expr.span),
            ExprKind::Subrange { low, high } => self.eval_subrange(low, high, expr.span),
            ExprKind::Binary { op, left, right } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                evaluate_binary(left, right, op, expr.span, self.sink)
            }
        }
    }

    fn eval_variable(&self, name: Name) -> Value {
        if let Some(value) = self.env.lookup(name) {
            return value.clone();
        }
        debug!(?name, "unbound variable");
        Value::SENTINEL
    }
}
