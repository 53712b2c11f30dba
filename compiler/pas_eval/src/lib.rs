//! Tree-walking evaluator for Pascal expressions.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of run-time values
//! - [`IntSet`]: ordered integer sets backing `set of` values
//! - [`Environment`]: run-time bindings for `Variable` nodes
//! - [`Interpreter`]: recursive dispatch over [`ExprKind`](pas_ir::ExprKind)
//! - `evaluate_binary` / `negate` / `not`: operator tables selected by
//!   operand domain
//!
//! Evaluation never stops on an error. Division by zero and exhausted
//! budgets are flagged through the [`DiagnosticSink`] and a default value
//! is substituted; operand combinations with no defined meaning quietly
//! yield [`Value::SENTINEL`].

mod environment;
mod int_set;
pub mod interpreter;
mod operators;
mod unary_operators;
mod value;

use pas_diagnostic::DiagnosticSink;
use pas_ir::{ExprArena, ExprId};

pub use environment::Environment;
pub use int_set::IntSet;
pub use interpreter::{EvalConfig, Interpreter};
pub use operators::{evaluate_binary, OperandDomain};
pub use unary_operators::{negate, not};
pub use value::{Value, ValueDisplay};

/// Component name attached to evaluator diagnostics.
pub const COMPONENT: &str = "evaluator";

/// Evaluate `root` with the default configuration.
pub fn evaluate(
    exprs: &ExprArena,
    env: &Environment,
    root: ExprId,
    sink: &mut dyn DiagnosticSink,
) -> Value {
    Interpreter::new(exprs, env, sink).evaluate(root)
}
