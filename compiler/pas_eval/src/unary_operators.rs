//! Unary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the operand. Operands the operator does
//! not apply to yield [`Value::SENTINEL`].

use tracing::debug;

use crate::Value;

/// Arithmetic negation. Integers stay integers, reals stay reals.
pub fn negate(value: &Value) -> Value {
    match value {
        Value::Integer(n) => Value::Integer(n.wrapping_neg()),
        Value::Real(x) => Value::Real(-x),
        Value::Boolean(_) | Value::String(_) | Value::Set(_) => {
            undefined("-", value);
            Value::SENTINEL
        }
    }
}

/// Logical `not`.
pub fn not(value: &Value) -> Value {
    match value {
        Value::Boolean(b) => Value::Boolean(!b),
        Value::Integer(_) | Value::Real(_) | Value::String(_) | Value::Set(_) => {
            undefined("not", value);
            Value::SENTINEL
        }
    }
}

#[cold]
fn undefined(op: &'static str, value: &Value) {
    debug!(op, operand = value.type_name(), "undefined unary operand");
}
