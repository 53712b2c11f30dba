//! Runtime values.

use std::fmt;

use pas_ir::{Name, StringInterner};

use crate::IntSet;

/// A runtime value. Values are produced fresh by each evaluation.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    String(Name),
    Set(IntSet),
}

impl Value {
    /// Result of an operation with no defined meaning for its operands.
    pub const SENTINEL: Value = Value::Integer(0);

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Set(_) => "set",
        }
    }

    /// Numeric value with integers promoted to real.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Pascal integer-to-real promotion is lossy by definition"
    )]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Real(x) => Some(*x),
            Value::Boolean(_) | Value::String(_) | Value::Set(_) => None,
        }
    }

    /// Render with string payloads resolved through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on whole reals
            Value::Real(x) => write!(f, "{x:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(name) => write!(f, "'{}'", self.interner.lookup(*name)),
            Value::Set(set) => write!(f, "{set}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let interner = StringInterner::new();
        let cases = [
            (Value::Integer(-4), "-4"),
            (Value::Real(3.5), "3.5"),
            (Value::Real(2.0), "2.0"),
            (Value::Boolean(true), "true"),
            (Value::String(interner.intern("abc")), "'abc'"),
            (Value::Set([1, 2].into_iter().collect()), "[1, 2]"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.display(&interner).to_string(), expected);
        }
    }

    #[test]
    fn test_promotion() {
        assert_eq!(Value::Integer(7).as_real(), Some(7.0));
        assert_eq!(Value::Boolean(false).as_real(), None);
        assert_eq!(Value::SENTINEL.type_name(), "integer");
    }
}
