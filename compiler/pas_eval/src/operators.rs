//! Binary operator implementations for the evaluator.
//!
//! Operands are classified into an [`OperandDomain`] and each domain has
//! its own operator table. Pattern matching over the fixed value set keeps
//! every combination visible; a combination with no entry yields
//! [`Value::SENTINEL`] without a diagnostic.

use pas_diagnostic::{DiagnosticSink, ErrorCode};
use pas_ir::{BinaryOp, Span};
use tracing::debug;

use crate::{IntSet, Value, COMPONENT};

/// Operands sorted into the domain whose operator table applies, in
/// priority order.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum OperandDomain<'v> {
    /// Both operands are integers.
    Integer(i64, i64),
    /// Both operands are sets.
    Set(&'v IntSet, &'v IntSet),
    /// An integer tested against a set.
    Membership(i64, &'v IntSet),
    /// Anything else; integer operands are promoted to real.
    Real(&'v Value, &'v Value),
}

impl<'v> OperandDomain<'v> {
    pub fn classify(left: &'v Value, right: &'v Value) -> Self {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => OperandDomain::Integer(*a, *b),
            (Value::Set(a), Value::Set(b)) => OperandDomain::Set(a, b),
            (Value::Integer(n), Value::Set(set)) => OperandDomain::Membership(*n, set),
            _ => OperandDomain::Real(left, right),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OperandDomain::Integer(..) => "integer",
            OperandDomain::Set(..) => "set",
            OperandDomain::Membership(..) => "membership",
            OperandDomain::Real(..) => "real",
        }
    }
}

/// Evaluate `left op right`.
///
/// Division by zero is flagged at `span` and replaced by zero of the
/// result's kind.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Operands are fresh per evaluation; taking them by value matches the call sites"
)]
pub fn evaluate_binary(
    left: Value,
    right: Value,
    op: BinaryOp,
    span: Span,
    sink: &mut dyn DiagnosticSink,
) -> Value {
    let domain = OperandDomain::classify(&left, &right);
    let result = match (op, domain) {
        (BinaryOp::And | BinaryOp::Or, _) => eval_bool_binary(&left, &right, op),
        (_, OperandDomain::Integer(a, b)) => eval_int_binary(a, b, op, span, sink),
        (_, OperandDomain::Set(a, b)) => eval_set_binary(a, b, op),
        (_, OperandDomain::Membership(n, set)) => eval_membership(n, set, op),
        (_, OperandDomain::Real(a, b)) => match (a.as_real(), b.as_real()) {
            (Some(a), Some(b)) => eval_real_binary(a, b, op, span, sink),
            _ => None,
        },
    };

    result.unwrap_or_else(|| {
        debug!(
            %op,
            left = left.type_name(),
            right = right.type_name(),
            domain = domain.name(),
            "undefined operand combination"
        );
        Value::SENTINEL
    })
}

#[cold]
fn division_by_zero(span: Span, sink: &mut dyn DiagnosticSink) {
    sink.flag(span, ErrorCode::E6001, COMPONENT);
}

#[expect(
    clippy::cast_precision_loss,
    reason = "`/` on integers is real division"
)]
fn eval_int_binary(
    a: i64,
    b: i64,
    op: BinaryOp,
    span: Span,
    sink: &mut dyn DiagnosticSink,
) -> Option<Value> {
    if op.is_division() && b == 0 {
        division_by_zero(span, sink);
        return Some(if op == BinaryOp::FloatDivide {
            Value::Real(0.0)
        } else {
            Value::Integer(0)
        });
    }

    let value = match op {
        BinaryOp::Add => Value::Integer(a.wrapping_add(b)),
        BinaryOp::Subtract => Value::Integer(a.wrapping_sub(b)),
        BinaryOp::Multiply => Value::Integer(a.wrapping_mul(b)),
        BinaryOp::FloatDivide => Value::Real(a as f64 / b as f64),
        BinaryOp::IntegerDivide => Value::Integer(a.wrapping_div(b)),
        BinaryOp::Mod => Value::Integer(a.wrapping_rem(b)),
        BinaryOp::Eq => Value::Boolean(a == b),
        BinaryOp::Ne => Value::Boolean(a != b),
        BinaryOp::Lt => Value::Boolean(a < b),
        BinaryOp::Le => Value::Boolean(a <= b),
        BinaryOp::Gt => Value::Boolean(a > b),
        BinaryOp::Ge => Value::Boolean(a >= b),
        BinaryOp::And | BinaryOp::Or | BinaryOp::In => return None,
    };
    Some(value)
}

#[expect(
    clippy::float_cmp,
    reason = "Pascal `=` and `<>` on reals compare exactly"
)]
fn eval_real_binary(
    a: f64,
    b: f64,
    op: BinaryOp,
    span: Span,
    sink: &mut dyn DiagnosticSink,
) -> Option<Value> {
    let value = match op {
        BinaryOp::Add => Value::Real(a + b),
        BinaryOp::Subtract => Value::Real(a - b),
        BinaryOp::Multiply => Value::Real(a * b),
        BinaryOp::FloatDivide => {
            if b == 0.0 {
                division_by_zero(span, sink);
                Value::Real(0.0)
            } else {
                Value::Real(a / b)
            }
        }
        BinaryOp::Eq => Value::Boolean(a == b),
        BinaryOp::Ne => Value::Boolean(a != b),
        BinaryOp::Lt => Value::Boolean(a < b),
        BinaryOp::Le => Value::Boolean(a <= b),
        BinaryOp::Gt => Value::Boolean(a > b),
        BinaryOp::Ge => Value::Boolean(a >= b),
        BinaryOp::IntegerDivide | BinaryOp::Mod | BinaryOp::And | BinaryOp::Or | BinaryOp::In => {
            return None
        }
    };
    Some(value)
}

/// Set algebra and containment.
///
/// `<=` scans the left set against the right; `>=` scans the right set
/// against the left.
fn eval_set_binary(a: &IntSet, b: &IntSet, op: BinaryOp) -> Option<Value> {
    let value = match op {
        BinaryOp::Add => Value::Set(a.union(b)),
        BinaryOp::Subtract => Value::Set(a.difference(b)),
        BinaryOp::Multiply => Value::Set(a.intersection(b)),
        BinaryOp::Le => Value::Boolean(b.contains_all(a)),
        BinaryOp::Ge => Value::Boolean(a.contains_all(b)),
        BinaryOp::Eq => Value::Boolean(b.contains_all(a) && a.contains_all(b)),
        BinaryOp::Ne => Value::Boolean(!(b.contains_all(a) && a.contains_all(b))),
        BinaryOp::FloatDivide
        | BinaryOp::IntegerDivide
        | BinaryOp::Mod
        | BinaryOp::And
        | BinaryOp::Or
        | BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::In => return None,
    };
    Some(value)
}

fn eval_membership(n: i64, set: &IntSet, op: BinaryOp) -> Option<Value> {
    (op == BinaryOp::In).then(|| Value::Boolean(set.contains(n)))
}

/// `and` / `or` over two already-evaluated booleans.
fn eval_bool_binary(left: &Value, right: &Value, op: BinaryOp) -> Option<Value> {
    let (Value::Boolean(a), Value::Boolean(b)) = (left, right) else {
        return None;
    };
    match op {
        BinaryOp::And => Some(Value::Boolean(*a && *b)),
        BinaryOp::Or => Some(Value::Boolean(*a || *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pas_diagnostic::Diagnostic;
    use proptest::prelude::*;

    fn eval(left: Value, right: Value, op: BinaryOp) -> (Value, Vec<ErrorCode>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let value = evaluate_binary(left, right, op, Span::new(0, 1), &mut diagnostics);
        (value, diagnostics.iter().map(|d| d.code).collect())
    }

    fn quiet(left: Value, right: Value, op: BinaryOp) -> Value {
        let (value, codes) = eval(left, right, op);
        assert!(codes.is_empty(), "{op}: unexpected {codes:?}");
        value
    }

    fn set(members: &[i64]) -> Value {
        Value::Set(members.iter().copied().collect())
    }

    mod classify {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn priority_order() {
            let int = Value::Integer(1);
            let real = Value::Real(1.0);
            let s = set(&[1]);
            assert_eq!(OperandDomain::classify(&int, &int), OperandDomain::Integer(1, 1));
            assert!(matches!(OperandDomain::classify(&s, &s), OperandDomain::Set(..)));
            assert!(matches!(
                OperandDomain::classify(&int, &s),
                OperandDomain::Membership(1, _)
            ));
            assert_eq!(OperandDomain::classify(&s, &int).name(), "real");
            assert_eq!(OperandDomain::classify(&int, &real), OperandDomain::Real(&int, &real));
        }
    }

    mod integer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn arithmetic() {
            let cases = [
                (BinaryOp::Add, Value::Integer(9)),
                (BinaryOp::Subtract, Value::Integer(5)),
                (BinaryOp::Multiply, Value::Integer(14)),
                (BinaryOp::IntegerDivide, Value::Integer(3)),
                (BinaryOp::Mod, Value::Integer(1)),
                (BinaryOp::FloatDivide, Value::Real(3.5)),
            ];
            for (op, expected) in cases {
                assert_eq!(quiet(Value::Integer(7), Value::Integer(2), op), expected, "{op}");
            }
        }

        #[test]
        fn comparisons() {
            let cases = [
                (BinaryOp::Eq, false),
                (BinaryOp::Ne, true),
                (BinaryOp::Lt, false),
                (BinaryOp::Le, false),
                (BinaryOp::Gt, true),
                (BinaryOp::Ge, true),
            ];
            for (op, expected) in cases {
                assert_eq!(
                    quiet(Value::Integer(7), Value::Integer(2), op),
                    Value::Boolean(expected),
                    "{op}"
                );
            }
        }

        #[test]
        fn division_by_zero_continues() {
            for op in [BinaryOp::IntegerDivide, BinaryOp::Mod] {
                let (value, codes) = eval(Value::Integer(7), Value::Integer(0), op);
                assert_eq!(value, Value::Integer(0));
                assert_eq!(codes, vec![ErrorCode::E6001]);
            }
            let (value, codes) = eval(Value::Integer(7), Value::Integer(0), BinaryOp::FloatDivide);
            assert_eq!(value, Value::Real(0.0));
            assert_eq!(codes, vec![ErrorCode::E6001]);
        }

        #[test]
        fn overflow_wraps() {
            assert_eq!(
                quiet(Value::Integer(i64::MAX), Value::Integer(1), BinaryOp::Add),
                Value::Integer(i64::MIN)
            );
            assert_eq!(
                quiet(Value::Integer(i64::MIN), Value::Integer(-1), BinaryOp::IntegerDivide),
                Value::Integer(i64::MIN)
            );
        }

        #[test]
        fn in_is_undefined() {
            assert_eq!(
                quiet(Value::Integer(1), Value::Integer(1), BinaryOp::In),
                Value::SENTINEL
            );
        }
    }

    mod real {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn promotion() {
            assert_eq!(
                quiet(Value::Integer(1), Value::Real(0.5), BinaryOp::Add),
                Value::Real(1.5)
            );
            assert_eq!(
                quiet(Value::Real(2.5), Value::Integer(2), BinaryOp::Gt),
                Value::Boolean(true)
            );
        }

        #[test]
        fn division_by_zero_continues() {
            let (value, codes) = eval(Value::Real(1.5), Value::Integer(0), BinaryOp::FloatDivide);
            assert_eq!(value, Value::Real(0.0));
            assert_eq!(codes, vec![ErrorCode::E6001]);
        }

        #[test]
        fn integer_division_is_undefined() {
            let (value, codes) = eval(Value::Real(1.5), Value::Real(0.0), BinaryOp::IntegerDivide);
            assert_eq!(value, Value::SENTINEL);
            assert!(codes.is_empty());
        }
    }

    mod sets {
        use super::*;
        use pretty_assertions::assert_eq;

        fn a() -> Value {
            set(&[1, 3, 5])
        }

        fn b() -> Value {
            set(&[3, 4])
        }

        #[test]
        fn algebra() {
            assert_eq!(quiet(a(), b(), BinaryOp::Add), set(&[1, 3, 4, 5]));
            assert_eq!(quiet(a(), b(), BinaryOp::Subtract), set(&[1, 5]));
            assert_eq!(quiet(a(), b(), BinaryOp::Multiply), set(&[3]));
        }

        #[test]
        fn comparisons() {
            assert_eq!(quiet(a(), b(), BinaryOp::Ne), Value::Boolean(true));
            assert_eq!(quiet(a(), b(), BinaryOp::Eq), Value::Boolean(false));
            assert_eq!(quiet(set(&[3]), b(), BinaryOp::Le), Value::Boolean(true));
            assert_eq!(quiet(b(), set(&[3]), BinaryOp::Ge), Value::Boolean(true));
            assert_eq!(quiet(b(), set(&[3]), BinaryOp::Le), Value::Boolean(false));
            assert_eq!(quiet(set(&[]), set(&[]), BinaryOp::Eq), Value::Boolean(true));
        }

        #[test]
        fn membership() {
            assert_eq!(quiet(Value::Integer(3), a(), BinaryOp::In), Value::Boolean(true));
            assert_eq!(quiet(Value::Integer(4), a(), BinaryOp::In), Value::Boolean(false));
            assert_eq!(quiet(Value::Integer(3), a(), BinaryOp::Eq), Value::SENTINEL);
        }

        #[test]
        fn undefined_operators() {
            for op in [BinaryOp::Lt, BinaryOp::Gt, BinaryOp::FloatDivide, BinaryOp::In] {
                assert_eq!(quiet(a(), b(), op), Value::SENTINEL, "{op}");
            }
            assert_eq!(quiet(a(), Value::Integer(3), BinaryOp::In), Value::SENTINEL);
        }

        fn arb_set() -> impl Strategy<Value = Value> {
            prop::collection::btree_set(-20_i64..20, 0..12)
                .prop_map(|members| Value::Set(members.into_iter().collect()))
        }

        proptest! {
            #[test]
            fn equality_is_mutual_containment(x in arb_set(), y in arb_set()) {
                let eq = quiet(x.clone(), y.clone(), BinaryOp::Eq);
                let le = quiet(x.clone(), y.clone(), BinaryOp::Le);
                let ge = quiet(x, y, BinaryOp::Ge);
                let both = le == Value::Boolean(true) && ge == Value::Boolean(true);
                prop_assert_eq!(eq, Value::Boolean(both));
            }

            #[test]
            fn containment_is_reflexive(x in arb_set()) {
                prop_assert_eq!(quiet(x.clone(), x.clone(), BinaryOp::Le), Value::Boolean(true));
                prop_assert_eq!(quiet(x.clone(), x, BinaryOp::Ge), Value::Boolean(true));
            }

            #[test]
            fn ne_negates_eq(x in arb_set(), y in arb_set()) {
                let eq = quiet(x.clone(), y.clone(), BinaryOp::Eq);
                let ne = quiet(x, y, BinaryOp::Ne);
                prop_assert_ne!(eq, ne);
            }
        }
    }

    mod boolean {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn and_or() {
            let t = Value::Boolean(true);
            let f = Value::Boolean(false);
            assert_eq!(quiet(t.clone(), f.clone(), BinaryOp::And), f.clone());
            assert_eq!(quiet(t.clone(), f.clone(), BinaryOp::Or), t.clone());
            assert_eq!(quiet(t, Value::Integer(1), BinaryOp::And), Value::SENTINEL);
        }

        #[test]
        fn booleans_have_no_ordering() {
            let t = Value::Boolean(true);
            assert_eq!(quiet(t.clone(), t, BinaryOp::Eq), Value::SENTINEL);
        }
    }
}
