//! Exact expression evaluation under operator precedence.
//!
//! Evaluation is total: a division by zero contributes the sentinel value
//! `0` and raises a flag instead of failing, so `Question::correct_answer`
//! always has a value and `Question::is_valid` stays the authoritative
//! signal. A second flag records whether any division step produced a
//! non-integer result, which is what disqualifies a question outside the
//! fraction-permissive tier.

use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::models::Op;

/// Outcome of evaluating an expression exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The exact result. Zero when a division by zero occurred.
    pub result: Fraction,
    /// A division step had a zero divisor.
    pub division_by_zero: bool,
    /// A division step (intermediate or final) left a remainder.
    pub fractional_division: bool,
}

impl Evaluation {
    fn exact(result: Fraction) -> Evaluation {
        Evaluation {
            result,
            division_by_zero: false,
            fractional_division: false,
        }
    }

    /// Whole-number result, truncated toward zero.
    pub fn truncated(&self) -> i64 {
        let s = self.result.simplified();
        s.numerator() / s.denominator()
    }
}

/// Apply one operator to two exact operands.
pub fn apply(op: Op, a: Fraction, b: Fraction) -> Evaluation {
    match op {
        Op::Add => Evaluation::exact(a + b),
        Op::Sub => Evaluation::exact(a - b),
        Op::Mul => Evaluation::exact(a * b),
        Op::Div => match a.checked_div(b) {
            Some(q) => Evaluation {
                result: q,
                division_by_zero: false,
                fractional_division: !q.is_whole(),
            },
            None => Evaluation {
                result: Fraction::from_integer(0),
                division_by_zero: true,
                fractional_division: false,
            },
        },
    }
}

/// Evaluate a 2- or 3-operand expression.
///
/// Two operands: direct application. Three operands with `op1, op2`: when
/// `op2` binds strictly tighter, `op2(x1, x2)` is computed first and folded
/// into `x0` via `op1`; otherwise evaluation runs left to right. Flags from
/// both steps accumulate.
///
/// Callers guarantee `operands.len() == ops.len() + 1` and 2..=3 operands;
/// `Question`'s checked constructors enforce that shape.
pub fn evaluate(operands: &[Fraction], ops: &[Op]) -> Evaluation {
    assert_eq!(operands.len(), ops.len() + 1, "operand/operator shape");
    match ops.len() {
        1 => apply(ops[0], operands[0], operands[1]),
        2 => {
            let (op1, op2) = (ops[0], ops[1]);
            let (first, second) = if op2.precedence() > op1.precedence() {
                let inner = apply(op2, operands[1], operands[2]);
                let outer = apply(op1, operands[0], inner.result);
                (inner, outer)
            } else {
                let inner = apply(op1, operands[0], operands[1]);
                let outer = apply(op2, inner.result, operands[2]);
                (inner, outer)
            };
            Evaluation {
                result: second.result,
                division_by_zero: first.division_by_zero || second.division_by_zero,
                fractional_division: first.fractional_division || second.fractional_division,
            }
        }
        n => panic!("unsupported operator count: {n}"),
    }
}
