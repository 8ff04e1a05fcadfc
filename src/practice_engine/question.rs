//! The practice question value: a 2- or 3-operand arithmetic expression
//! with its answer derived once at construction.
//!
//! Shape invariants (operand count, operator count, fraction-operand list
//! length) are enforced by the checked constructors, so a `Question` that
//! exists always has a well-formed expression. Whether the question is
//! *usable* for its tier is a separate signal: `correct_answer` is total
//! (division by zero yields the sentinel `0`) and `is_valid()` is the
//! authoritative check callers consult before trusting it.

use thiserror::Error;

use crate::practice_engine::evaluator;
use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::helpers;
use crate::practice_engine::models::{AnswerType, DifficultyLevel, Language, Op, SolutionMethod};
use crate::practice_engine::strategies;

/// Rejected question shapes. These are programming errors on the caller's
/// side; the constructors make them unrepresentable as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("a question needs 2 or 3 operands, got {0}")]
    OperandCount(usize),
    #[error("expected {expected} operators for the operand count, got {found}")]
    OperationCount { expected: usize, found: usize },
    #[error("fraction operand list must parallel the operands: expected {expected}, got {found}")]
    FractionOperandCount { expected: usize, found: usize },
}

/// A single practice item. Immutable once constructed; every derived field
/// is computed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    numbers: Vec<i64>,
    operations: Vec<Op>,
    fraction_operands: Option<Vec<Option<Fraction>>>,
    tier: DifficultyLevel,
    correct_answer: i64,
    answer_type: AnswerType,
    fraction_answer: Option<Fraction>,
    valid: bool,
}

impl Question {
    /// Build a question from integer operands.
    pub fn new(
        numbers: Vec<i64>,
        operations: Vec<Op>,
        tier: DifficultyLevel,
    ) -> Result<Question, QuestionError> {
        Question::with_fractions(numbers, operations, None, tier)
    }

    /// Build a question where some operands may be fractions.
    ///
    /// `fraction_operands`, when present, must parallel `numbers`; entry `i`
    /// overrides `numbers[i]` as the effective operand. A list with no
    /// `Some` entries is normalized away.
    pub fn with_fractions(
        numbers: Vec<i64>,
        operations: Vec<Op>,
        fraction_operands: Option<Vec<Option<Fraction>>>,
        tier: DifficultyLevel,
    ) -> Result<Question, QuestionError> {
        if !(2..=3).contains(&numbers.len()) {
            return Err(QuestionError::OperandCount(numbers.len()));
        }
        if operations.len() != numbers.len() - 1 {
            return Err(QuestionError::OperationCount {
                expected: numbers.len() - 1,
                found: operations.len(),
            });
        }
        let fraction_operands = match fraction_operands {
            Some(list) if list.len() != numbers.len() => {
                return Err(QuestionError::FractionOperandCount {
                    expected: numbers.len(),
                    found: list.len(),
                });
            }
            Some(list) if list.iter().all(Option::is_none) => None,
            other => other,
        };

        let operands: Vec<Fraction> = numbers
            .iter()
            .enumerate()
            .map(|(i, &n)| effective_operand(i, n, fraction_operands.as_deref()))
            .collect();
        let eval = evaluator::evaluate(&operands, &operations);

        let exact = eval.result.simplified();
        let correct_answer = eval.truncated();
        let (answer_type, fraction_answer) = if tier.allows_fractions() && !exact.is_whole() {
            (AnswerType::Fraction, Some(exact))
        } else {
            (AnswerType::Integer, None)
        };
        let valid = !eval.division_by_zero
            && (tier.allows_fractions()
                || (!eval.fractional_division && exact.numerator() >= 0));

        Ok(Question {
            numbers,
            operations,
            fraction_operands,
            tier,
            correct_answer,
            answer_type,
            fraction_answer,
            valid,
        })
    }

    /// Convenience constructor for the 2-operand shape.
    pub fn pair(a: i64, op: Op, b: i64, tier: DifficultyLevel) -> Question {
        Question::new(vec![a, b], vec![op], tier).expect("2-operand shape is always well-formed")
    }

    /// Convenience constructor for the 3-operand shape.
    pub fn triple(a: i64, op1: Op, b: i64, op2: Op, c: i64, tier: DifficultyLevel) -> Question {
        Question::new(vec![a, b, c], vec![op1, op2], tier)
            .expect("3-operand shape is always well-formed")
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn operations(&self) -> &[Op] {
        &self.operations
    }

    pub fn fraction_operands(&self) -> Option<&[Option<Fraction>]> {
        self.fraction_operands.as_deref()
    }

    pub fn tier(&self) -> DifficultyLevel {
        self.tier
    }

    /// The whole-number answer. Total: a division by zero yields `0` here
    /// and `false` from [`is_valid`](Self::is_valid) — check validity
    /// before trusting the number.
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    pub fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    /// The exact answer, present only when the true result is non-integer
    /// and the tier permits fractions. Always simplified.
    pub fn fraction_answer(&self) -> Option<Fraction> {
        self.fraction_answer
    }

    /// Whether this question is usable for its tier: no division by zero,
    /// and outside the fraction-permissive tier every division divides
    /// evenly and the result is non-negative.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The effective operands with integers lifted to `n/1`.
    pub(crate) fn operands(&self) -> Vec<Fraction> {
        self.numbers
            .iter()
            .enumerate()
            .map(|(i, &n)| effective_operand(i, n, self.fraction_operands.as_deref()))
            .collect()
    }

    /// Check an integer answer against [`correct_answer`](Self::correct_answer).
    pub fn check_answer(&self, answer: i64) -> bool {
        answer == self.correct_answer
    }

    /// Check a fraction answer. Simplification-insensitive: `10/6` is
    /// accepted for a `5/3` answer. When the true answer is an integer,
    /// an equivalent fraction (`4/2` for `2`) is accepted.
    pub fn check_fraction_answer(&self, answer: Fraction) -> bool {
        match self.fraction_answer {
            Some(expected) => answer == expected,
            None => answer == Fraction::from_integer(self.correct_answer),
        }
    }

    /// Check a decimal answer within `tolerance` of the true value.
    pub fn check_decimal_answer(&self, value: f64, tolerance: f64) -> bool {
        let expected = match self.fraction_answer {
            Some(f) => f.to_decimal(),
            None => self.correct_answer as f64,
        };
        (expected - value).abs() <= tolerance
    }

    /// Display text, e.g. `"5 + 3 = ?"` or `"1/2 × 4 = ?"`.
    pub fn question_text(&self) -> String {
        format!(
            "{} = ?",
            helpers::expression_str(
                &self.numbers,
                &self.operations,
                self.fraction_operands.as_deref()
            )
        )
    }

    /// Canonical identity of the practice item: operands and operator
    /// symbols interleaved (`"5+3"`, `"5+3-2"`). Fraction operands refine
    /// but do not replace this identity, so de-duplication treats `1/2 + 3`
    /// and `1 + 3` with the same numbers as the same item.
    pub fn combination_key(&self) -> String {
        let mut key = self.numbers[0].to_string();
        for (i, op) in self.operations.iter().enumerate() {
            key.push(op.symbol());
            key.push_str(&self.numbers[i + 1].to_string());
        }
        key
    }

    /// The mental-math method a worked solution should follow, given the
    /// tier the question is being practiced in. With no tier context the
    /// method is always [`SolutionMethod::Standard`].
    pub fn solution_method(&self, tier: Option<DifficultyLevel>) -> SolutionMethod {
        strategies::select(self, tier)
    }

    /// Multi-line worked-solution text in the requested language.
    pub fn solution_steps(&self, tier: Option<DifficultyLevel>, language: Language) -> String {
        strategies::steps(self, tier, language)
    }
}

fn effective_operand(i: usize, n: i64, fractions: Option<&[Option<Fraction>]>) -> Fraction {
    fractions
        .and_then(|list| list.get(i).copied().flatten())
        .unwrap_or_else(|| Fraction::from_integer(n))
}
