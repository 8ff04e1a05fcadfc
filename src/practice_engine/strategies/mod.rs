//! Solution strategies grouped by operation family.
//!
//! Each module contains the discriminating predicates and the step-text
//! renderers for one family of mental-math methods:
//!
//! | Module           | Methods |
//! |------------------|---------|
//! | `addition`       | making ten, leveling ten |
//! | `subtraction`    | breaking ten, borrowing ten |
//! | `multiplication` | multiplication table, decomposition |
//! | `division`       | grouping, inverse-multiplication verification |
//! | `standard`       | fallback template + both 3-operand narratives |
//!
//! Selection runs through [`RULES`], an ordered `(method, predicate)` table
//! evaluated top to bottom — the decision logic is a data structure, not a
//! nest of conditionals, so each predicate is testable on its own.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod standard;
pub mod subtraction;

use crate::practice_engine::models::{DifficultyLevel, Language, Op, SolutionMethod};
use crate::practice_engine::question::Question;

/// The shape the named strategies reason about: a 2-operand expression over
/// plain integers, with its whole-number result.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TwoOperand {
    pub a: i64,
    pub b: i64,
    pub op: Op,
    pub result: i64,
}

impl TwoOperand {
    /// `None` for 3-operand questions and questions with fraction operands;
    /// those always take the standard narrative.
    fn from_question(question: &Question) -> Option<TwoOperand> {
        if question.numbers().len() != 2 || question.fraction_operands().is_some() {
            return None;
        }
        Some(TwoOperand {
            a: question.numbers()[0],
            b: question.numbers()[1],
            op: question.operations()[0],
            result: question.correct_answer(),
        })
    }
}

type Applies = fn(&TwoOperand) -> bool;

/// Ordered strategy rules. The first matching predicate wins; grouping is
/// checked before verification so small divisions read as sharing.
const RULES: &[(SolutionMethod, Applies)] = &[
    (SolutionMethod::MakingTen, addition::applies_making_ten),
    (SolutionMethod::LevelingTen, addition::applies_leveling_ten),
    (SolutionMethod::BreakingTen, subtraction::applies_breaking_ten),
    (SolutionMethod::BorrowingTen, subtraction::applies_borrowing_ten),
    (SolutionMethod::MultiplicationTable, multiplication::applies_table),
    (SolutionMethod::DecompositionMultiplication, multiplication::applies_decomposition),
    (SolutionMethod::GroupingDivision, division::applies_grouping),
    (SolutionMethod::DivisionVerification, division::applies_verification),
];

/// The tiers where mental-math methods are taught. The mixed and fraction
/// tiers present the standard algorithm only.
fn mental_math_tier(tier: DifficultyLevel) -> bool {
    matches!(
        tier,
        DifficultyLevel::WithinTen
            | DifficultyLevel::WithinTwenty
            | DifficultyLevel::WithinFifty
            | DifficultyLevel::TimesTable
            | DifficultyLevel::WithinHundred
    )
}

/// Choose the solution method for `question` practiced at `tier`.
pub(crate) fn select(question: &Question, tier: Option<DifficultyLevel>) -> SolutionMethod {
    let Some(tier) = tier else {
        return SolutionMethod::Standard;
    };
    if !mental_math_tier(tier) {
        return SolutionMethod::Standard;
    }
    let Some(shape) = TwoOperand::from_question(question) else {
        return SolutionMethod::Standard;
    };
    for &(method, applies) in RULES {
        if applies(&shape) {
            return method;
        }
    }
    SolutionMethod::Standard
}

/// Render the worked solution for `question` at `tier` in `language`.
pub(crate) fn steps(
    question: &Question,
    tier: Option<DifficultyLevel>,
    language: Language,
) -> String {
    let method = select(question, tier);
    let shape = TwoOperand::from_question(question);
    match (method, shape) {
        (SolutionMethod::MakingTen, Some(s)) => addition::steps_making_ten(&s, language),
        (SolutionMethod::LevelingTen, Some(s)) => addition::steps_leveling_ten(&s, language),
        (SolutionMethod::BreakingTen, Some(s)) => subtraction::steps_breaking_ten(&s, language),
        (SolutionMethod::BorrowingTen, Some(s)) => subtraction::steps_borrowing_ten(&s, language),
        (SolutionMethod::MultiplicationTable, Some(s)) => multiplication::steps_table(&s, language),
        (SolutionMethod::DecompositionMultiplication, Some(s)) => {
            multiplication::steps_decomposition(&s, language)
        }
        (SolutionMethod::GroupingDivision, Some(s)) => division::steps_grouping(&s, language),
        (SolutionMethod::DivisionVerification, Some(s)) => {
            division::steps_verification(&s, language)
        }
        _ => standard::steps(question, language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tier_context_means_standard() {
        let q = Question::pair(8, Op::Add, 5, DifficultyLevel::WithinTwenty);
        assert_eq!(select(&q, None), SolutionMethod::Standard);
    }

    #[test]
    fn mixed_and_fraction_tiers_stay_standard() {
        let q = Question::pair(8, Op::Add, 5, DifficultyLevel::MixedOperations);
        assert_eq!(
            select(&q, Some(DifficultyLevel::MixedOperations)),
            SolutionMethod::Standard
        );
        assert_eq!(
            select(&q, Some(DifficultyLevel::Fractions)),
            SolutionMethod::Standard
        );
    }

    #[test]
    fn three_operand_questions_stay_standard() {
        let q = Question::triple(8, Op::Add, 5, Op::Sub, 2, DifficultyLevel::WithinTwenty);
        assert_eq!(
            select(&q, Some(DifficultyLevel::WithinTwenty)),
            SolutionMethod::Standard
        );
    }

    #[test]
    fn rule_order_prefers_grouping_over_verification() {
        // 12 ÷ 3: divisor ≤ 5 and quotient ≤ 12, so grouping wins.
        let q = Question::pair(12, Op::Div, 3, DifficultyLevel::TimesTable);
        assert_eq!(
            select(&q, Some(DifficultyLevel::TimesTable)),
            SolutionMethod::GroupingDivision
        );
        // 84 ÷ 7: quotient 12 but divisor 7, so verification.
        let q = Question::pair(84, Op::Div, 7, DifficultyLevel::WithinHundred);
        assert_eq!(
            select(&q, Some(DifficultyLevel::WithinHundred)),
            SolutionMethod::DivisionVerification
        );
    }
}
