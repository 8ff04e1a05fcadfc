//! The fallback narrative: the standard written algorithm.
//!
//! Two-operand questions get the fixed "Solve / Using the standard
//! algorithm" template. Three-operand questions get one of two narratives:
//! a left-to-right walk when the operators bind equally (or the first binds
//! tighter), or a "higher precedence first" walk that names the
//! sub-expression evaluated out of source order. Fraction operands and
//! fraction answers render inline in `a/b` form.

use crate::practice_engine::evaluator;
use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::helpers::{localized, operand_str};
use crate::practice_engine::models::Language;
use crate::practice_engine::question::Question;

/// Render a value: whole numbers as plain integers, anything else as `a/b`.
fn value_str(f: Fraction) -> String {
    let s = f.simplified();
    if s.denominator() == 1 {
        s.numerator().to_string()
    } else {
        s.to_string()
    }
}

/// The answer as display text: the exact fraction when one is carried,
/// else the whole-number answer.
fn answer_str(question: &Question) -> String {
    match question.fraction_answer() {
        Some(f) => f.to_string(),
        None => question.correct_answer().to_string(),
    }
}

pub(super) fn steps(question: &Question, language: Language) -> String {
    match question.operations().len() {
        1 => steps_two_operand(question, language),
        _ => steps_three_operand(question, language),
    }
}

fn steps_two_operand(question: &Question, language: Language) -> String {
    let numbers = question.numbers();
    let fracs = question.fraction_operands();
    let x0 = operand_str(0, numbers, fracs);
    let x1 = operand_str(1, numbers, fracs);
    let op = question.operations()[0];
    let answer = answer_str(question);
    localized(
        language,
        format!(
            "Solve: {x0} {op} {x1} = {answer}\n\
             Using the standard algorithm: compute {x0} {op} {x1} to get {answer}.\n\
             Final Answer: {x0} {op} {x1} = {answer}"
        ),
        format!(
            "Resuelve: {x0} {op} {x1} = {answer}\n\
             Con el algoritmo estándar: calcula {x0} {op} {x1} para obtener {answer}.\n\
             Respuesta final: {x0} {op} {x1} = {answer}"
        ),
    )
}

fn steps_three_operand(question: &Question, language: Language) -> String {
    let numbers = question.numbers();
    let fracs = question.fraction_operands();
    let x0 = operand_str(0, numbers, fracs);
    let x1 = operand_str(1, numbers, fracs);
    let x2 = operand_str(2, numbers, fracs);
    let (op1, op2) = (question.operations()[0], question.operations()[1]);
    let operands = question.operands();
    let answer = answer_str(question);
    let expr = format!("{x0} {op1} {x1} {op2} {x2}");

    if op2.precedence() > op1.precedence() {
        let inner = value_str(evaluator::apply(op2, operands[1], operands[2]).result);
        localized(
            language,
            format!(
                "Solve: {expr} = ?\n\
                 {op2} binds tighter, so evaluate {x1} {op2} {x2} first: {x1} {op2} {x2} = {inner}.\n\
                 Then {x0} {op1} {inner} = {answer}.\n\
                 Final Answer: {expr} = {answer}"
            ),
            format!(
                "Resuelve: {expr} = ?\n\
                 {op2} tiene mayor prioridad, así que primero se evalúa {x1} {op2} {x2}: {x1} {op2} {x2} = {inner}.\n\
                 Luego {x0} {op1} {inner} = {answer}.\n\
                 Respuesta final: {expr} = {answer}"
            ),
        )
    } else {
        let inner = value_str(evaluator::apply(op1, operands[0], operands[1]).result);
        localized(
            language,
            format!(
                "Solve: {expr} = ?\n\
                 Work left to right: {x0} {op1} {x1} = {inner}.\n\
                 Then {inner} {op2} {x2} = {answer}.\n\
                 Final Answer: {expr} = {answer}"
            ),
            format!(
                "Resuelve: {expr} = ?\n\
                 De izquierda a derecha: {x0} {op1} {x1} = {inner}.\n\
                 Luego {inner} {op2} {x2} = {answer}.\n\
                 Respuesta final: {expr} = {answer}"
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::{DifficultyLevel, Op};

    #[test]
    fn two_operand_template() {
        let q = Question::pair(27, Op::Add, 14, DifficultyLevel::MixedOperations);
        let text = steps(&q, Language::English);
        assert!(text.starts_with("Solve: 27 + 14 = 41"));
        assert!(text.contains("Using the standard algorithm"));
        assert!(text.ends_with("Final Answer: 27 + 14 = 41"));
    }

    #[test]
    fn higher_precedence_narrative_names_the_inner_expression() {
        let q = Question::triple(2, Op::Add, 3, Op::Mul, 4, DifficultyLevel::MixedOperations);
        let text = steps(&q, Language::English);
        assert!(text.contains("evaluate 3 × 4 first"));
        assert!(text.contains("3 × 4 = 12"));
        assert!(text.contains("Then 2 + 12 = 14"));
        assert!(text.ends_with("Final Answer: 2 + 3 × 4 = 14"));
    }

    #[test]
    fn equal_precedence_narrative_walks_left_to_right() {
        let q = Question::triple(10, Op::Div, 2, Op::Add, 3, DifficultyLevel::MixedOperations);
        let text = steps(&q, Language::English);
        assert!(text.contains("Work left to right: 10 ÷ 2 = 5"));
        assert!(text.contains("Then 5 + 3 = 8"));

        let text = steps(&q, Language::Spanish);
        assert!(text.contains("De izquierda a derecha"));
        assert!(text.ends_with("Respuesta final: 10 ÷ 2 + 3 = 8"));
    }

    #[test]
    fn fraction_answers_render_inline() {
        let q = Question::pair(5, Op::Div, 3, DifficultyLevel::Fractions);
        let text = steps(&q, Language::English);
        assert!(text.ends_with("Final Answer: 5 ÷ 3 = 5/3"));
    }
}
