//! Subtraction strategies: breaking ten and borrowing ten.
//!
//! Both cover subtractions where the ones digit of the minuend is too small
//! and a ten must be opened up. Breaking ten is the teens case (minuend
//! 11..=19): the minuend splits into ten-plus-ones and the subtrahend comes
//! out of the ten. Borrowing ten is the general multi-ten case (minuend
//! ≥ 20): one ten is borrowed into the ones column.

use super::TwoOperand;
use crate::practice_engine::helpers::localized;
use crate::practice_engine::models::{Language, Op};

pub(super) fn applies_breaking_ten(s: &TwoOperand) -> bool {
    s.op == Op::Sub && (11..=19).contains(&s.a) && s.a % 10 < s.b && s.b <= s.a
}

pub(super) fn applies_borrowing_ten(s: &TwoOperand) -> bool {
    s.op == Op::Sub && s.a >= 20 && s.b >= 1 && s.b <= s.a && s.a % 10 < s.b % 10
}

pub(super) fn steps_breaking_ten(s: &TwoOperand, language: Language) -> String {
    let ones = s.a % 10;
    let from_ten = 10 - s.b;
    localized(
        language,
        format!(
            "Solve: {a} - {b} = {r}\n\
             Break the ten: split {a} into 10 + {ones}.\n\
             10 - {b} = {from_ten}.\n\
             {from_ten} + {ones} = {r}.\n\
             Final Answer: {a} - {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} - {b} = {r}\n\
             Rompe la decena: separa {a} en 10 + {ones}.\n\
             10 - {b} = {from_ten}.\n\
             {from_ten} + {ones} = {r}.\n\
             Respuesta final: {a} - {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}

pub(super) fn steps_borrowing_ten(s: &TwoOperand, language: Language) -> String {
    // 42 - 17: 42 = 30 + 12, then 12 - 7 = 5 and 30 - 10 = 20.
    let teen = 10 + s.a % 10;
    let rest_tens = s.a - teen;
    let b_ones = s.b % 10;
    let b_tens = s.b - b_ones;
    let ones_part = teen - b_ones;
    let tens_part = rest_tens - b_tens;
    localized(
        language,
        format!(
            "Solve: {a} - {b} = {r}\n\
             Borrow a ten: {a} = {rest_tens} + {teen}.\n\
             {teen} - {b_ones} = {ones_part}.\n\
             {rest_tens} - {b_tens} = {tens_part}.\n\
             {tens_part} + {ones_part} = {r}.\n\
             Final Answer: {a} - {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} - {b} = {r}\n\
             Pide prestada una decena: {a} = {rest_tens} + {teen}.\n\
             {teen} - {b_ones} = {ones_part}.\n\
             {rest_tens} - {b_tens} = {tens_part}.\n\
             {tens_part} + {ones_part} = {r}.\n\
             Respuesta final: {a} - {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(a: i64, b: i64) -> TwoOperand {
        TwoOperand { a, b, op: Op::Sub, result: a - b }
    }

    #[test]
    fn breaking_ten_is_the_teens_borrow() {
        assert!(applies_breaking_ten(&shape(15, 7)));
        assert!(applies_breaking_ten(&shape(11, 2)));
        assert!(!applies_breaking_ten(&shape(15, 3))); // 5 >= 3, no borrow
        assert!(!applies_breaking_ten(&shape(25, 7))); // minuend not in the teens
        assert!(!applies_breaking_ten(&shape(9, 7))); // no ten to break
    }

    #[test]
    fn borrowing_ten_is_the_multi_ten_borrow() {
        assert!(applies_borrowing_ten(&shape(42, 17)));
        assert!(applies_borrowing_ten(&shape(23, 8)));
        assert!(!applies_borrowing_ten(&shape(42, 12))); // 2 >= 2, no borrow
        assert!(!applies_borrowing_ten(&shape(15, 7))); // teens belong to breaking ten
    }

    #[test]
    fn breaking_ten_steps_open_the_ten() {
        let text = steps_breaking_ten(&shape(15, 7), Language::English);
        assert!(text.contains("split 15 into 10 + 5"));
        assert!(text.contains("10 - 7 = 3"));
        assert!(text.contains("3 + 5 = 8"));
        assert!(text.ends_with("Final Answer: 15 - 7 = 8"));
    }

    #[test]
    fn borrowing_ten_steps_work_column_by_column() {
        let text = steps_borrowing_ten(&shape(42, 17), Language::English);
        assert!(text.contains("42 = 30 + 12"));
        assert!(text.contains("12 - 7 = 5"));
        assert!(text.contains("30 - 10 = 20"));
        assert!(text.contains("20 + 5 = 25"));

        let text = steps_borrowing_ten(&shape(23, 8), Language::Spanish);
        assert!(text.contains("23 = 10 + 13"));
        assert!(text.ends_with("Respuesta final: 23 - 8 = 15"));
    }
}
