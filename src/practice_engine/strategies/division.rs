//! Division strategies: grouping and inverse-multiplication verification.
//!
//! Grouping narrates a small division as dealing the dividend into equal
//! groups — only worthwhile while both the group count and the group size
//! are small enough to picture. Every other even division states the
//! quotient and confirms it by multiplying back.

use super::TwoOperand;
use crate::practice_engine::helpers::localized;
use crate::practice_engine::models::{Language, Op};

fn even_division(s: &TwoOperand) -> bool {
    s.op == Op::Div && s.b != 0 && s.a % s.b == 0
}

pub(super) fn applies_grouping(s: &TwoOperand) -> bool {
    even_division(s) && s.b >= 1 && s.b <= 5 && s.a / s.b <= 12
}

pub(super) fn applies_verification(s: &TwoOperand) -> bool {
    even_division(s) && s.b >= 1
}

pub(super) fn steps_grouping(s: &TwoOperand, language: Language) -> String {
    localized(
        language,
        format!(
            "Solve: {a} ÷ {b} = {r}\n\
             Share {a} into {b} equal groups.\n\
             Each group holds {r}, since {b} × {r} = {a}.\n\
             Final Answer: {a} ÷ {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} ÷ {b} = {r}\n\
             Reparte {a} en {b} grupos iguales.\n\
             Cada grupo recibe {r}, porque {b} × {r} = {a}.\n\
             Respuesta final: {a} ÷ {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}

pub(super) fn steps_verification(s: &TwoOperand, language: Language) -> String {
    localized(
        language,
        format!(
            "Solve: {a} ÷ {b} = {r}\n\
             Check by multiplying back: {r} × {b} = {a}.\n\
             The quotient is confirmed.\n\
             Final Answer: {a} ÷ {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} ÷ {b} = {r}\n\
             Comprueba multiplicando: {r} × {b} = {a}.\n\
             El cociente queda confirmado.\n\
             Respuesta final: {a} ÷ {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}
