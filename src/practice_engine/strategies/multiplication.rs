//! Multiplication strategies: the times table and decomposition.
//!
//! Single-digit products are table facts and are presented as such. As soon
//! as a factor passes ten, the solution decomposes that factor into tens
//! plus ones and distributes the other factor over both parts.

use super::TwoOperand;
use crate::practice_engine::helpers::localized;
use crate::practice_engine::models::{Language, Op};

pub(super) fn applies_table(s: &TwoOperand) -> bool {
    s.op == Op::Mul && (1..=10).contains(&s.a) && (1..=10).contains(&s.b)
}

pub(super) fn applies_decomposition(s: &TwoOperand) -> bool {
    s.op == Op::Mul && s.a >= 1 && s.b >= 1 && (s.a > 10 || s.b > 10)
}

pub(super) fn steps_table(s: &TwoOperand, language: Language) -> String {
    localized(
        language,
        format!(
            "Solve: {a} × {b} = {r}\n\
             From the multiplication table: {a} × {b} = {r}.\n\
             Final Answer: {a} × {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} × {b} = {r}\n\
             De la tabla de multiplicar: {a} × {b} = {r}.\n\
             Respuesta final: {a} × {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}

pub(super) fn steps_decomposition(s: &TwoOperand, language: Language) -> String {
    // Decompose the larger factor so the partial products stay small.
    let big = s.a.max(s.b);
    let other = s.a.min(s.b);
    let tens = big / 10 * 10;
    let ones = big % 10;
    if ones == 0 {
        let tens_product = tens * other;
        return localized(
            language,
            format!(
                "Solve: {a} × {b} = {r}\n\
                 {big} is {n} tens, and {n} × {other} = {m}.\n\
                 {m} tens make {tens_product}.\n\
                 Final Answer: {a} × {b} = {r}",
                a = s.a, b = s.b, r = s.result,
                n = tens / 10, m = tens / 10 * other
            ),
            format!(
                "Resuelve: {a} × {b} = {r}\n\
                 {big} son {n} decenas, y {n} × {other} = {m}.\n\
                 {m} decenas son {tens_product}.\n\
                 Respuesta final: {a} × {b} = {r}",
                a = s.a, b = s.b, r = s.result,
                n = tens / 10, m = tens / 10 * other
            ),
        );
    }
    let tens_product = tens * other;
    let ones_product = ones * other;
    localized(
        language,
        format!(
            "Solve: {a} × {b} = {r}\n\
             Split {big} into {tens} + {ones}.\n\
             {tens} × {other} = {tens_product}.\n\
             {ones} × {other} = {ones_product}.\n\
             {tens_product} + {ones_product} = {r}.\n\
             Final Answer: {a} × {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} × {b} = {r}\n\
             Separa {big} en {tens} + {ones}.\n\
             {tens} × {other} = {tens_product}.\n\
             {ones} × {other} = {ones_product}.\n\
             {tens_product} + {ones_product} = {r}.\n\
             Respuesta final: {a} × {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}
