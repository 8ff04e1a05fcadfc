//! Addition strategies: making ten and leveling ten.
//!
//! Making ten is the classic first crossing of the tens boundary: both
//! addends are single digits and the sum passes ten, so the smaller addend
//! is split into "what the larger one needs" plus the rest. Leveling ten
//! covers the later pattern where one addend already sits just under a
//! round ten (ones digit 8 or 9) and the gap is moved over from the other.

use super::TwoOperand;
use crate::practice_engine::helpers::localized;
use crate::practice_engine::models::{Language, Op};

pub(super) fn applies_making_ten(s: &TwoOperand) -> bool {
    s.op == Op::Add && s.a >= 1 && s.b >= 1 && s.a <= 10 && s.b <= 10 && s.a + s.b > 10
}

pub(super) fn applies_leveling_ten(s: &TwoOperand) -> bool {
    if s.op != Op::Add {
        return false;
    }
    let larger = s.a.max(s.b);
    let smaller = s.a.min(s.b);
    let gap = (10 - larger % 10) % 10;
    larger > 10 && (larger % 10 >= 8) && smaller >= gap
}

pub(super) fn steps_making_ten(s: &TwoOperand, language: Language) -> String {
    let larger = s.a.max(s.b);
    let smaller = s.a.min(s.b);
    let need = 10 - larger;
    let rest = smaller - need;
    if need == 0 {
        // One addend is already a full ten.
        return localized(
            language,
            format!(
                "Solve: {a} + {b} = {r}\n\
                 {larger} is already a full ten.\n\
                 10 + {smaller} = {r}.\n\
                 Final Answer: {a} + {b} = {r}",
                a = s.a, b = s.b, r = s.result
            ),
            format!(
                "Resuelve: {a} + {b} = {r}\n\
                 {larger} ya es una decena completa.\n\
                 10 + {smaller} = {r}.\n\
                 Respuesta final: {a} + {b} = {r}",
                a = s.a, b = s.b, r = s.result
            ),
        );
    }
    localized(
        language,
        format!(
            "Solve: {a} + {b} = {r}\n\
             Make ten: {larger} needs {need} more to reach 10.\n\
             Split {smaller} into {need} + {rest}.\n\
             {larger} + {need} = 10, then 10 + {rest} = {r}.\n\
             Final Answer: {a} + {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} + {b} = {r}\n\
             Forma una decena: a {larger} le faltan {need} para llegar a 10.\n\
             Separa {smaller} en {need} + {rest}.\n\
             {larger} + {need} = 10, luego 10 + {rest} = {r}.\n\
             Respuesta final: {a} + {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}

pub(super) fn steps_leveling_ten(s: &TwoOperand, language: Language) -> String {
    let larger = s.a.max(s.b);
    let smaller = s.a.min(s.b);
    let gap = (10 - larger % 10) % 10;
    let leveled = larger + gap;
    let rest = smaller - gap;
    localized(
        language,
        format!(
            "Solve: {a} + {b} = {r}\n\
             Level to a ten: move {gap} from {smaller} over to {larger}.\n\
             {larger} + {gap} = {leveled}, and {smaller} - {gap} = {rest}.\n\
             {leveled} + {rest} = {r}.\n\
             Final Answer: {a} + {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
        format!(
            "Resuelve: {a} + {b} = {r}\n\
             Nivela a una decena: pasa {gap} de {smaller} a {larger}.\n\
             {larger} + {gap} = {leveled}, y {smaller} - {gap} = {rest}.\n\
             {leveled} + {rest} = {r}.\n\
             Respuesta final: {a} + {b} = {r}",
            a = s.a, b = s.b, r = s.result
        ),
    )
}
