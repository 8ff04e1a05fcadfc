//! Shared text builders used by question rendering and the solution
//! strategies.
//!
//! Every strategy assembles the same pieces: pick the wording for the
//! requested language, format operands (integer or fraction), and spell
//! numbers out for verbal fraction forms. These helpers centralise that
//! work so strategy files focus on the arithmetic narrative only.

use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::models::{Language, Op};

/// Pick the right wording for the requested language.
///
/// The numeric content of a solution is identical in both languages; only
/// the surrounding prose differs.
pub fn localized<T>(language: Language, english: T, spanish: T) -> T {
    match language {
        Language::English => english,
        Language::Spanish => spanish,
    }
}

/// Render operand `i`: the fraction operand when one is present, else the
/// plain integer.
pub fn operand_str(i: usize, numbers: &[i64], fractions: Option<&[Option<Fraction>]>) -> String {
    if let Some(fracs) = fractions {
        if let Some(Some(f)) = fracs.get(i) {
            return f.to_string();
        }
    }
    numbers[i].to_string()
}

/// Format the bare expression, e.g. `"5 + 3"` or `"1/2 × 4 - 3"`.
pub fn expression_str(
    numbers: &[i64],
    operations: &[Op],
    fractions: Option<&[Option<Fraction>]>,
) -> String {
    let mut out = operand_str(0, numbers, fractions);
    for (i, op) in operations.iter().enumerate() {
        out.push_str(&format!(" {} {}", op.symbol(), operand_str(i + 1, numbers, fractions)));
    }
    out
}

// ---------------------------------------------------------------------------
// Number words
// ---------------------------------------------------------------------------

const EN_SMALL: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

const EN_TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ES_SMALL: [&str; 30] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho",
    "nueve", "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis",
    "diecisiete", "dieciocho", "diecinueve", "veinte", "veintiuno", "veintidós",
    "veintitrés", "veinticuatro", "veinticinco", "veintiséis", "veintisiete",
    "veintiocho", "veintinueve",
];

const ES_TENS: [&str; 7] = [
    "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

/// Spell out a cardinal number up to one hundred; larger magnitudes fall
/// back to digits. Negative values are prefixed "minus"/"menos".
pub fn cardinal(n: i64, language: Language) -> String {
    if n < 0 {
        let prefix = localized(language, "minus", "menos");
        return format!("{} {}", prefix, cardinal(-n, language));
    }
    match language {
        Language::English => match n {
            0..=19 => EN_SMALL[n as usize].to_string(),
            20..=99 => {
                let tens = EN_TENS[(n / 10 - 2) as usize];
                if n % 10 == 0 {
                    tens.to_string()
                } else {
                    format!("{}-{}", tens, EN_SMALL[(n % 10) as usize])
                }
            }
            100 => "one hundred".to_string(),
            _ => n.to_string(),
        },
        Language::Spanish => match n {
            0..=29 => ES_SMALL[n as usize].to_string(),
            30..=99 => {
                let tens = ES_TENS[(n / 10 - 3) as usize];
                if n % 10 == 0 {
                    tens.to_string()
                } else {
                    format!("{} y {}", tens, ES_SMALL[(n % 10) as usize])
                }
            }
            100 => "cien".to_string(),
            _ => n.to_string(),
        },
    }
}

/// Ordinal denominator word, pluralized when `plural`. `None` when the
/// denominator has no common word (callers fall back to "a over b").
fn denominator_word(denominator: i64, plural: bool, language: Language) -> Option<&'static str> {
    let words: &[(&str, &str)] = match language {
        Language::English => &[
            ("half", "halves"),
            ("third", "thirds"),
            ("quarter", "quarters"),
            ("fifth", "fifths"),
            ("sixth", "sixths"),
            ("seventh", "sevenths"),
            ("eighth", "eighths"),
            ("ninth", "ninths"),
            ("tenth", "tenths"),
        ],
        Language::Spanish => &[
            ("medio", "medios"),
            ("tercio", "tercios"),
            ("cuarto", "cuartos"),
            ("quinto", "quintos"),
            ("sexto", "sextos"),
            ("séptimo", "séptimos"),
            ("octavo", "octavos"),
            ("noveno", "novenos"),
            ("décimo", "décimos"),
        ],
    };
    let idx = usize::try_from(denominator).ok()?.checked_sub(2)?;
    let &(singular, plural_form) = words.get(idx)?;
    Some(if plural { plural_form } else { singular })
}

/// Verbal form of a proper fraction: cardinal numerator + ordinal
/// denominator ("two thirds" / "dos tercios"). Denominators with no common
/// word read as "a over b" / "a sobre b".
pub fn fraction_words(numerator: i64, denominator: i64, language: Language) -> String {
    let numerator_word = match (language, numerator) {
        // "un tercio", never "uno tercio"
        (Language::Spanish, 1) => "un".to_string(),
        _ => cardinal(numerator, language),
    };
    match denominator_word(denominator, numerator > 1, language) {
        Some(word) => format!("{} {}", numerator_word, word),
        None => {
            let over = localized(language, "over", "sobre");
            format!("{} {} {}", numerator, over, denominator)
        }
    }
}
