//! Exact rational arithmetic for fraction-tier questions.
//!
//! `Fraction` keeps whatever numerator/denominator it was built with and
//! normalizes on demand: equality and ordering compare values (`1/2 == 2/4`),
//! and `simplified()` produces the canonical reduced form with a positive
//! denominator. A zero denominator is unrepresentable through the public
//! constructors, so arithmetic never has to re-check it.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::practice_engine::helpers;
use crate::practice_engine::models::Language;

/// Returned when a `(numerator, denominator)` pair carries a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fraction denominator must not be zero")]
pub struct ZeroDenominator;

/// Returned when text cannot be read as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a fraction: expected \"a/b\" or a vulgar-fraction glyph")]
pub struct ParseFractionError;

/// Single-glyph vulgar fractions accepted by parsing and offered by
/// [`Fraction::unicode_description`]. Halves, thirds, quarters, fifths,
/// sixths, and eighths.
const UNICODE_FRACTIONS: &[(i64, i64, char)] = &[
    (1, 2, '½'),
    (1, 3, '⅓'),
    (2, 3, '⅔'),
    (1, 4, '¼'),
    (3, 4, '¾'),
    (1, 5, '⅕'),
    (2, 5, '⅖'),
    (3, 5, '⅗'),
    (4, 5, '⅘'),
    (1, 6, '⅙'),
    (5, 6, '⅚'),
    (1, 8, '⅛'),
    (3, 8, '⅜'),
    (5, 8, '⅝'),
    (7, 8, '⅞'),
];

/// An exact rational value. Immutable; every operation returns a new value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Build a fraction. `None` when `denominator == 0`.
    pub fn new(numerator: i64, denominator: i64) -> Option<Fraction> {
        if denominator == 0 {
            return None;
        }
        Some(Fraction { numerator, denominator })
    }

    /// Lift an integer to `n/1`.
    pub fn from_integer(n: i64) -> Fraction {
        Fraction { numerator: n, denominator: 1 }
    }

    pub fn numerator(self) -> i64 {
        self.numerator
    }

    pub fn denominator(self) -> i64 {
        self.denominator
    }

    /// Canonical form: reduced by `gcd(|n|, |d|)`, denominator positive.
    pub fn simplified(self) -> Fraction {
        let g = gcd(self.numerator.abs(), self.denominator.abs()).max(1);
        let sign = if self.denominator < 0 { -1 } else { 1 };
        Fraction {
            numerator: sign * self.numerator / g,
            denominator: (self.denominator / g).abs(),
        }
    }

    /// True when the value is a whole number.
    pub fn is_whole(self) -> bool {
        self.simplified().denominator == 1
    }

    /// `|numerator| >= |denominator|` — the value carries a whole part.
    pub fn is_improper(self) -> bool {
        self.numerator.abs() >= self.denominator.abs()
    }

    /// Split into whole part and proper remainder.
    ///
    /// `None` when the value is already whole or proper: `5/3 → Some((1, 2/3))`,
    /// `-5/3 → Some((-1, 2/3))` (sign carried by the whole part), `2/3 → None`,
    /// `6/3 → None`.
    pub fn to_mixed_number(self) -> Option<(i64, Fraction)> {
        let s = self.simplified();
        if s.denominator == 1 || s.numerator.abs() < s.denominator {
            return None;
        }
        let whole = s.numerator / s.denominator;
        let remainder = Fraction {
            numerator: s.numerator.abs() % s.denominator,
            denominator: s.denominator,
        };
        Some((whole, remainder))
    }

    pub fn to_decimal(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact division. `None` when `rhs` is the zero fraction.
    pub fn checked_div(self, rhs: Fraction) -> Option<Fraction> {
        if rhs.numerator == 0 {
            return None;
        }
        Fraction::new(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
        .map(Fraction::simplified)
    }

    /// Read `"a/b"` notation or a single vulgar-fraction glyph.
    ///
    /// Malformed text, zero denominators, and unknown glyphs all yield
    /// `None` — parsing never panics.
    pub fn parse(text: &str) -> Option<Fraction> {
        let text = text.trim();
        let mut chars = text.chars();
        if let (Some(glyph), None) = (chars.next(), chars.next()) {
            if let Some(&(n, d, _)) = UNICODE_FRACTIONS.iter().find(|&&(_, _, g)| g == glyph) {
                return Fraction::new(n, d);
            }
        }
        let (num, den) = text.split_once('/')?;
        let numerator: i64 = num.trim().parse().ok()?;
        let denominator: i64 = den.trim().parse().ok()?;
        Fraction::new(numerator, denominator)
    }

    /// The vulgar-fraction glyph for the simplified value, else the plain
    /// `"a/b"` form.
    pub fn unicode_description(self) -> String {
        let s = self.simplified();
        UNICODE_FRACTIONS
            .iter()
            .find(|&&(n, d, _)| n == s.numerator && d == s.denominator)
            .map(|&(_, _, g)| g.to_string())
            .unwrap_or_else(|| s.to_string())
    }

    /// Verbal form: cardinal numerator + ordinal denominator, pluralized
    /// when the numerator exceeds one. Improper values read as mixed
    /// numbers, whole values as the bare number word.
    ///
    /// `2/3 → "two thirds"` / `"dos tercios"`,
    /// `5/3 → "one and two thirds"` / `"uno y dos tercios"`,
    /// `6/3 → "two"` / `"dos"`.
    pub fn to_words(self, language: Language) -> String {
        let s = self.simplified();
        if s.numerator < 0 {
            let positive = Fraction {
                numerator: -s.numerator,
                denominator: s.denominator,
            };
            let prefix = helpers::localized(language, "minus", "menos");
            return format!("{} {}", prefix, positive.to_words(language));
        }
        if s.denominator == 1 {
            return helpers::cardinal(s.numerator, language);
        }
        if let Some((whole, remainder)) = s.to_mixed_number() {
            let joiner = helpers::localized(language, "and", "y");
            return format!(
                "{} {} {}",
                helpers::cardinal(whole, language),
                joiner,
                remainder.to_words(language)
            );
        }
        helpers::fraction_words(s.numerator, s.denominator, language)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fraction::parse(s).ok_or(ParseFractionError)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = ZeroDenominator;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, ZeroDenominator> {
        Fraction::new(numerator, denominator).ok_or(ZeroDenominator)
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(f: Fraction) -> (i64, i64) {
        (f.numerator, f.denominator)
    }
}

// Value equality: 1/2 == 2/4. Denominators are never zero, so cross
// multiplication is exact.
impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        let lhs = self.numerator * other.denominator;
        let rhs = other.numerator * self.denominator;
        if self.denominator * other.denominator > 0 {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            denominator: self.denominator * rhs.denominator,
        }
        .simplified()
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            denominator: self.denominator * rhs.denominator,
        }
        .simplified()
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        }
        .simplified()
    }
}

impl Add<i64> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: i64) -> Fraction {
        self + Fraction::from_integer(rhs)
    }
}

impl Sub<i64> for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: i64) -> Fraction {
        self - Fraction::from_integer(rhs)
    }
}

impl Mul<i64> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: i64) -> Fraction {
        self * Fraction::from_integer(rhs)
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
