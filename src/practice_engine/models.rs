use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Returned when an operator symbol character cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized operation symbol '{0}'")]
pub struct UnknownOp(pub char);

/// The four arithmetic operations a question may contain.
///
/// Persisted as its symbol character (`+ - × ÷`), which is also what
/// question text and combination keys use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Display symbol. Multiplication and division use the schoolbook
    /// glyphs, not `*` and `/`.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
        }
    }

    /// Binding strength: 1 for additive, 2 for multiplicative.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Op {
    type Error = UnknownOp;

    /// Accepts the display glyphs plus the ASCII spellings `*` and `/`.
    fn try_from(c: char) -> Result<Self, UnknownOp> {
        match c {
            '+'       => Ok(Op::Add),
            '-' | '−' => Ok(Op::Sub),
            '×' | '*' => Ok(Op::Mul),
            '÷' | '/' => Ok(Op::Div),
            other     => Err(UnknownOp(other)),
        }
    }
}

impl From<Op> for char {
    fn from(op: Op) -> char {
        op.symbol()
    }
}

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

/// The seven practice tiers, ordered from easiest to hardest.
///
/// Each tier is a fixed generation policy: operand range, operator set,
/// batch size, scoring, and whether fraction operands / non-integer
/// division results are permitted (only [`DifficultyLevel::Fractions`]).
///
/// For the first six tiers `question_count() * points_per_question() == 100`
/// so a perfect round always scores 100; the Fractions tier is exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    WithinTen,
    WithinTwenty,
    WithinFifty,
    TimesTable,
    WithinHundred,
    MixedOperations,
    Fractions,
}

impl DifficultyLevel {
    /// All tiers in canonical order.
    pub const ALL: [DifficultyLevel; 7] = [
        DifficultyLevel::WithinTen,
        DifficultyLevel::WithinTwenty,
        DifficultyLevel::WithinFifty,
        DifficultyLevel::TimesTable,
        DifficultyLevel::WithinHundred,
        DifficultyLevel::MixedOperations,
        DifficultyLevel::Fractions,
    ];

    /// Inclusive bounds on generated operands.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            DifficultyLevel::WithinTen       => 1..=10,
            DifficultyLevel::WithinTwenty    => 1..=20,
            DifficultyLevel::WithinFifty     => 1..=50,
            DifficultyLevel::TimesTable      => 1..=10,
            DifficultyLevel::WithinHundred   => 1..=100,
            DifficultyLevel::MixedOperations => 1..=100,
            DifficultyLevel::Fractions       => 1..=12,
        }
    }

    /// The operators this tier may generate.
    pub fn supported_operations(self) -> &'static [Op] {
        match self {
            DifficultyLevel::WithinTen
            | DifficultyLevel::WithinTwenty
            | DifficultyLevel::WithinFifty => &[Op::Add, Op::Sub],
            DifficultyLevel::TimesTable
            | DifficultyLevel::WithinHundred => &[Op::Mul, Op::Div],
            DifficultyLevel::MixedOperations
            | DifficultyLevel::Fractions => &[Op::Add, Op::Sub, Op::Mul, Op::Div],
        }
    }

    /// How many questions a full round of this tier contains.
    pub fn question_count(self) -> usize {
        match self {
            DifficultyLevel::WithinTen       => 10,
            DifficultyLevel::WithinTwenty    => 10,
            DifficultyLevel::WithinFifty     => 20,
            DifficultyLevel::TimesTable      => 10,
            DifficultyLevel::WithinHundred   => 20,
            DifficultyLevel::MixedOperations => 20,
            DifficultyLevel::Fractions       => 10,
        }
    }

    /// Score awarded per correct answer.
    pub fn points_per_question(self) -> u32 {
        match self {
            DifficultyLevel::WithinTen       => 10,
            DifficultyLevel::WithinTwenty    => 10,
            DifficultyLevel::WithinFifty     => 5,
            DifficultyLevel::TimesTable      => 10,
            DifficultyLevel::WithinHundred   => 5,
            DifficultyLevel::MixedOperations => 5,
            DifficultyLevel::Fractions       => 15,
        }
    }

    /// Whether fraction operands and non-integer division results are
    /// permitted. True only for the top tier.
    pub fn allows_fractions(self) -> bool {
        matches!(self, DifficultyLevel::Fractions)
    }

    /// Stable identifier used by the wrong-question store.
    pub fn raw_id(self) -> &'static str {
        match self {
            DifficultyLevel::WithinTen       => "within_ten",
            DifficultyLevel::WithinTwenty    => "within_twenty",
            DifficultyLevel::WithinFifty     => "within_fifty",
            DifficultyLevel::TimesTable      => "times_table",
            DifficultyLevel::WithinHundred   => "within_hundred",
            DifficultyLevel::MixedOperations => "mixed_operations",
            DifficultyLevel::Fractions       => "fractions",
        }
    }

    /// Inverse of [`raw_id`](Self::raw_id). `None` for unknown identifiers.
    pub fn from_raw_id(id: &str) -> Option<DifficultyLevel> {
        DifficultyLevel::ALL.into_iter().find(|t| t.raw_id() == id)
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DifficultyLevel::WithinTen       => "Within Ten",
            DifficultyLevel::WithinTwenty    => "Within Twenty",
            DifficultyLevel::WithinFifty     => "Within Fifty",
            DifficultyLevel::TimesTable      => "Times Table",
            DifficultyLevel::WithinHundred   => "Within One Hundred",
            DifficultyLevel::MixedOperations => "Mixed Operations",
            DifficultyLevel::Fractions       => "Fractions",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Answers and solution methods
// ---------------------------------------------------------------------------

/// Whether a question's true result is an integer or a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerType {
    Integer,
    Fraction,
}

/// The named mental-math methods a worked solution can follow.
///
/// Selection happens in `strategies::select` via an ordered rule table;
/// `Standard` is the fallback for everything the named methods don't cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionMethod {
    MakingTen,
    BreakingTen,
    BorrowingTen,
    LevelingTen,
    MultiplicationTable,
    DecompositionMultiplication,
    DivisionVerification,
    GroupingDivision,
    Standard,
}

impl SolutionMethod {
    /// Stable identifier used by the wrong-question store.
    pub fn raw_id(self) -> &'static str {
        match self {
            SolutionMethod::MakingTen                   => "making_ten",
            SolutionMethod::BreakingTen                 => "breaking_ten",
            SolutionMethod::BorrowingTen                => "borrowing_ten",
            SolutionMethod::LevelingTen                 => "leveling_ten",
            SolutionMethod::MultiplicationTable         => "multiplication_table",
            SolutionMethod::DecompositionMultiplication => "decomposition_multiplication",
            SolutionMethod::DivisionVerification        => "division_verification",
            SolutionMethod::GroupingDivision            => "grouping_division",
            SolutionMethod::Standard                    => "standard",
        }
    }

    /// Inverse of [`raw_id`](Self::raw_id). `None` for unknown identifiers.
    pub fn from_raw_id(id: &str) -> Option<SolutionMethod> {
        [
            SolutionMethod::MakingTen,
            SolutionMethod::BreakingTen,
            SolutionMethod::BorrowingTen,
            SolutionMethod::LevelingTen,
            SolutionMethod::MultiplicationTable,
            SolutionMethod::DecompositionMultiplication,
            SolutionMethod::DivisionVerification,
            SolutionMethod::GroupingDivision,
            SolutionMethod::Standard,
        ]
        .into_iter()
        .find(|m| m.raw_id() == id)
    }
}

impl fmt::Display for SolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolutionMethod::MakingTen                   => "Making Ten",
            SolutionMethod::BreakingTen                 => "Breaking Ten",
            SolutionMethod::BorrowingTen                => "Borrowing Ten",
            SolutionMethod::LevelingTen                 => "Leveling Ten",
            SolutionMethod::MultiplicationTable         => "Multiplication Table",
            SolutionMethod::DecompositionMultiplication => "Decomposition Multiplication",
            SolutionMethod::DivisionVerification        => "Division Verification",
            SolutionMethod::GroupingDivision            => "Grouping Division",
            SolutionMethod::Standard                    => "Standard",
        };
        write!(f, "{}", s)
    }
}

/// Output language for worked solutions and verbal fraction forms.
///
/// Passed explicitly into every text-producing call; the engine reads no
/// ambient locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
}
