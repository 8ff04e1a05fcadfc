//! The wrong-question-store boundary.
//!
//! The external store keeps a flat record per question: the minimal fields
//! that identify it (`numbers`, `operations`, `fraction_operands`, `tier`)
//! plus cached display fields (`correct_answer`, `solution_method`,
//! `solution_steps`) so the UI can show a stored question without
//! recomputation. The minimal fields are the source of truth: rebuilding a
//! question from them re-derives everything, and [`verify_record`] reports
//! whether the cached fields still agree with a fresh derivation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::models::{DifficultyLevel, Language, Op, SolutionMethod};
use crate::practice_engine::question::{Question, QuestionError};

/// Current record schema. Bump when the field set changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors decoding a stored record.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("unsupported record schema {0}")]
    UnsupportedSchema(u32),
    #[error("unknown tier identifier \"{0}\"")]
    UnknownTier(String),
    #[error("unknown solution method identifier \"{0}\"")]
    UnknownMethod(String),
    #[error("unrecognized operation symbol '{0}'")]
    UnknownOperation(char),
    #[error("fraction operand with zero denominator")]
    ZeroDenominator,
    #[error(transparent)]
    BadShape(#[from] QuestionError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The flat record exchanged with the wrong-question store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub schema: u32,
    pub numbers: Vec<i64>,
    /// Operator symbol characters: `+ - × ÷`.
    pub operations: Vec<char>,
    /// Parallel optional `(numerator, denominator)` pairs.
    pub fraction_operands: Option<Vec<Option<(i64, i64)>>>,
    /// Tier raw identifier, e.g. `"within_twenty"`.
    pub tier: String,
    pub correct_answer: i64,
    pub solution_method: String,
    pub solution_steps: String,
}

/// Flatten a question into its stored record. The cached display fields
/// are rendered in `language`.
pub fn to_record(question: &Question, language: Language) -> QuestionRecord {
    let tier = question.tier();
    QuestionRecord {
        schema: SCHEMA_VERSION,
        numbers: question.numbers().to_vec(),
        operations: question.operations().iter().map(|op| op.symbol()).collect(),
        fraction_operands: question
            .fraction_operands()
            .map(|list| list.iter().map(|f| f.map(Into::into)).collect()),
        tier: tier.raw_id().to_string(),
        correct_answer: question.correct_answer(),
        solution_method: question.solution_method(Some(tier)).raw_id().to_string(),
        solution_steps: question.solution_steps(Some(tier), language),
    }
}

/// Rebuild a question from a record's minimal fields.
///
/// The cached fields are ignored here — derivation from `numbers` /
/// `operations` / `fraction_operands` / `tier` is the source of truth.
pub fn from_record(record: &QuestionRecord) -> Result<Question, PersistError> {
    if record.schema != SCHEMA_VERSION {
        return Err(PersistError::UnsupportedSchema(record.schema));
    }
    let tier = DifficultyLevel::from_raw_id(&record.tier)
        .ok_or_else(|| PersistError::UnknownTier(record.tier.clone()))?;
    let operations = record
        .operations
        .iter()
        .map(|&c| Op::try_from(c).map_err(|e| PersistError::UnknownOperation(e.0)))
        .collect::<Result<Vec<Op>, PersistError>>()?;
    let fraction_operands = record
        .fraction_operands
        .as_ref()
        .map(|list| {
            list.iter()
                .map(|pair| match pair {
                    Some((n, d)) => Fraction::new(*n, *d)
                        .map(Some)
                        .ok_or(PersistError::ZeroDenominator),
                    None => Ok(None),
                })
                .collect::<Result<Vec<Option<Fraction>>, PersistError>>()
        })
        .transpose()?;
    let question = Question::with_fractions(
        record.numbers.clone(),
        operations,
        fraction_operands,
        tier,
    )?;
    Ok(question)
}

/// Check a record's cached fields against a fresh derivation.
///
/// Returns `Ok(true)` when the cached answer, method, and steps all match
/// what recomputation produces (steps may be in either supported
/// language). `Ok(false)` signals divergence — the store should drop or
/// refresh the record.
pub fn verify_record(record: &QuestionRecord) -> Result<bool, PersistError> {
    let question = from_record(record)?;
    let tier = question.tier();
    let method = SolutionMethod::from_raw_id(&record.solution_method)
        .ok_or_else(|| PersistError::UnknownMethod(record.solution_method.clone()))?;
    let answer_matches = record.correct_answer == question.correct_answer();
    let method_matches = method == question.solution_method(Some(tier));
    let steps_match = [Language::English, Language::Spanish]
        .into_iter()
        .any(|lang| question.solution_steps(Some(tier), lang) == record.solution_steps);
    Ok(answer_matches && method_matches && steps_match)
}

/// Serialize a question to the store's JSON record format.
pub fn to_json(question: &Question, language: Language) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&to_record(question, language))?)
}

/// Rebuild a question from the store's JSON record format.
pub fn from_json(json: &str) -> Result<Question, PersistError> {
    let record: QuestionRecord = serde_json::from_str(json)?;
    from_record(&record)
}
