//! # math_drill_gen
//!
//! A fully offline, deterministic arithmetic practice generator for a
//! tiered learning app.
//!
//! This library generates batches of unique, valid practice questions
//! across 7 difficulty tiers, evaluates them exactly (including rational
//! results), and produces grade-school worked solutions — "making ten",
//! "breaking ten", times-table facts, and friends — in two languages.
//!
//! ## How it works
//!
//! 1. Create a [`GenerationRequest`] with a tier, a question count, an
//!    optional RNG seed, and any previously-missed questions to re-inject.
//! 2. Call [`generate`] — the engine rejection-samples operands and
//!    operators within the tier's policy (range, operator set, fraction
//!    permissiveness), keeps only valid questions, and de-duplicates by
//!    combination key.
//! 3. Each returned [`Question`] carries its derived answer, validity, and
//!    on demand a named solution method with step-by-step text.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same batch every time — useful for tests and progress tracking.
//! - **Exact arithmetic**: evaluation runs on [`Fraction`] values
//!   throughout, so `5 ÷ 3` is `5/3`, not a float.
//! - **Two languages**: every text-producing call takes a [`Language`];
//!   the engine reads no ambient locale.
//! - **Stable records**: [`to_record`]/[`from_record`] exchange questions
//!   with the external wrong-question store, and reconstruction from the
//!   minimal fields reproduces every derived field exactly.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate, DifficultyLevel, GenerationRequest, Language};
//!
//! // Minimal — a full round for a tier (defaults: entropy seed, no hints):
//! let batch = generate(GenerationRequest::new(DifficultyLevel::WithinTwenty)).unwrap();
//! println!("Q: {}", batch[0].question_text());
//!
//! // Full control — set every field:
//! let batch = generate(GenerationRequest {
//!     tier: DifficultyLevel::MixedOperations,
//!     count: 5,
//!     rng_seed: Some(42),
//!     prior_missed: Vec::new(),
//! })
//! .unwrap();
//!
//! for q in &batch {
//!     println!("{}   (answer: {})", q.question_text(), q.correct_answer());
//!     println!("{}", q.solution_steps(Some(q.tier()), Language::English));
//! }
//! ```

pub mod practice_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    from_json, from_record, generate, generate_with_rng, to_json, to_record, verify_record,
    AnswerType, DifficultyLevel, Fraction, GenerationError, GenerationRequest, Language, Op,
    PersistError, Question, QuestionError, QuestionRecord, SolutionMethod,
};

#[cfg(test)]
mod tests;
