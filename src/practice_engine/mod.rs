//! Core practice engine — exact arithmetic, question modeling, and batch
//! generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operators, tiers, answer/method/language enums |
//! | `fraction`   | Exact rational value type: arithmetic, parsing, formatting, verbal forms |
//! | `evaluator`  | Totalized precedence evaluation over exact fractions |
//! | `question`   | The immutable question value with derived answer and validity |
//! | `helpers`    | Shared text builders: localization, operand formatting, number words |
//! | `strategies` | Mental-math method selection and worked-solution text |
//! | `generator`  | Rejection-sampled unique batches with missed-question re-injection |
//! | `persist`    | Flat record format for the external wrong-question store |

pub mod evaluator;
pub mod fraction;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod persist;
pub mod question;
pub mod strategies;

// Re-export the public API surface so callers can use
// `practice_engine::generate` without reaching into sub-modules.
pub use fraction::Fraction;
pub use generator::{generate, generate_with_rng, GenerationError, GenerationRequest};
pub use models::{AnswerType, DifficultyLevel, Language, Op, SolutionMethod};
pub use persist::{
    from_json, from_record, to_json, to_record, verify_record, PersistError, QuestionRecord,
};
pub use question::{Question, QuestionError};
