//! Batch generation: rejection sampling with uniqueness and validity
//! guarantees.
//!
//! Every call owns its RNG and its seen-key set, so concurrent calls from
//! independent callers need no locking. The sampling loop is bounded: a
//! tier whose constraint space is smaller than the requested unique count
//! fails with [`GenerationError::Exhausted`] instead of spinning forever.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use thiserror::Error;

use crate::practice_engine::fraction::Fraction;
use crate::practice_engine::models::{DifficultyLevel, Op};
use crate::practice_engine::question::Question;

/// Candidate draws allowed per requested question before the call gives up.
const MAX_ATTEMPTS_PER_QUESTION: usize = 400;

/// Share of MixedOperations draws that target the 3-operand shape.
const THREE_OPERAND_WEIGHT: f64 = 0.7;

/// Share of Fractions-tier draws that carry fraction operands.
const FRACTION_OPERAND_WEIGHT: f64 = 0.4;

/// Errors a generation call can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The tier's constraint space ran out of fresh valid combinations
    /// before `requested` unique questions were found.
    #[error("generation exhausted: produced {generated} of {requested} unique questions")]
    Exhausted { requested: usize, generated: usize },
}

/// A batch request: which tier, how many questions, an optional seed for
/// reproducible output, and previously-missed questions to re-inject.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub tier: DifficultyLevel,
    pub count: usize,
    pub rng_seed: Option<u64>,
    pub prior_missed: Vec<Question>,
}

impl GenerationRequest {
    /// A full round for `tier` (the tier's own question count, entropy
    /// seed, no missed questions).
    pub fn new(tier: DifficultyLevel) -> GenerationRequest {
        GenerationRequest {
            tier,
            count: tier.question_count(),
            rng_seed: None,
            prior_missed: Vec::new(),
        }
    }
}

/// Generate a batch of unique, valid questions for a tier.
pub fn generate(request: GenerationRequest) -> Result<Vec<Question>, GenerationError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with_rng(&mut rng, request.tier, request.count, &request.prior_missed)
}

/// Core loop with an injected RNG (reproducible in tests).
///
/// Guarantees on success: exactly `count` questions, all `is_valid()` for
/// `tier`, all operands within the tier range, all operators from the tier
/// set, all combination keys distinct. Questions from `prior_missed` that
/// fit the tier lead the batch, at most once each.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    tier: DifficultyLevel,
    count: usize,
    prior_missed: &[Question],
) -> Result<Vec<Question>, GenerationError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Question> = Vec::with_capacity(count);

    // Missed-question re-injection: verbatim, deduplicated, soft preference.
    for missed in prior_missed {
        if out.len() == count {
            break;
        }
        if let Some(q) = refit(missed, tier) {
            if q.is_valid() && seen.insert(q.combination_key()) {
                out.push(q);
            }
        }
    }

    let mut attempts = 0usize;
    let budget = count * MAX_ATTEMPTS_PER_QUESTION;
    while out.len() < count {
        if attempts >= budget {
            return Err(GenerationError::Exhausted {
                requested: count,
                generated: out.len(),
            });
        }
        attempts += 1;

        let Some(candidate) = draw_candidate(rng, tier) else {
            continue;
        };
        if candidate.is_valid() && seen.insert(candidate.combination_key()) {
            out.push(candidate);
        }
    }
    Ok(out)
}

/// Rebuild a missed question under the requested tier, if it fits: operands
/// within range, operators supported. Returns the rebuilt question so that
/// validity and answers are derived for *this* tier.
fn refit(question: &Question, tier: DifficultyLevel) -> Option<Question> {
    let range = tier.range();
    if !question.numbers().iter().all(|n| range.contains(n)) {
        return None;
    }
    if !question
        .operations()
        .iter()
        .all(|op| tier.supported_operations().contains(op))
    {
        return None;
    }
    Question::with_fractions(
        question.numbers().to_vec(),
        question.operations().to_vec(),
        question.fraction_operands().map(|f| f.to_vec()),
        tier,
    )
    .ok()
}

/// Draw one candidate for the tier. The candidate may still be invalid or
/// a duplicate; the caller's rejection loop filters those.
fn draw_candidate<R: Rng>(rng: &mut R, tier: DifficultyLevel) -> Option<Question> {
    let three_operand = tier == DifficultyLevel::MixedOperations
        && rng.gen_bool(THREE_OPERAND_WEIGHT);
    let with_fractions = tier.allows_fractions() && rng.gen_bool(FRACTION_OPERAND_WEIGHT);

    let operand_count = if three_operand { 3 } else { 2 };
    let numbers: Vec<i64> = (0..operand_count)
        .map(|_| rng.gen_range(tier.range()))
        .collect();
    let operations: Vec<Op> = (0..operand_count - 1)
        .map(|_| pick_op(rng, tier.supported_operations()))
        .collect();

    if !with_fractions {
        return Question::new(numbers, operations, tier).ok();
    }

    // Fraction flavor: at least one operand becomes a proper or improper
    // fraction; the numerator doubles as the combination-key number.
    let forced = rng.gen_range(0..operand_count);
    let mut numbers = numbers;
    let mut fraction_operands: Vec<Option<Fraction>> = vec![None; operand_count];
    for i in 0..operand_count {
        if i != forced && !rng.gen_bool(0.5) {
            continue;
        }
        let denominator = rng.gen_range(2..=6i64);
        let numerator = rng.gen_range(1..=denominator * 2);
        numbers[i] = numerator;
        fraction_operands[i] = Fraction::new(numerator, denominator);
    }
    Question::with_fractions(numbers, operations, Some(fraction_operands), tier).ok()
}

fn pick_op<R: Rng>(rng: &mut R, ops: &[Op]) -> Op {
    ops[rng.gen_range(0..ops.len())]
}
