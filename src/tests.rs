//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batch; different seeds → varied output |
//! | Batch contract | Exact count; validity; range; operator set; unique keys |
//! | Arithmetic | Precedence, division validity, fraction answers |
//! | Strategies | Method selection per operand shape and tier |
//! | Tier mix | ≥ 3-operand weighting for MixedOperations; fraction variety |
//! | Missed re-injection | Verbatim inclusion, dedup, tier filtering |
//! | Persistence | Record round-trip; cached-field verification |
//! | Verbal forms | Fraction wording in both languages |

use crate::practice_engine::{
    from_record, generate, generate_with_rng, to_record, AnswerType, DifficultyLevel, Fraction,
    GenerationRequest, Language, Op, Question, SolutionMethod,
};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic `GenerationRequest`.
fn req(tier: DifficultyLevel, count: usize, seed: u64) -> GenerationRequest {
    GenerationRequest {
        tier,
        count,
        rng_seed: Some(seed),
        prior_missed: Vec::new(),
    }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batch() {
    for tier in DifficultyLevel::ALL {
        let a = generate(req(tier, tier.question_count(), 12345)).expect("batch a");
        let b = generate(req(tier, tier.question_count(), 12345)).expect("batch b");
        assert_eq!(a.len(), b.len(), "batch length mismatch for {tier:?}");
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x, y, "question mismatch for {tier:?}");
            assert_eq!(
                x.solution_steps(Some(tier), Language::English),
                y.solution_steps(Some(tier), Language::English),
                "steps mismatch for {tier:?}"
            );
        }
    }
}

#[test]
fn different_seeds_produce_varied_batches() {
    // Not a hard guarantee, but across 20 questions two equal batches from
    // different seeds would require an astronomical coincidence.
    let a = generate(req(DifficultyLevel::WithinFifty, 20, 1)).expect("batch a");
    let b = generate(req(DifficultyLevel::WithinFifty, 20, 1001)).expect("batch b");
    let differs = a
        .iter()
        .zip(b.iter())
        .any(|(x, y)| x.combination_key() != y.combination_key());
    assert!(differs, "seeds 1 and 1001 produced identical batches");
}

#[test]
fn entropy_seed_produces_a_valid_batch() {
    // Smoke test: rng_seed: None must not panic and must satisfy the contract.
    let batch = generate(GenerationRequest::new(DifficultyLevel::WithinTwenty))
        .expect("entropy batch");
    assert_eq!(batch.len(), DifficultyLevel::WithinTwenty.question_count());
    assert!(batch.iter().all(Question::is_valid));
}

// ── batch contract ───────────────────────────────────────────────────────────

#[test]
fn batches_meet_the_tier_contract_across_seeds() {
    for tier in DifficultyLevel::ALL {
        for seed in SEEDS {
            let batch = generate(req(tier, tier.question_count(), seed)).expect("batch");
            assert_eq!(batch.len(), tier.question_count(), "{tier:?} seed={seed}");

            let mut keys = HashSet::new();
            for q in &batch {
                assert!(q.is_valid(), "{tier:?} seed={seed}: {}", q.question_text());
                assert!(
                    q.numbers().iter().all(|n| tier.range().contains(n)),
                    "{tier:?} seed={seed}: operand out of range in {}",
                    q.question_text()
                );
                assert!(
                    q.operations()
                        .iter()
                        .all(|op| tier.supported_operations().contains(op)),
                    "{tier:?} seed={seed}: unsupported operator in {}",
                    q.question_text()
                );
                assert!(
                    keys.insert(q.combination_key()),
                    "{tier:?} seed={seed}: duplicate key {}",
                    q.combination_key()
                );
            }
        }
    }
}

#[test]
fn twenty_unique_questions_fit_in_the_first_tier() {
    let batch = generate(req(DifficultyLevel::WithinTen, 20, 3)).expect("batch");
    assert_eq!(batch.len(), 20);
    let keys: HashSet<String> = batch.iter().map(Question::combination_key).collect();
    assert_eq!(keys.len(), 20);
}

#[test]
fn zero_count_yields_an_empty_batch() {
    let batch = generate(req(DifficultyLevel::WithinTen, 0, 1)).expect("empty batch");
    assert!(batch.is_empty());
}

// ── arithmetic and validity ──────────────────────────────────────────────────

#[test]
fn precedence_drives_three_operand_answers() {
    let q = Question::triple(2, Op::Add, 3, Op::Mul, 4, DifficultyLevel::MixedOperations);
    assert_eq!(q.correct_answer(), 14);
    let q = Question::triple(10, Op::Div, 2, Op::Add, 3, DifficultyLevel::MixedOperations);
    assert_eq!(q.correct_answer(), 8);
}

#[test]
fn division_validity_per_tier() {
    assert!(!Question::pair(10, Op::Div, 0, DifficultyLevel::WithinHundred).is_valid());
    assert!(!Question::pair(10, Op::Div, 3, DifficultyLevel::WithinHundred).is_valid());
    assert!(Question::pair(12, Op::Div, 3, DifficultyLevel::WithinHundred).is_valid());
    // The fraction tier accepts what the others reject.
    assert!(Question::pair(10, Op::Div, 3, DifficultyLevel::Fractions).is_valid());
}

#[test]
fn fraction_answers_in_the_permissive_tier() {
    let q = Question::pair(5, Op::Div, 3, DifficultyLevel::Fractions);
    assert_eq!(q.answer_type(), AnswerType::Fraction);
    assert_eq!(q.fraction_answer(), Fraction::new(5, 3));

    let q = Question::pair(10, Op::Div, 5, DifficultyLevel::Fractions);
    assert_eq!(q.answer_type(), AnswerType::Integer);
    assert_eq!(q.fraction_answer(), None);
}

// ── strategy selection ───────────────────────────────────────────────────────

#[test]
fn solution_methods_follow_operand_shape() {
    let q = Question::pair(8, Op::Add, 5, DifficultyLevel::WithinTwenty);
    assert_eq!(
        q.solution_method(Some(DifficultyLevel::WithinTwenty)),
        SolutionMethod::MakingTen
    );

    let q = Question::pair(15, Op::Sub, 7, DifficultyLevel::WithinTwenty);
    assert_eq!(
        q.solution_method(Some(DifficultyLevel::WithinTwenty)),
        SolutionMethod::BreakingTen
    );

    let q = Question::pair(6, Op::Mul, 7, DifficultyLevel::TimesTable);
    assert_eq!(
        q.solution_method(Some(DifficultyLevel::TimesTable)),
        SolutionMethod::MultiplicationTable
    );

    let q = Question::pair(42, Op::Sub, 17, DifficultyLevel::WithinFifty);
    assert_eq!(
        q.solution_method(Some(DifficultyLevel::WithinFifty)),
        SolutionMethod::BorrowingTen
    );

    let q = Question::pair(23, Op::Mul, 4, DifficultyLevel::WithinHundred);
    assert_eq!(
        q.solution_method(Some(DifficultyLevel::WithinHundred)),
        SolutionMethod::DecompositionMultiplication
    );

    // No tier context → standard, always.
    assert_eq!(q.solution_method(None), SolutionMethod::Standard);
}

#[test]
fn every_generated_question_renders_steps_in_both_languages() {
    for tier in DifficultyLevel::ALL {
        let batch = generate(req(tier, tier.question_count(), 77)).expect("batch");
        for q in &batch {
            let en = q.solution_steps(Some(tier), Language::English);
            let es = q.solution_steps(Some(tier), Language::Spanish);
            assert!(!en.is_empty(), "{tier:?}: empty English steps for {}", q.question_text());
            assert!(!es.is_empty(), "{tier:?}: empty Spanish steps for {}", q.question_text());
            assert_ne!(en, es, "{tier:?}: language is not being applied for {}", q.question_text());
        }
    }
}

// ── tier mix ─────────────────────────────────────────────────────────────────

#[test]
fn mixed_operations_leans_on_three_operand_questions() {
    for seed in SEEDS {
        let batch = generate(req(DifficultyLevel::MixedOperations, 40, seed)).expect("batch");
        let three = batch.iter().filter(|q| q.numbers().len() == 3).count();
        assert!(
            three >= batch.len() / 3,
            "seed={seed}: only {three}/{} three-operand questions",
            batch.len()
        );
    }
}

#[test]
fn fraction_tier_produces_fraction_material() {
    let mut with_fraction_operands = 0usize;
    let mut with_fraction_answers = 0usize;
    for seed in SEEDS {
        let batch = generate(req(DifficultyLevel::Fractions, 20, seed)).expect("batch");
        with_fraction_operands += batch
            .iter()
            .filter(|q| q.fraction_operands().is_some())
            .count();
        with_fraction_answers += batch
            .iter()
            .filter(|q| q.answer_type() == AnswerType::Fraction)
            .count();
    }
    assert!(with_fraction_operands > 0, "no fraction operands across {SEEDS:?}");
    assert!(with_fraction_answers > 0, "no fraction answers across {SEEDS:?}");
}

// ── missed-question re-injection ─────────────────────────────────────────────

#[test]
fn missed_questions_lead_the_batch_verbatim() {
    let tier = DifficultyLevel::WithinFifty;
    let missed = generate(req(tier, 5, 11)).expect("missed source");

    let batch = generate(GenerationRequest {
        tier,
        count: tier.question_count(),
        rng_seed: Some(99),
        prior_missed: missed.clone(),
    })
    .expect("batch with hints");

    assert_eq!(batch.len(), tier.question_count());
    for (i, m) in missed.iter().enumerate() {
        assert_eq!(
            batch[i].combination_key(),
            m.combination_key(),
            "missed question {i} not re-injected in order"
        );
    }
    let keys: HashSet<String> = batch.iter().map(Question::combination_key).collect();
    assert_eq!(keys.len(), batch.len(), "re-injection broke uniqueness");
}

#[test]
fn duplicate_missed_questions_appear_once() {
    let tier = DifficultyLevel::WithinTwenty;
    let q = Question::pair(15, Op::Sub, 7, tier);
    let batch = generate(GenerationRequest {
        tier,
        count: 10,
        rng_seed: Some(5),
        prior_missed: vec![q.clone(), q.clone(), q],
    })
    .expect("batch");
    let occurrences = batch
        .iter()
        .filter(|b| b.combination_key() == "15-7")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn missed_questions_outside_the_tier_are_skipped() {
    // 84 ÷ 7 fits WithinHundred but not WithinTen's range.
    let foreign = Question::pair(84, Op::Div, 7, DifficultyLevel::WithinHundred);
    let batch = generate(GenerationRequest {
        tier: DifficultyLevel::WithinTen,
        count: 10,
        rng_seed: Some(8),
        prior_missed: vec![foreign],
    })
    .expect("batch");
    assert!(batch.iter().all(|q| q.combination_key() != "84÷7"));
    assert!(batch
        .iter()
        .all(|q| q.numbers().iter().all(|n| (1..=10).contains(n))));
}

#[test]
fn generate_with_rng_is_reusable_across_calls() {
    // One RNG driving two calls still satisfies both contracts.
    let mut rng = StdRng::seed_from_u64(21);
    let a = generate_with_rng(&mut rng, DifficultyLevel::WithinTwenty, 10, &[]).expect("a");
    let b = generate_with_rng(&mut rng, DifficultyLevel::TimesTable, 10, &[]).expect("b");
    assert_eq!(a.len(), 10);
    assert_eq!(b.len(), 10);
}

// ── persistence ──────────────────────────────────────────────────────────────

#[test]
fn records_round_trip_for_every_tier() {
    for tier in DifficultyLevel::ALL {
        let batch = generate(req(tier, tier.question_count(), 13)).expect("batch");
        for q in &batch {
            let record = to_record(q, Language::English);
            let rebuilt = from_record(&record).expect("rebuild");
            assert_eq!(&rebuilt, q, "{tier:?}: reconstruction diverged");
            assert_eq!(rebuilt.correct_answer(), record.correct_answer);
            assert_eq!(
                rebuilt.solution_steps(Some(tier), Language::English),
                record.solution_steps,
                "{tier:?}: cached steps diverged"
            );
        }
    }
}

// ── verbal forms ─────────────────────────────────────────────────────────────

#[test]
fn fraction_words_in_both_languages() {
    let two_thirds = Fraction::new(2, 3).expect("2/3");
    assert_eq!(two_thirds.to_words(Language::English), "two thirds");
    assert_eq!(two_thirds.to_words(Language::Spanish), "dos tercios");

    let five_thirds = Fraction::new(5, 3).expect("5/3");
    assert_eq!(five_thirds.to_words(Language::English), "one and two thirds");
    assert_eq!(five_thirds.to_words(Language::Spanish), "uno y dos tercios");

    let whole = Fraction::new(6, 3).expect("6/3");
    assert_eq!(whole.to_words(Language::English), "two");
    assert_eq!(whole.to_words(Language::Spanish), "dos");

    let negative = Fraction::new(-1, 2).expect("-1/2");
    assert_eq!(negative.to_words(Language::English), "minus one half");
    assert_eq!(negative.to_words(Language::Spanish), "menos un medio");
}
