use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::math_engine::{
    distractors::{self, DEFAULT_RETRY_BUDGET},
    error::MathError,
    models::{DifficultyLevel, Question, RoundingRequest},
    options::OptionSet,
    random::{pick_in_range, pick_index, RandomSource},
    rounding::round_half_up,
};

/// Question ID: `RD-` plus eight hex digits from the random source.
fn make_question_id<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let max = i64::from(u32::MAX);
    let raw = rng.next_int(0, max);
    debug_assert!((0..=max).contains(&raw), "RandomSource::next_int(0, {max}) returned {raw}");
    format!("RD-{:08X}", raw)
}

/// Build one rounding question at `level`.
///
/// Draw order is fixed (id, number, target, distractor perturbations,
/// shuffle) so a seeded source always reproduces the same question.
pub fn build_question<R: RandomSource + ?Sized>(
    level: DifficultyLevel,
    rng: &mut R,
    retry_budget: usize,
) -> Question {
    let question_id = make_question_id(rng);
    let profile = level.profile();

    let number = pick_in_range(rng, profile.number_range_min, profile.number_range_max);
    let round_target = profile.allowed_targets[pick_index(rng, profile.allowed_targets.len())];
    let correct_answer = round_half_up(number, round_target.value());

    let distractors = distractors::synthesize(number, round_target, rng, retry_budget);
    let options = OptionSet::new(correct_answer, &distractors).shuffled(rng).into_vec();

    debug!(
        %question_id, level = level.get(), number, target = round_target.value(),
        correct_answer, ?options, "generated rounding question"
    );

    Question {
        question_id,
        difficulty: level,
        number,
        round_target,
        correct_answer,
        options,
        distractors,
    }
}

/// Generate a question for a raw level using the injected random source.
pub fn generate_question<R: RandomSource + ?Sized>(
    level: u8,
    rng: &mut R,
) -> Result<Question, MathError> {
    let level = DifficultyLevel::new(level)?;
    Ok(build_question(level, rng, DEFAULT_RETRY_BUDGET))
}

/// Entry point for callers without their own random source: seeds a
/// `StdRng` from the request (or OS entropy) and builds one question.
pub fn generate_rounding(request: RoundingRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    build_question(request.difficulty, &mut rng, request.retry_budget)
}
