//! Wrong-answer synthesis.
//!
//! Distractors are drawn from known student mistakes in a fixed priority
//! order: wrong place value (one finer, then one coarser), truncation,
//! over-rounding. Whatever is still missing is filled by random nearby
//! multiples of the target, and if those run out of attempts, by a
//! deterministic walk outward from the correct answer.

use tracing::warn;

use crate::math_engine::{
    error::MathError,
    models::{Distractor, MistakePattern, RoundTarget},
    random::RandomSource,
    rounding::{round_down, round_half_up, round_up, snap_offset},
};

/// Attempts the random perturbation step gets before the filler takes over.
pub const DEFAULT_RETRY_BUDGET: usize = 50;

/// Wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Distinct wrong answers collected so far.
struct DistractorSet {
    correct: u64,
    picked: Vec<Distractor>,
}

impl DistractorSet {
    fn new(correct: u64) -> Self {
        DistractorSet { correct, picked: Vec::with_capacity(DISTRACTOR_COUNT) }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= DISTRACTOR_COUNT
    }

    /// Accept `value` unless the set is full, it is the correct answer, or
    /// it was already picked.
    fn offer(&mut self, value: u64, pattern: MistakePattern) -> bool {
        if self.is_full() || value == self.correct || self.picked.iter().any(|d| d.value == value) {
            return false;
        }
        self.picked.push(Distractor { value, pattern });
        true
    }
}

/// Mistake-pattern candidates in priority order. Patterns that do not apply
/// to the target (no finer place below tens, no coarser above hundred
/// thousands) are left out.
pub fn pattern_candidates(number: u64, target: RoundTarget) -> Vec<Distractor> {
    let t = target.value();
    let mut out = Vec::with_capacity(4);
    if let Some(finer) = target.finer() {
        out.push(Distractor {
            value: round_half_up(number, finer.value()),
            pattern: MistakePattern::FinerPlaceValue,
        });
    }
    if let Some(coarser) = target.coarser() {
        out.push(Distractor {
            value: round_half_up(number, coarser.value()),
            pattern: MistakePattern::CoarserPlaceValue,
        });
    }
    out.push(Distractor { value: round_down(number, t), pattern: MistakePattern::Truncation });
    out.push(Distractor { value: round_up(number, t), pattern: MistakePattern::OverRounding });
    out
}

/// Random nearby multiples: `correct + snap(offset)` with offset uniform in
/// `[-2t, 2t]`. Negative values, duplicates and the correct answer are
/// rejected. Gives up after `budget` draws.
fn perturb<R: RandomSource + ?Sized>(
    set: &mut DistractorSet,
    number: u64,
    target: RoundTarget,
    rng: &mut R,
    budget: usize,
) -> Result<(), MathError> {
    let t = target.value() as i64;
    for _ in 0..budget {
        if set.is_full() {
            return Ok(());
        }
        let offset = rng.next_int(-2 * t, 2 * t);
        let candidate = set.correct as i64 + snap_offset(offset, t);
        if candidate >= 0 {
            set.offer(candidate as u64, MistakePattern::NearbyMultiple);
        }
    }
    if set.is_full() {
        Ok(())
    } else {
        Err(MathError::DistractorSynthesisExhausted {
            number,
            round_target: target.value(),
            attempts: budget,
        })
    }
}

/// `correct ± t`, `correct ± 2t`, ... until the set is full. Always
/// terminates: the upward side never repeats.
fn fill_deterministic(set: &mut DistractorSet, target: RoundTarget) {
    let t = target.value();
    let mut step = 1u64;
    while !set.is_full() {
        set.offer(set.correct + step * t, MistakePattern::Filler);
        if let Some(below) = set.correct.checked_sub(step * t) {
            set.offer(below, MistakePattern::Filler);
        }
        step += 1;
    }
}

/// Build exactly [`DISTRACTOR_COUNT`] distinct, non-negative wrong answers
/// for rounding `number` to `target`.
pub fn synthesize<R: RandomSource + ?Sized>(
    number: u64,
    target: RoundTarget,
    rng: &mut R,
    retry_budget: usize,
) -> Vec<Distractor> {
    let mut set = DistractorSet::new(round_half_up(number, target.value()));

    for candidate in pattern_candidates(number, target) {
        set.offer(candidate.value, candidate.pattern);
    }

    if let Err(err) = perturb(&mut set, number, target, rng, retry_budget) {
        warn!(%err, "completing distractors deterministically");
        fill_deterministic(&mut set, target);
    }

    set.picked
}
