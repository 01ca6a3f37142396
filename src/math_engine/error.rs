use thiserror::Error;

/// Errors raised by the rounding engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid difficulty level {0} (expected 1..=5)")]
    InvalidDifficulty(u8),

    #[error("invalid rounding target {0} (expected 10, 100, 1000, 10000 or 100000)")]
    InvalidRoundTarget(u64),

    #[error("selected answer {selected} is not one of the question's options")]
    InvalidSelection { selected: u64 },

    /// The random perturbation step ran out of attempts before collecting
    /// three distinct distractors. Handled inside the generator.
    #[error("distractor synthesis exhausted after {attempts} attempts (number {number}, target {round_target})")]
    DistractorSynthesisExhausted {
        number: u64,
        round_target: u64,
        attempts: usize,
    },
}
