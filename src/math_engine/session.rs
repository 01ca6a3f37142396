use serde::{Deserialize, Serialize};
use tracing::info;

use crate::math_engine::{
    distractors::DEFAULT_RETRY_BUDGET,
    error::MathError,
    generator::build_question,
    models::{DifficultyLevel, GradeResult, Question},
    random::RandomSource,
};

/// Score and streak for one player's run. Owned by the caller; the engine
/// only reads the difficulty and applies grade results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub difficulty: DifficultyLevel,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
}

impl SessionState {
    pub fn new(difficulty: DifficultyLevel) -> Self {
        SessionState { difficulty, ..Default::default() }
    }

    /// Question at the session's current difficulty.
    pub fn next_question<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Question {
        build_question(self.difficulty, rng, DEFAULT_RETRY_BUDGET)
    }

    /// Fold one graded answer into the running totals.
    pub fn record(&mut self, result: &GradeResult) {
        self.questions_answered += 1;
        self.score += result.points_awarded;
        if result.is_correct {
            self.correct_answers += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Switch difficulty between questions. Score and streak carry over.
    pub fn set_difficulty(&mut self, level: u8) -> Result<(), MathError> {
        let level = DifficultyLevel::new(level)?;
        if level != self.difficulty {
            info!(from = self.difficulty.get(), to = level.get(), "difficulty changed");
            self.difficulty = level;
        }
        Ok(())
    }

    /// Fraction of answers that were correct; 0.0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        if self.questions_answered == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.questions_answered)
        }
    }
}
