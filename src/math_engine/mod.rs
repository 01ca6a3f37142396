//! Rounding engine — difficulty profiles, question generation, grading.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: levels, targets, questions, grade results, requests |
//! | `error`       | `MathError` |
//! | `random`      | `RandomSource` capability, implemented for every `rand::Rng` |
//! | `profile`     | Level → number range and allowed rounding targets |
//! | `rounding`    | Exact integer rounding primitives |
//! | `distractors` | Mistake-pattern wrong answers with bounded random fallback |
//! | `options`     | Option set assembly and Fisher-Yates shuffle |
//! | `generator`   | `generate_question()` / `generate_rounding()` |
//! | `grading`     | `grade_answer()` and the points formula |
//! | `session`     | Caller-owned score and streak bookkeeping |

pub mod distractors;
pub mod error;
pub mod generator;
pub mod grading;
pub mod models;
pub mod options;
pub mod profile;
pub mod random;
pub mod rounding;
pub mod session;

pub use error::MathError;
pub use generator::{generate_question, generate_rounding};
pub use grading::{grade_answer, points_for};
pub use models::{
    DifficultyLevel, DifficultyProfile, Distractor, GradeResult, MistakePattern, Question,
    RoundTarget, RoundingRequest,
};
pub use profile::resolve_difficulty_profile;
pub use random::RandomSource;
pub use session::SessionState;
