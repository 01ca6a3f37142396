//! # math_kingdom
//!
//! The rounding engine behind "Princess Math Kingdom", a math practice game
//! for children.
//!
//! Each round the player sees a number, a place value to round it to, and
//! four answers. One is correct; the other three are *distractors* built
//! from the mistakes children actually make: rounding to the wrong place
//! value, chopping digits off, or always rounding up.
//!
//! ## How it works
//!
//! 1. Pick a difficulty level 1–5. Each level has a number range and a set
//!    of allowed rounding targets ([`resolve_difficulty_profile`]).
//! 2. Call [`generate_question`] with any random source (every `rand::Rng`
//!    works), or [`generate_rounding`] with a [`RoundingRequest`] carrying an
//!    optional seed.
//! 3. Submit the chosen option to [`grade_answer`] and fold the
//!    [`GradeResult`] into a caller-owned [`SessionState`].
//!
//! ## Quick start
//!
//! ```rust
//! use math_kingdom::{
//!     generate_question, grade_answer, DifficultyLevel, SessionState,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = SessionState::new(DifficultyLevel::new(3).unwrap());
//!
//! let q = generate_question(3, &mut rng).unwrap();
//! println!("Round {} to the nearest {}", q.number, q.round_target);
//!
//! let result = grade_answer(&q, q.options[0]).unwrap();
//! session.record(&result);
//! println!("score {} streak {}", session.score, session.streak);
//! ```

pub mod client_adapter;
pub mod math_engine;

pub use client_adapter::{format_with_separators, to_client_grade, to_client_question};
pub use math_engine::{
    generate_question, generate_rounding, grade_answer, points_for, resolve_difficulty_profile,
    DifficultyLevel, DifficultyProfile, Distractor, GradeResult, MathError, MistakePattern,
    Question, RandomSource, RoundTarget, RoundingRequest, SessionState,
};
