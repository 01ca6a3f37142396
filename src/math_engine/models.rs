use std::fmt;
use serde::{Deserialize, Serialize};

use crate::math_engine::{distractors::DEFAULT_RETRY_BUDGET, error::MathError, profile};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty level 1..=5. Construction validates the range, so a
/// `DifficultyLevel` in hand always maps to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, MathError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(DifficultyLevel(level))
        } else {
            Err(MathError::InvalidDifficulty(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every level, easiest first.
    pub fn all() -> impl Iterator<Item = DifficultyLevel> {
        (Self::MIN..=Self::MAX).map(DifficultyLevel)
    }

    pub fn profile(self) -> DifficultyProfile {
        profile::profile_for(self)
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        DifficultyLevel(Self::MIN)
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = MathError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        DifficultyLevel::new(level)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Rounding targets
// ---------------------------------------------------------------------------

/// Place value a number is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum RoundTarget {
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    HundredThousands,
}

impl RoundTarget {
    pub const ALL: [RoundTarget; 5] = [
        RoundTarget::Tens,
        RoundTarget::Hundreds,
        RoundTarget::Thousands,
        RoundTarget::TenThousands,
        RoundTarget::HundredThousands,
    ];

    pub fn value(self) -> u64 {
        match self {
            RoundTarget::Tens             => 10,
            RoundTarget::Hundreds         => 100,
            RoundTarget::Thousands        => 1_000,
            RoundTarget::TenThousands     => 10_000,
            RoundTarget::HundredThousands => 100_000,
        }
    }

    /// One place value smaller, or `None` for tens.
    pub fn finer(self) -> Option<RoundTarget> {
        match self {
            RoundTarget::Tens             => None,
            RoundTarget::Hundreds         => Some(RoundTarget::Tens),
            RoundTarget::Thousands        => Some(RoundTarget::Hundreds),
            RoundTarget::TenThousands     => Some(RoundTarget::Thousands),
            RoundTarget::HundredThousands => Some(RoundTarget::TenThousands),
        }
    }

    /// One place value larger, or `None` for hundred thousands.
    pub fn coarser(self) -> Option<RoundTarget> {
        match self {
            RoundTarget::Tens             => Some(RoundTarget::Hundreds),
            RoundTarget::Hundreds         => Some(RoundTarget::Thousands),
            RoundTarget::Thousands        => Some(RoundTarget::TenThousands),
            RoundTarget::TenThousands     => Some(RoundTarget::HundredThousands),
            RoundTarget::HundredThousands => None,
        }
    }

    pub fn place_name(self) -> &'static str {
        match self {
            RoundTarget::Tens             => "ten",
            RoundTarget::Hundreds         => "hundred",
            RoundTarget::Thousands        => "thousand",
            RoundTarget::TenThousands     => "ten thousand",
            RoundTarget::HundredThousands => "hundred thousand",
        }
    }
}

impl TryFrom<u64> for RoundTarget {
    type Error = MathError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        RoundTarget::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .ok_or(MathError::InvalidRoundTarget(value))
    }
}

impl From<RoundTarget> for u64 {
    fn from(target: RoundTarget) -> u64 {
        target.value()
    }
}

impl fmt::Display for RoundTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Number range (inclusive) and rounding targets for one difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub level: DifficultyLevel,
    pub number_range_min: u64,
    pub number_range_max: u64,
    /// Ordered finest first; never empty.
    pub allowed_targets: Vec<RoundTarget>,
}

impl DifficultyProfile {
    pub fn contains(&self, number: u64) -> bool {
        (self.number_range_min..=self.number_range_max).contains(&number)
    }

    pub fn allows(&self, target: RoundTarget) -> bool {
        self.allowed_targets.contains(&target)
    }
}

// ---------------------------------------------------------------------------
// Questions and answers
// ---------------------------------------------------------------------------

/// The student mistake a distractor imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MistakePattern {
    /// Rounded to the place value one step smaller.
    FinerPlaceValue,
    /// Rounded to the place value one step larger.
    CoarserPlaceValue,
    /// Dropped the lower digits instead of rounding.
    Truncation,
    /// Always rounded up.
    OverRounding,
    /// A nearby multiple of the target.
    NearbyMultiple,
    /// Deterministic completion after the random step ran out of attempts.
    Filler,
}

impl MistakePattern {
    /// Short explanation shown to the player after picking this answer.
    pub fn explanation(self) -> &'static str {
        match self {
            MistakePattern::FinerPlaceValue =>
                "Oops! That rounds to a smaller place value. Look at the digit just right of the place you are rounding to.",
            MistakePattern::CoarserPlaceValue =>
                "Close! That rounds to a bigger place value than the question asks for.",
            MistakePattern::Truncation =>
                "That just chops off the last digits. If the next digit is 5 or more, round up!",
            MistakePattern::OverRounding =>
                "That always rounds up. If the next digit is 4 or less, round down!",
            MistakePattern::NearbyMultiple | MistakePattern::Filler =>
                "That is a multiple of the right place value, but not the nearest one.",
        }
    }
}

impl fmt::Display for MistakePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MistakePattern::FinerPlaceValue   => "Finer place value",
            MistakePattern::CoarserPlaceValue => "Coarser place value",
            MistakePattern::Truncation        => "Truncation",
            MistakePattern::OverRounding      => "Over-rounding",
            MistakePattern::NearbyMultiple    => "Nearby multiple",
            MistakePattern::Filler            => "Filler",
        };
        write!(f, "{}", s)
    }
}

/// A wrong answer option together with the mistake it models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distractor {
    pub value: u64,
    pub pattern: MistakePattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `RD-` followed by eight hex digits. Stable for a given seed.
    pub question_id: String,
    pub difficulty: DifficultyLevel,
    pub number: u64,
    pub round_target: RoundTarget,
    pub correct_answer: u64,
    /// Four distinct values in display order, the correct answer exactly once.
    pub options: Vec<u64>,
    /// The three wrong options in the order they were synthesized.
    pub distractors: Vec<Distractor>,
}

impl Question {
    pub fn is_option(&self, value: u64) -> bool {
        self.options.contains(&value)
    }

    pub fn distractor_for(&self, value: u64) -> Option<&Distractor> {
        self.distractors.iter().find(|d| d.value == value)
    }

    /// True when the random step gave up and deterministic filler values
    /// completed the option set.
    pub fn used_filler(&self) -> bool {
        self.distractors.iter().any(|d| d.pattern == MistakePattern::Filler)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub is_correct: bool,
    pub selected: u64,
    pub correct_answer: u64,
    pub points_awarded: u32,
    /// Mistake behind the selected option; `None` when correct.
    pub mistake: Option<MistakePattern>,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

fn default_retry_budget() -> usize {
    DEFAULT_RETRY_BUDGET
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingRequest {
    pub difficulty: DifficultyLevel,
    /// `None` seeds from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Attempts allowed for the random perturbation step before the
    /// deterministic filler takes over.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: usize,
}

impl RoundingRequest {
    /// Request with entropy seeding and the default retry budget.
    pub fn new(difficulty: DifficultyLevel) -> Self {
        RoundingRequest {
            difficulty,
            rng_seed: None,
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse a request from JSON, e.g. `{"difficulty": 3, "rng_seed": 7}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_rejects_out_of_range_levels() {
        assert_eq!(DifficultyLevel::new(0), Err(MathError::InvalidDifficulty(0)));
        assert_eq!(DifficultyLevel::new(6), Err(MathError::InvalidDifficulty(6)));
        assert_eq!(DifficultyLevel::new(5).map(DifficultyLevel::get), Ok(5));
        assert_eq!(DifficultyLevel::all().count(), 5);
    }

    #[test]
    fn round_target_ladder_has_open_ends() {
        assert_eq!(RoundTarget::Tens.finer(), None);
        assert_eq!(RoundTarget::HundredThousands.coarser(), None);
        for pair in RoundTarget::ALL.windows(2) {
            assert_eq!(pair[0].coarser(), Some(pair[1]));
            assert_eq!(pair[1].finer(), Some(pair[0]));
            assert_eq!(pair[0].value() * 10, pair[1].value());
        }
    }

    #[test]
    fn request_json_fills_defaults() {
        let req = RoundingRequest::from_json(r#"{"difficulty": 3}"#).unwrap();
        assert_eq!(req.difficulty.get(), 3);
        assert_eq!(req.rng_seed, None);
        assert_eq!(req.retry_budget, DEFAULT_RETRY_BUDGET);

        let err = RoundingRequest::from_json(r#"{"difficulty": 9}"#);
        assert!(err.is_err(), "level 9 must not deserialize");
    }

    #[test]
    fn question_serializes_targets_and_levels_as_numbers() {
        let q = Question {
            question_id: "RD-00000001".to_string(),
            difficulty: DifficultyLevel::new(2).unwrap(),
            number: 1250,
            round_target: RoundTarget::Hundreds,
            correct_answer: 1300,
            options: vec![1300, 1200, 1000, 1250],
            distractors: vec![],
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["difficulty"], 2);
        assert_eq!(json["round_target"], 100);
        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }
}
