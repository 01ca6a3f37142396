use crate::math_engine::{
    error::MathError,
    models::{DifficultyLevel, DifficultyProfile, RoundTarget},
};

use RoundTarget::*;

/// Fixed table: (min, max, targets) per level, index 0 = level 1.
const PROFILES: [(u64, u64, &[RoundTarget]); 5] = [
    (10,      999,       &[Tens]),
    (100,     9_999,     &[Tens, Hundreds]),
    (1_000,   99_999,    &[Hundreds, Thousands, TenThousands]),
    (10_000,  999_999,   &[Hundreds, Thousands, TenThousands, HundredThousands]),
    (100_000, 9_999_999, &[Tens, Hundreds, Thousands, TenThousands, HundredThousands]),
];

pub(crate) fn profile_for(level: DifficultyLevel) -> DifficultyProfile {
    let (min, max, targets) = PROFILES[usize::from(level.get() - DifficultyLevel::MIN)];
    DifficultyProfile {
        level,
        number_range_min: min,
        number_range_max: max,
        allowed_targets: targets.to_vec(),
    }
}

/// Look up the number range and rounding targets for a raw level.
pub fn resolve_difficulty_profile(level: u8) -> Result<DifficultyProfile, MathError> {
    Ok(DifficultyLevel::new(level)?.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_levels() {
        let p1 = resolve_difficulty_profile(1).unwrap();
        assert_eq!((p1.number_range_min, p1.number_range_max), (10, 999));
        assert_eq!(p1.allowed_targets, vec![Tens]);

        let p4 = resolve_difficulty_profile(4).unwrap();
        assert_eq!((p4.number_range_min, p4.number_range_max), (10_000, 999_999));
        assert_eq!(p4.allowed_targets, vec![Hundreds, Thousands, TenThousands, HundredThousands]);

        let p5 = resolve_difficulty_profile(5).unwrap();
        assert_eq!(p5.number_range_max, 9_999_999);
        assert_eq!(p5.allowed_targets, RoundTarget::ALL.to_vec());
    }

    #[test]
    fn every_profile_is_well_formed() {
        for level in DifficultyLevel::all() {
            let p = level.profile();
            assert_eq!(p.level, level);
            assert!(p.number_range_min < p.number_range_max, "{level}: empty range");
            assert!(!p.allowed_targets.is_empty(), "{level}: no targets");
            assert!(p.allowed_targets.windows(2).all(|w| w[0] < w[1]), "{level}: unordered targets");
        }
    }

    #[test]
    fn out_of_range_levels_fail() {
        assert_eq!(resolve_difficulty_profile(0), Err(MathError::InvalidDifficulty(0)));
        assert_eq!(resolve_difficulty_profile(6), Err(MathError::InvalidDifficulty(6)));
    }

    #[test]
    fn resolving_twice_is_identical() {
        assert_eq!(resolve_difficulty_profile(3), resolve_difficulty_profile(3));
    }
}
