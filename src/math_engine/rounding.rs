//! Exact integer rounding at a place value. No floating point anywhere.

/// Round half up: `1250 → 1300`, `1249 → 1200` at target 100.
pub fn round_half_up(number: u64, target: u64) -> u64 {
    (number + target / 2) / target * target
}

/// Drop everything below the target's place value.
pub fn round_down(number: u64, target: u64) -> u64 {
    number / target * target
}

/// Smallest multiple of `target` that is `>= number`.
pub fn round_up(number: u64, target: u64) -> u64 {
    number.div_ceil(target) * target
}

/// Snap a signed offset to the nearest multiple of `target`, halves toward
/// positive infinity (`-15 → -10`, `15 → 20` at target 10).
pub fn snap_offset(offset: i64, target: i64) -> i64 {
    (offset + target / 2).div_euclid(target) * target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_examples() {
        assert_eq!(round_half_up(1250, 100), 1300);
        assert_eq!(round_half_up(1249, 100), 1200);
        assert_eq!(round_half_up(456, 10), 460);
        assert_eq!(round_half_up(455, 10), 460);
        assert_eq!(round_half_up(454, 10), 450);
        assert_eq!(round_half_up(1_000, 10_000), 0);
        assert_eq!(round_half_up(9_999_999, 100_000), 10_000_000);
    }

    #[test]
    fn floor_and_ceil() {
        assert_eq!(round_down(456, 10), 450);
        assert_eq!(round_up(456, 10), 460);
        assert_eq!(round_down(460, 10), 460);
        assert_eq!(round_up(460, 10), 460);
        assert_eq!(round_up(1, 100_000), 100_000);
    }

    #[test]
    fn offsets_snap_to_multiples() {
        assert_eq!(snap_offset(0, 10), 0);
        assert_eq!(snap_offset(4, 10), 0);
        assert_eq!(snap_offset(5, 10), 10);
        assert_eq!(snap_offset(-5, 10), 0);
        assert_eq!(snap_offset(-6, 10), -10);
        assert_eq!(snap_offset(-15, 10), -10);
        assert_eq!(snap_offset(20, 10), 20);
        assert_eq!(snap_offset(-20, 10), -20);
    }
}
