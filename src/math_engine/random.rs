//! Injected randomness.
//!
//! Every random draw in the engine goes through [`RandomSource`] so tests can
//! script exact sequences. Any `rand::Rng` (e.g. a seeded `StdRng`) is a
//! `RandomSource` through the blanket impl below.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `[min, max]` (both inclusive). Callers guarantee
    /// `min <= max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn next_float(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Draw from `[min, max]`, checking the source honours its range in debug
/// builds.
fn draw_checked<R: RandomSource + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let drawn = rng.next_int(min, max);
    debug_assert!(
        (min..=max).contains(&drawn),
        "RandomSource::next_int({min}, {max}) returned {drawn}"
    );
    drawn
}

/// Uniform index into a slice of length `len` (`len > 0`).
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    draw_checked(rng, 0, max) as usize
}

/// Uniform value in `[min, max]` for non-negative bounds.
pub fn pick_in_range<R: RandomSource + ?Sized>(rng: &mut R, min: u64, max: u64) -> u64 {
    draw_checked(rng, min as i64, max as i64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn std_rng_draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = rng.next_int(-20, 20);
            assert!((-20..=20).contains(&v));
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f));
            assert!(pick_index(&mut rng, 4) < 4);
            assert!((10..=999).contains(&pick_in_range(&mut rng, 10, 999)));
        }
    }

    /// Ignores the requested range.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn next_int(&mut self, _min: i64, max: i64) -> i64 {
            max + 1
        }
        fn next_float(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "RandomSource::next_int(0, 3) returned 4")]
    fn out_of_range_index_is_caught() {
        pick_index(&mut OutOfRange, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "RandomSource::next_int(10, 999) returned 1000")]
    fn out_of_range_number_is_caught() {
        pick_in_range(&mut OutOfRange, 10, 999);
    }

    #[test]
    fn single_element_pick_is_zero() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(pick_index(&mut rng, 1), 0);
    }
}
