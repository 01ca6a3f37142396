use crate::math_engine::{
    models::Distractor,
    random::{pick_index, RandomSource},
};

/// The answer options of one question, correct answer first until shuffled.
pub struct OptionSet {
    values: Vec<u64>,
}

impl OptionSet {
    pub fn new(correct: u64, distractors: &[Distractor]) -> Self {
        let mut values = Vec::with_capacity(distractors.len() + 1);
        values.push(correct);
        values.extend(distractors.iter().map(|d| d.value));
        OptionSet { values }
    }

    /// Fisher-Yates shuffle driven by `rng`.
    pub fn shuffled<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Self {
        for i in (1..self.values.len()).rev() {
            let j = pick_index(rng, i + 1);
            self.values.swap(i, j);
        }
        self
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_engine::models::MistakePattern;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set() -> OptionSet {
        let ds = [500, 450, 470].map(|value| Distractor { value, pattern: MistakePattern::NearbyMultiple });
        OptionSet::new(460, &ds)
    }

    #[test]
    fn shuffle_keeps_every_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut got = set().shuffled(&mut rng).into_vec();
        got.sort_unstable();
        assert_eq!(got, vec![450, 460, 470, 500]);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| set().shuffled(&mut StdRng::seed_from_u64(seed)).into_vec();
        assert_eq!(make(99), make(99));
    }

    #[test]
    fn correct_answer_lands_in_every_slot() {
        let mut seen = [false; 4];
        for seed in 0..200 {
            let v = set().shuffled(&mut StdRng::seed_from_u64(seed)).into_vec();
            let slot = v.iter().position(|&x| x == 460).unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s), "shuffle is biased: {seen:?}");
    }
}
