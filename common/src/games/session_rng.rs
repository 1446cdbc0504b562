use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a single game session. Replaying a seed replays the
/// food sequence.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_range(1..=30), b.random_range(1..=30));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_random_range_stays_in_bounds() {
        let mut rng = SessionRng::new(123);
        for _ in 0..1000 {
            let value: i32 = rng.random_range(1..=30);
            assert!((1..=30).contains(&value));
        }
    }
}
