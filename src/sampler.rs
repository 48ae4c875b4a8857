use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::time::Timestamp;

/// Supplies the two stochastic inputs of a run: per-send drop decisions and
/// samples of the synthetic clock.
pub trait Sampler {
    /// Returns true with the given probability, independently across calls.
    fn should_drop(&mut self, probability: f64) -> bool;

    /// Returns the current synthetic time.
    fn now(&mut self) -> Timestamp;
}

/// The default sampler: independent uniform draws from a seedable PRNG.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: SmallRng,
}

impl UniformSampler {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// A sampler with a fixed seed, for reproducible sweeps.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for UniformSampler {
    fn should_drop(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    fn now(&mut self) -> Timestamp {
        Timestamp::new(self.rng.gen::<f64>())
    }
}

/// A deterministic sampler for tests. The clock starts at `start` and moves
/// by `step` on every `now` call (`step` may be negative); drop decisions
/// are deterministic, firing only at probability 1.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct StepSampler {
    start: f64,
    step: f64,
    #[new(default)]
    nr_calls: u64,
}

impl Sampler for StepSampler {
    fn should_drop(&mut self, probability: f64) -> bool {
        probability >= 1.0
    }

    fn now(&mut self) -> Timestamp {
        let t = self.start + self.step * self.nr_calls as f64;
        self.nr_calls += 1;
        Timestamp::new(t)
    }
}
