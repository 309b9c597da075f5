//! Random sampler implementation.

use parking_lot::Mutex;

use crate::distribution::FloatDistribution;
use crate::parameter::ParamId;
use crate::rng_util;
use crate::sampler::{CompletedTrial, Sampler};

/// A sampler that ignores history and draws uniformly from each distribution,
/// respecting log scale and step size.
///
/// This is the baseline strategy (hyperopt's `rand.suggest`) and the default
/// sampler of a [`Study`](crate::Study).
///
/// ```
/// use fmin::sampler::RandomSampler;
///
/// let sampler = RandomSampler::new();
/// let seeded = RandomSampler::with_seed(42);
/// ```
pub struct RandomSampler {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSampler {
    /// Creates a new random sampler with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new random sampler with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn sample(
        &self,
        _param_id: ParamId,
        distribution: &FloatDistribution,
        _history: &[CompletedTrial],
    ) -> f64 {
        let mut rng = self.rng.lock();
        rng_util::sample_uniform(&mut rng, distribution)
    }
}
