//! Tree-structured Parzen Estimator (TPE) sampler implementation.
//!
//! TPE models the objective with two densities per dimension: l(x) fitted
//! to the values of the best trials and g(x) fitted to the rest. New values
//! are drawn from l(x) and the candidate with the highest l(x)/g(x) wins.
//!
//! ```
//! use fmin::sampler::tpe::{FixedGamma, TpeSampler};
//!
//! let sampler = TpeSampler::builder()
//!     .gamma_strategy(FixedGamma::new(0.15).unwrap())
//!     .n_startup_trials(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::distribution::FloatDistribution;
use crate::error::{Error, Result};
use crate::kde::ParzenEstimator;
use crate::parameter::ParamId;
use crate::rng_util;
use crate::sampler::tpe::gamma::{FixedGamma, GammaStrategy, HyperoptGamma};
use crate::sampler::{CompletedTrial, Sampler};

const DEFAULT_N_STARTUP_TRIALS: usize = 20;
const DEFAULT_N_EI_CANDIDATES: usize = 24;
const DEFAULT_PRIOR_WEIGHT: f64 = 1.0;

/// A Tree-structured Parzen Estimator sampler (hyperopt's `tpe.suggest`).
///
/// Completed trials are split into a good and a bad group by the configured
/// [`GammaStrategy`]. For each dimension a [Parzen estimator] is fitted to
/// both groups in internal (linear or log) space, `n_ei_candidates` values
/// are drawn from the good estimator, and the one maximizing l(x)/g(x) is
/// returned. Only values recorded for the same parameter feed its model.
///
/// While fewer than `n_startup_trials` completed trials have observed the
/// parameter, values are drawn uniformly.
///
/// [Parzen estimator]: https://en.wikipedia.org/wiki/Kernel_density_estimation
pub struct TpeSampler {
    gamma_strategy: Arc<dyn GammaStrategy>,
    n_startup_trials: usize,
    n_ei_candidates: usize,
    prior_weight: f64,
    kde_bandwidth: Option<f64>,
    rng: Mutex<fastrand::Rng>,
}

impl TpeSampler {
    /// Creates a TPE sampler with hyperopt's defaults.
    ///
    /// - gamma strategy: [`HyperoptGamma`] (`min(ceil(0.25 * sqrt(n)), 25)` good trials)
    /// - `n_startup_trials`: 20
    /// - `n_ei_candidates`: 24
    /// - `prior_weight`: 1.0
    /// - `kde_bandwidth`: None (Scott's rule)
    #[must_use]
    pub fn new() -> Self {
        Self {
            gamma_strategy: Arc::new(HyperoptGamma::default()),
            n_startup_trials: DEFAULT_N_STARTUP_TRIALS,
            n_ei_candidates: DEFAULT_N_EI_CANDIDATES,
            prior_weight: DEFAULT_PRIOR_WEIGHT,
            kde_bandwidth: None,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a builder for configuring a TPE sampler.
    #[must_use]
    pub fn builder() -> TpeSamplerBuilder {
        TpeSamplerBuilder::new()
    }

    /// Returns the gamma strategy used by this sampler.
    #[must_use]
    pub fn gamma_strategy(&self) -> &dyn GammaStrategy {
        self.gamma_strategy.as_ref()
    }

    /// Returns the number of uniformly sampled startup trials.
    #[must_use]
    pub fn n_startup_trials(&self) -> usize {
        self.n_startup_trials
    }

    /// Collects `(loss, value)` pairs for `param_id` from completed trials.
    fn observations(param_id: ParamId, history: &[CompletedTrial]) -> Vec<(f64, f64)> {
        history
            .iter()
            .filter_map(|t| t.params.get(&param_id).map(|&v| (t.value, v)))
            .collect()
    }

    /// Splits observed values into good and bad groups by loss.
    ///
    /// Both groups are non-empty; callers guarantee at least two observations.
    fn split(&self, mut observed: Vec<(f64, f64)>) -> (Vec<f64>, Vec<f64>) {
        observed.sort_by(|a, b| a.0.total_cmp(&b.0));
        let n = observed.len();
        let n_good = self.gamma_strategy.n_good(n).clamp(1, n - 1);
        let bad = observed.split_off(n_good);
        (
            observed.into_iter().map(|(_, v)| v).collect(),
            bad.into_iter().map(|(_, v)| v).collect(),
        )
    }

    /// Draws candidates from l(x) and keeps the one with the best l(x)/g(x).
    fn sample_tpe(
        &self,
        distribution: &FloatDistribution,
        good: &[f64],
        bad: &[f64],
        rng: &mut fastrand::Rng,
    ) -> f64 {
        let (low, high) = distribution.internal_bounds();
        let good: Vec<f64> = good.iter().map(|&v| distribution.to_internal(v)).collect();
        let bad: Vec<f64> = bad.iter().map(|&v| distribution.to_internal(v)).collect();

        let l_kde = ParzenEstimator::new(&good, low, high, self.prior_weight, self.kde_bandwidth);
        let g_kde = ParzenEstimator::new(&bad, low, high, self.prior_weight, self.kde_bandwidth);
        let (Ok(l_kde), Ok(g_kde)) = (l_kde, g_kde) else {
            return rng_util::sample_uniform(rng, distribution);
        };

        let mut best_candidate = f64::midpoint(low, high);
        let mut best_ratio = f64::NEG_INFINITY;

        // candidates come from the truncated l(x), so they are already inside
        for _ in 0..self.n_ei_candidates.max(1) {
            let candidate = l_kde.sample(rng);

            let l_density = l_kde.pdf(candidate);
            let g_density = g_kde.pdf(candidate);

            let ratio = if g_density < f64::MIN_POSITIVE {
                if l_density > f64::MIN_POSITIVE {
                    f64::INFINITY
                } else {
                    0.0
                }
            } else {
                l_density / g_density
            };

            if ratio > best_ratio {
                best_ratio = ratio;
                best_candidate = candidate;
            }
        }

        distribution.from_internal(best_candidate)
    }
}

impl Default for TpeSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for TpeSampler {
    fn sample(
        &self,
        param_id: ParamId,
        distribution: &FloatDistribution,
        history: &[CompletedTrial],
    ) -> f64 {
        let mut rng = self.rng.lock();

        if distribution.low >= distribution.high {
            return distribution.low;
        }

        let observed = Self::observations(param_id, history);
        if observed.len() < self.n_startup_trials.max(2) {
            return rng_util::sample_uniform(&mut rng, distribution);
        }

        let (good, bad) = self.split(observed);
        self.sample_tpe(distribution, &good, &bad, &mut rng)
    }
}

/// Builder for configuring a [`TpeSampler`].
///
/// Validation is deferred to [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct TpeSamplerBuilder {
    gamma_strategy: Box<dyn GammaStrategy>,
    /// Raw gamma value for deferred validation (Some if `gamma()` was called)
    raw_gamma: Option<f64>,
    n_startup_trials: usize,
    n_ei_candidates: usize,
    prior_weight: f64,
    kde_bandwidth: Option<f64>,
    seed: Option<u64>,
}

impl TpeSamplerBuilder {
    /// Creates a new builder with the defaults of [`TpeSampler::new`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            gamma_strategy: Box::new(HyperoptGamma::default()),
            raw_gamma: None,
            n_startup_trials: DEFAULT_N_STARTUP_TRIALS,
            n_ei_candidates: DEFAULT_N_EI_CANDIDATES,
            prior_weight: DEFAULT_PRIOR_WEIGHT,
            kde_bandwidth: None,
            seed: None,
        }
    }

    /// Uses a [`FixedGamma`] quantile: the best `ceil(gamma * n)` trials are good.
    ///
    /// `build()` returns `Err(Error::InvalidGamma)` unless gamma is in (0.0, 1.0).
    #[must_use]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.raw_gamma = Some(gamma);
        self
    }

    /// Sets a custom rule for the size of the good group.
    #[must_use]
    pub fn gamma_strategy<G: GammaStrategy + 'static>(mut self, strategy: G) -> Self {
        self.gamma_strategy = Box::new(strategy);
        self.raw_gamma = None;
        self
    }

    /// Sets how many observations a parameter needs before TPE replaces
    /// uniform sampling.
    #[must_use]
    pub fn n_startup_trials(mut self, n: usize) -> Self {
        self.n_startup_trials = n;
        self
    }

    /// Sets the number of candidates drawn from l(x) per suggestion.
    #[must_use]
    pub fn n_ei_candidates(mut self, n: usize) -> Self {
        self.n_ei_candidates = n;
        self
    }

    /// Sets the weight of the prior kernel in both estimators. Zero disables it.
    #[must_use]
    pub fn prior_weight(mut self, weight: f64) -> Self {
        self.prior_weight = weight;
        self
    }

    /// Sets a fixed kernel width instead of Scott's rule.
    #[must_use]
    pub fn kde_bandwidth(mut self, bandwidth: f64) -> Self {
        self.kde_bandwidth = Some(bandwidth);
        self
    }

    /// Sets a seed for reproducible sampling.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured [`TpeSampler`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGamma` if a fixed gamma value was set and is not in (0.0, 1.0).
    /// Returns `Error::InvalidBandwidth` if `kde_bandwidth` is not positive or
    /// `prior_weight` is negative.
    pub fn build(self) -> Result<TpeSampler> {
        let gamma_strategy: Arc<dyn GammaStrategy> = if let Some(raw) = self.raw_gamma {
            Arc::new(FixedGamma::new(raw)?)
        } else {
            Arc::from(self.gamma_strategy)
        };

        if let Some(bw) = self.kde_bandwidth
            && (bw <= 0.0 || bw.is_nan())
        {
            return Err(Error::InvalidBandwidth(bw));
        }
        if self.prior_weight < 0.0 || self.prior_weight.is_nan() {
            return Err(Error::InvalidBandwidth(self.prior_weight));
        }

        let rng = match self.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        Ok(TpeSampler {
            gamma_strategy,
            n_startup_trials: self.n_startup_trials,
            n_ei_candidates: self.n_ei_candidates,
            prior_weight: self.prior_weight,
            kde_bandwidth: self.kde_bandwidth,
            rng: Mutex::new(rng),
        })
    }
}

impl Default for TpeSamplerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
