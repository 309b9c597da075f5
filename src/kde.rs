//! Parzen estimator for continuous parameters.
//!
//! The TPE sampler fits one estimator to the "good" observations and one to
//! the "bad" observations of a dimension. Each estimator is a weighted
//! mixture of Gaussians truncated to the search interval: one kernel per
//! observation plus a broad prior kernel centred on the interval, so regions
//! with no observations keep a non-zero density.

use crate::error::{Error, Result};
use crate::rng_util;

/// Upper bound on the number of observations used to shrink the minimum
/// kernel width.
const MAX_SHRINK: f64 = 100.0;

/// Draws from a kernel before giving up on rejection and falling back to a
/// uniform draw over the interval.
const MAX_REJECTIONS: usize = 64;

#[derive(Clone, Debug)]
pub(crate) struct ParzenEstimator {
    mus: Vec<f64>,
    sigmas: Vec<f64>,
    weights: Vec<f64>,
    /// Probability mass of each kernel inside `[low, high]`.
    masses: Vec<f64>,
    total_weight: f64,
    low: f64,
    high: f64,
}

impl ParzenEstimator {
    /// Builds an estimator over `[low, high]` (already in internal space).
    ///
    /// Observation kernels use Scott's rule, or `bandwidth` when given, and
    /// are clipped to `[range / min(100, n + 1), range]`. The prior kernel
    /// has mean at the interval midpoint, width `range`, and weight
    /// `prior_weight`; a zero weight disables it.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySamples` if `observations` is empty and
    /// `Error::InvalidBandwidth` if `bandwidth` is not positive or
    /// `prior_weight` is negative.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(
        observations: &[f64],
        low: f64,
        high: f64,
        prior_weight: f64,
        bandwidth: Option<f64>,
    ) -> Result<Self> {
        if observations.is_empty() {
            return Err(Error::EmptySamples);
        }
        if let Some(bw) = bandwidth
            && (bw <= 0.0 || bw.is_nan())
        {
            return Err(Error::InvalidBandwidth(bw));
        }
        if prior_weight < 0.0 || prior_weight.is_nan() {
            return Err(Error::InvalidBandwidth(prior_weight));
        }

        let n = observations.len() as f64;
        let range = (high - low).max(f64::EPSILON);
        let min_sigma = range / MAX_SHRINK.min(n + 1.0);
        let sigma = bandwidth
            .unwrap_or_else(|| scotts_rule(observations))
            .clamp(min_sigma, range);

        let mut mus = observations.to_vec();
        let mut sigmas = vec![sigma; observations.len()];
        let mut weights = vec![1.0; observations.len()];
        if prior_weight > 0.0 {
            mus.push(f64::midpoint(low, high));
            sigmas.push(range);
            weights.push(prior_weight);
        }
        let masses = mus
            .iter()
            .zip(&sigmas)
            .map(|(&mu, &sigma)| {
                (norm_cdf((high - mu) / sigma) - norm_cdf((low - mu) / sigma))
                    .max(f64::MIN_POSITIVE)
            })
            .collect();
        let total_weight = weights.iter().sum();

        Ok(Self {
            mus,
            sigmas,
            weights,
            masses,
            total_weight,
            low,
            high,
        })
    }

    /// Probability density at `x`, normalised over `[low, high]`.
    ///
    /// Zero outside the interval.
    pub(crate) fn pdf(&self, x: f64) -> f64 {
        if !(self.low..=self.high).contains(&x) {
            return 0.0;
        }
        let density: f64 = self
            .mus
            .iter()
            .zip(&self.sigmas)
            .zip(&self.weights)
            .zip(&self.masses)
            .map(|(((&mu, &sigma), &w), &mass)| w * norm_pdf((x - mu) / sigma) / (sigma * mass))
            .sum();
        density / self.total_weight
    }

    /// Draws a value inside `[low, high]`: pick a kernel in proportion to
    /// its weight, then draw from that kernel truncated to the interval.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        let threshold = rng.f64() * self.total_weight;
        let mut cumulative = 0.0;
        let mut idx = self.weights.len() - 1;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if cumulative > threshold {
                idx = i;
                break;
            }
        }
        let (mu, sigma) = (self.mus[idx], self.sigmas[idx]);
        for _ in 0..MAX_REJECTIONS {
            let x = mu + sigma * rng_util::standard_normal(rng);
            if x > self.low && x < self.high {
                return x;
            }
        }
        rng_util::f64_range(rng, self.low, self.high)
    }

    #[cfg(test)]
    pub(crate) fn n_components(&self) -> usize {
        self.mus.len()
    }

    #[cfg(test)]
    pub(crate) fn bandwidth(&self) -> f64 {
        self.sigmas[0]
    }
}

/// Scott's rule: h = n^(-1/5) * sigma.
#[allow(clippy::cast_precision_loss)]
fn scotts_rule(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    n.powf(-0.2) * variance.sqrt()
}

/// Standard normal PDF.
fn norm_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF (Hart rational approximation).
fn norm_cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }

    let t = 1.0 / (1.0 + 0.231_641_9 * x.abs());
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782 + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let upper = norm_pdf(x) * poly;

    if x >= 0.0 { 1.0 - upper } else { upper }
}
