use core::fmt::Debug;

use crate::Error;

/// A rule for how many completed trials count as "good" in TPE.
///
/// The sampler clamps the returned count to `[1, n_trials - 1]` so both
/// groups are non-empty.
///
/// ```
/// use fmin::sampler::tpe::GammaStrategy;
///
/// #[derive(Debug, Clone)]
/// struct TopThree;
///
/// impl GammaStrategy for TopThree {
///     fn n_good(&self, _n_trials: usize) -> usize {
///         3
///     }
///
///     fn clone_box(&self) -> Box<dyn GammaStrategy> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait GammaStrategy: Send + Sync + Debug {
    /// Number of trials, out of `n_trials` completed ones, to treat as good.
    fn n_good(&self, n_trials: usize) -> usize;

    /// Creates a boxed clone of this strategy.
    fn clone_box(&self) -> Box<dyn GammaStrategy>;
}

impl Clone for Box<dyn GammaStrategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A constant quantile: the best `ceil(gamma * n)` trials are good.
///
/// ```
/// use fmin::sampler::tpe::{FixedGamma, GammaStrategy};
///
/// let strategy = FixedGamma::new(0.25).unwrap();
/// assert_eq!(strategy.n_good(100), 25);
/// assert_eq!(strategy.n_good(10), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedGamma {
    gamma: f64,
}

impl FixedGamma {
    /// Creates a new fixed gamma strategy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGamma` if gamma is not in (0.0, 1.0).
    pub fn new(gamma: f64) -> crate::Result<Self> {
        if gamma.is_nan() || gamma <= 0.0 || gamma >= 1.0 {
            return Err(Error::InvalidGamma(gamma));
        }
        Ok(Self { gamma })
    }

    /// Returns the fixed gamma value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.gamma
    }
}

impl Default for FixedGamma {
    fn default() -> Self {
        Self { gamma: 0.25 }
    }
}

impl GammaStrategy for FixedGamma {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_good(&self, n_trials: usize) -> usize {
        (n_trials as f64 * self.gamma).ceil() as usize
    }

    fn clone_box(&self) -> Box<dyn GammaStrategy> {
        Box::new(*self)
    }
}

/// Hyperopt's split: `min(ceil(gamma * sqrt(n)), max_good)` good trials.
///
/// The good group grows with the square root of the history, so the model
/// concentrates on a handful of the best points even after hundreds of
/// trials. This is the default for [`TpeSampler`](super::TpeSampler).
///
/// ```
/// use fmin::sampler::tpe::{GammaStrategy, HyperoptGamma};
///
/// let strategy = HyperoptGamma::default();
/// assert_eq!(strategy.n_good(100), 3); // ceil(0.25 * 10)
/// assert_eq!(strategy.n_good(500), 6); // ceil(0.25 * 22.36)
/// assert_eq!(strategy.n_good(100_000), 25); // capped
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HyperoptGamma {
    gamma: f64,
    max_good: usize,
}

impl HyperoptGamma {
    /// Creates a new hyperopt-style strategy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGamma` if `gamma` is not in (0.0, 1.0).
    pub fn new(gamma: f64, max_good: usize) -> crate::Result<Self> {
        if gamma.is_nan() || gamma <= 0.0 || gamma >= 1.0 {
            return Err(Error::InvalidGamma(gamma));
        }
        Ok(Self { gamma, max_good })
    }

    /// Returns the gamma multiplier.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the cap on the size of the good group.
    #[must_use]
    pub fn max_good(&self) -> usize {
        self.max_good
    }
}

impl Default for HyperoptGamma {
    /// `gamma = 0.25`, `max_good = 25`.
    fn default() -> Self {
        Self {
            gamma: 0.25,
            max_good: 25,
        }
    }
}

impl GammaStrategy for HyperoptGamma {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_good(&self, n_trials: usize) -> usize {
        let n = (self.gamma * (n_trials as f64).sqrt()).ceil() as usize;
        n.min(self.max_good)
    }

    fn clone_box(&self) -> Box<dyn GammaStrategy> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_gamma_default() {
        let strategy = FixedGamma::default();
        assert!((strategy.value() - 0.25).abs() < f64::EPSILON);
        assert_eq!(strategy.n_good(0), 0);
        assert_eq!(strategy.n_good(4), 1);
        assert_eq!(strategy.n_good(5), 2);
    }

    #[test]
    fn test_fixed_gamma_invalid() {
        assert!(FixedGamma::new(0.0).is_err());
        assert!(FixedGamma::new(1.0).is_err());
        assert!(FixedGamma::new(-0.1).is_err());
        assert!(FixedGamma::new(f64::NAN).is_err());
    }

    #[test]
    fn test_hyperopt_gamma_grows_with_sqrt() {
        let strategy = HyperoptGamma::default();
        assert_eq!(strategy.n_good(0), 0);
        assert_eq!(strategy.n_good(20), 2); // ceil(1.118)
        assert_eq!(strategy.n_good(16), 1);
        assert_eq!(strategy.n_good(10_000), 25);
    }

    #[test]
    fn test_hyperopt_gamma_invalid() {
        assert!(HyperoptGamma::new(0.0, 25).is_err());
        assert!(HyperoptGamma::new(1.5, 25).is_err());
        assert!(HyperoptGamma::new(0.5, 0).is_ok());
    }

    #[test]
    fn test_boxed_strategy_clones() {
        let boxed: Box<dyn GammaStrategy> = Box::new(FixedGamma::new(0.5).unwrap());
        let cloned = boxed.clone();
        assert_eq!(cloned.n_good(10), 5);
    }
}
