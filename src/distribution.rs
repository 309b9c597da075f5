//! Parameter distribution types.

use crate::error::{Error, Result};

/// Distribution for a continuous search dimension.
///
/// The plain form is a uniform interval. `log_scale` samples uniformly in
/// log space and `step` snaps values to `low + k * step`.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<f64>,
}

impl FloatDistribution {
    /// Creates a uniform distribution over `[low, high]`.
    #[must_use]
    pub fn uniform(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            log_scale: false,
            step: None,
        }
    }

    /// Checks the bounds, log-scale, and step configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` if a bound is not finite or `low > high`,
    /// `Error::InvalidLogBounds` if log scale is requested with `low <= 0`,
    /// and `Error::InvalidStep` if the step is not positive.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(Error::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.log_scale && self.low <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        if let Some(step) = self.step
            && (step <= 0.0 || !step.is_finite())
        {
            return Err(Error::InvalidStep);
        }
        Ok(())
    }

    /// Returns `true` if `value` lies within the inclusive bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Centre of the interval in the sampled space: geometric for log
    /// scale, snapped to the step grid when one is set.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let (low, high) = self.internal_bounds();
        self.from_internal(f64::midpoint(low, high))
    }

    /// Bounds in the space the samplers model (log space when `log_scale`).
    pub(crate) fn internal_bounds(&self) -> (f64, f64) {
        (self.to_internal(self.low), self.to_internal(self.high))
    }

    pub(crate) fn to_internal(&self, value: f64) -> f64 {
        if self.log_scale { value.ln() } else { value }
    }

    /// Maps an internal-space value back, applying the step grid and bounds.
    pub(crate) fn from_internal(&self, internal: f64) -> f64 {
        let mut value = if self.log_scale {
            internal.exp()
        } else {
            internal
        };
        if let Some(step) = self.step {
            let k = ((value - self.low) / step).round();
            value = self.low + k * step;
            if value > self.high {
                value -= step;
            }
        }
        value.clamp(self.low, self.high)
    }
}
