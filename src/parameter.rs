//! Search dimensions that a [`Trial`] can suggest values for.
//!
//! ```
//! use fmin::Trial;
//! use fmin::parameter::FloatParam;
//!
//! let mut trial = Trial::new(0);
//!
//! let x = FloatParam::new(-100.0, 100.0)
//!     .name("x")
//!     .suggest(&mut trial)
//!     .unwrap();
//! let lr = FloatParam::new(1e-5, 1e-1)
//!     .log_scale()
//!     .suggest(&mut trial)
//!     .unwrap();
//! assert!((-100.0..=100.0).contains(&x));
//! assert!((1e-5..=1e-1).contains(&lr));
//! ```

use core::sync::atomic::{AtomicU64, Ordering};

use crate::distribution::FloatDistribution;
use crate::error::Result;
use crate::trial::Trial;

static NEXT_PARAM_ID: AtomicU64 = AtomicU64::new(0);

/// A unique identifier for a parameter instance.
///
/// Each parameter is assigned a unique `ParamId` at creation time. Cloning a parameter
/// copies its `ParamId`, so clones refer to the same logical parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamId(u64);

impl ParamId {
    /// Creates a new unique `ParamId`.
    #[must_use]
    pub fn new() -> Self {
        Self(NEXT_PARAM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ParamId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ParamId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "param_{}", self.0)
    }
}

/// A floating-point dimension with optional name, log scale, and step size.
#[derive(Clone, Debug)]
pub struct FloatParam {
    id: ParamId,
    name: Option<String>,
    distribution: FloatDistribution,
}

impl FloatParam {
    /// Creates a new float parameter with the given bounds.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            id: ParamId::new(),
            name: None,
            distribution: FloatDistribution::uniform(low, high),
        }
    }

    /// Sets the human-readable name used in reports and result mappings.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enables log-scale sampling.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.distribution.log_scale = true;
        self
    }

    /// Sets a step size for discretized sampling.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.distribution.step = Some(step);
        self
    }

    /// Returns the unique identifier for this parameter.
    #[must_use]
    pub fn id(&self) -> ParamId {
        self.id
    }

    /// Returns the distribution this parameter samples from.
    #[must_use]
    pub fn distribution(&self) -> &FloatDistribution {
        &self.distribution
    }

    /// Returns the name, falling back to the id when none was set.
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    /// Validates the parameter configuration.
    ///
    /// # Errors
    ///
    /// See [`FloatDistribution::validate`].
    pub fn validate(&self) -> Result<()> {
        self.distribution.validate()
    }

    /// Suggests a value for this parameter from the given trial.
    ///
    /// Delegates to [`Trial::suggest_param`].
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the parameter conflicts with
    /// a previously suggested parameter of the same id.
    pub fn suggest(&self, trial: &mut Trial) -> Result<f64> {
        trial.suggest_param(self)
    }
}
