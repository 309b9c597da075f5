/// Errors returned by search-space construction, sampling, and the
/// optimization loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when a search space has no dimensions.
    #[error("search space must declare at least one dimension")]
    EmptySpace,

    /// Returned when a dimension is declared with an empty name.
    #[error("dimension names must not be empty")]
    EmptyDimensionName,

    /// Returned when two dimensions of a search space share a name.
    #[error("duplicate dimension name '{0}'")]
    DuplicateDimension(String),

    /// Returned when a point is queried for a name the space does not declare.
    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    /// Returned when a parameter is suggested with a different configuration.
    #[error("parameter conflict for '{name}': {reason}")]
    ParameterConflict {
        /// The name of the conflicting parameter.
        name: String,
        /// The reason for the conflict.
        reason: String,
    },

    /// Returned when requesting the best trial but no trials have completed.
    #[error("no completed trials available")]
    NoCompletedTrials,

    /// Returned when gamma is not in the valid range (0.0, 1.0).
    #[error("invalid gamma: {0} must be in (0.0, 1.0)")]
    InvalidGamma(f64),

    /// Returned when bandwidth or prior weight is not positive.
    #[error("invalid bandwidth: {0} must be positive")]
    InvalidBandwidth(f64),

    /// Returned when a Parzen estimator is created with empty samples.
    #[error("Parzen estimator requires at least one sample")]
    EmptySamples,

    /// Returned when the objective produced NaN or an infinity.
    #[error("objective returned non-finite value {value} in trial {trial_id}")]
    NonFiniteObjective {
        /// The trial that produced the value.
        trial_id: u64,
        /// The offending value.
        value: f64,
    },

    /// Returned when an objective reported an error for a trial.
    #[error("objective failed in trial {trial_id}: {message}")]
    ObjectiveFailed {
        /// The trial that failed.
        trial_id: u64,
        /// The objective's error message.
        message: String,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
