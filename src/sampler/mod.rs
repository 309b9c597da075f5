//! Sampler trait and implementations for parameter sampling.
//!
//! | Sampler | Algorithm | hyperopt counterpart |
//! |---------|-----------|----------------------|
//! | [`RandomSampler`] | Uniform random | `rand.suggest` |
//! | [`TpeSampler`] | Tree-structured Parzen Estimator | `tpe.suggest` |

pub mod random;
pub mod tpe;

use std::collections::HashMap;

pub use random::RandomSampler;
pub use tpe::TpeSampler;

use crate::distribution::FloatDistribution;
use crate::parameter::{FloatParam, ParamId};

/// A finished trial with its parameters, distributions, and loss.
#[derive(Clone, Debug)]
pub struct CompletedTrial {
    /// The unique identifier for this trial.
    pub id: u64,
    /// The sampled parameter values, keyed by parameter id.
    pub params: HashMap<ParamId, f64>,
    /// The parameter distributions used, keyed by parameter id.
    pub distributions: HashMap<ParamId, FloatDistribution>,
    /// Human-readable labels for parameters, keyed by parameter id.
    pub param_labels: HashMap<ParamId, String>,
    /// The loss returned by the objective function. Always finite.
    pub value: f64,
}

impl CompletedTrial {
    /// Creates a new completed trial.
    #[must_use]
    pub fn new(
        id: u64,
        params: HashMap<ParamId, f64>,
        distributions: HashMap<ParamId, FloatDistribution>,
        param_labels: HashMap<ParamId, String>,
        value: f64,
    ) -> Self {
        Self {
            id,
            params,
            distributions,
            param_labels,
            value,
        }
    }

    /// Returns the value sampled for `param`, or `None` if the trial never
    /// suggested it.
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::parameter::FloatParam;
    /// use fmin::sampler::RandomSampler;
    ///
    /// let study = Study::with_sampler(RandomSampler::with_seed(7));
    /// let x = FloatParam::new(-10.0, 10.0);
    ///
    /// study
    ///     .optimize(5, |trial: &mut fmin::Trial| {
    ///         let v = x.suggest(trial)?;
    ///         Ok::<_, fmin::Error>(v * v)
    ///     })
    ///     .unwrap();
    ///
    /// let best = study.best_trial().unwrap();
    /// assert!((-10.0..=10.0).contains(&best.get(&x).unwrap()));
    /// ```
    #[must_use]
    pub fn get(&self, param: &FloatParam) -> Option<f64> {
        self.params.get(&param.id()).copied()
    }
}

/// Trait for pluggable parameter sampling strategies.
///
/// Samplers generate one value per call from the distribution of a single
/// parameter, optionally informed by the completed history. The trait
/// requires `Send + Sync` so a study can share its sampler with trials.
pub trait Sampler: Send + Sync {
    /// Samples a value for `param_id` from `distribution`.
    ///
    /// `history` holds the study's completed trials in completion order.
    /// Implementations must return a value inside the distribution's bounds.
    fn sample(
        &self,
        param_id: ParamId,
        distribution: &FloatDistribution,
        history: &[CompletedTrial],
    ) -> f64;
}
