//! Trial implementation for tracking sampled parameters and trial state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::distribution::FloatDistribution;
use crate::error::{Error, Result};
use crate::parameter::{FloatParam, ParamId};
use crate::sampler::random::RandomSampler;
use crate::sampler::{CompletedTrial, Sampler};

/// A trial represents a single evaluation of the objective function.
///
/// Each trial has a unique ID and stores the sampled parameters along with
/// their distributions. A study either records it with a loss or discards it.
///
/// Trials created by [`Study::create_trial`](crate::Study::create_trial)
/// carry the study's sampler and a handle to its history, so every
/// suggestion is informed by the trials completed so far.
#[derive(Clone)]
pub struct Trial {
    id: u64,
    params: HashMap<ParamId, f64>,
    distributions: HashMap<ParamId, FloatDistribution>,
    param_labels: HashMap<ParamId, String>,
    sampler: Option<Arc<dyn Sampler>>,
    history: Option<Arc<RwLock<Vec<CompletedTrial>>>>,
}

impl core::fmt::Debug for Trial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Trial")
            .field("id", &self.id)
            .field("params", &self.params)
            .field("distributions", &self.distributions)
            .field("param_labels", &self.param_labels)
            .field("has_sampler", &self.sampler.is_some())
            .field("has_history", &self.history.is_some())
            .finish()
    }
}

impl Trial {
    /// Creates a standalone trial that samples uniformly at random.
    ///
    /// ```
    /// use fmin::Trial;
    ///
    /// let trial = Trial::new(0);
    /// assert_eq!(trial.id(), 0);
    /// ```
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            params: HashMap::new(),
            distributions: HashMap::new(),
            param_labels: HashMap::new(),
            sampler: None,
            history: None,
        }
    }

    /// Creates a trial bound to a sampler and the shared trial history.
    pub(crate) fn with_sampler(
        id: u64,
        sampler: Arc<dyn Sampler>,
        history: Arc<RwLock<Vec<CompletedTrial>>>,
    ) -> Self {
        Self {
            sampler: Some(sampler),
            history: Some(history),
            ..Self::new(id)
        }
    }

    fn sample_value(&self, param_id: ParamId, distribution: &FloatDistribution) -> f64 {
        if let (Some(sampler), Some(history)) = (&self.sampler, &self.history) {
            let history_guard = history.read();
            sampler.sample(param_id, distribution, &history_guard)
        } else {
            RandomSampler::new().sample(param_id, distribution, &[])
        }
    }

    /// Returns the unique ID of this trial.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns a reference to the sampled parameters.
    #[must_use]
    pub fn params(&self) -> &HashMap<ParamId, f64> {
        &self.params
    }

    /// Returns a reference to the parameter distributions.
    #[must_use]
    pub fn distributions(&self) -> &HashMap<ParamId, FloatDistribution> {
        &self.distributions
    }

    /// Returns a reference to the parameter labels.
    #[must_use]
    pub fn param_labels(&self) -> &HashMap<ParamId, String> {
        &self.param_labels
    }

    /// Consumes the trial and records it with the given loss.
    pub(crate) fn into_completed(self, value: f64) -> CompletedTrial {
        CompletedTrial::new(
            self.id,
            self.params,
            self.distributions,
            self.param_labels,
            value,
        )
    }

    /// Suggests a value for `param`.
    ///
    /// Suggesting the same parameter twice returns the cached value.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter fails validation or was previously
    /// suggested with a different distribution.
    ///
    /// ```
    /// use fmin::Trial;
    /// use fmin::parameter::FloatParam;
    ///
    /// let x = FloatParam::new(0.0, 1.0);
    /// let mut trial = Trial::new(0);
    ///
    /// let first = trial.suggest_param(&x).unwrap();
    /// let again = trial.suggest_param(&x).unwrap();
    /// assert_eq!(first, again);
    /// ```
    pub fn suggest_param(&mut self, param: &FloatParam) -> Result<f64> {
        param.validate()?;

        let param_id = param.id();
        let distribution = param.distribution();

        if let Some(existing) = self.distributions.get(&param_id) {
            if existing == distribution
                && let Some(&value) = self.params.get(&param_id)
            {
                return Ok(value);
            }
            return Err(Error::ParameterConflict {
                name: param.label(),
                reason: "parameter was previously sampled with a different configuration"
                    .to_string(),
            });
        }

        let value = self.sample_value(param_id, distribution);

        self.distributions.insert(param_id, distribution.clone());
        self.params.insert(param_id, value);
        self.param_labels.insert(param_id, param.label());

        Ok(value)
    }
}
