//! Study implementation for managing minimization trials.

use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Error;
use crate::sampler::random::RandomSampler;
use crate::sampler::{CompletedTrial, Sampler};
use crate::trial::Trial;

mod analysis;
mod builder;
mod optimize;

pub use builder::StudyBuilder;

/// A study drives a minimization: it hands out trials, records their losses,
/// and tracks the best one.
///
/// Completed trials form the history the sampler learns from. Lower loss is
/// always better.
///
/// # Examples
///
/// ```
/// use fmin::Study;
///
/// let study = Study::new();
/// assert_eq!(study.n_trials(), 0);
/// ```
pub struct Study {
    /// The sampler used to generate parameter values.
    pub(crate) sampler: Arc<dyn Sampler>,
    /// Completed trials, shared with every trial this study creates.
    pub(crate) history: Arc<RwLock<Vec<CompletedTrial>>>,
    next_id: AtomicU64,
}

impl core::fmt::Debug for Study {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Study")
            .field("n_trials", &self.history.read().len())
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Default for Study {
    fn default() -> Self {
        Self::new()
    }
}

impl Study {
    /// Create a study that samples uniformly at random.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sampler(RandomSampler::new())
    }

    /// Return a [`StudyBuilder`] for constructing a study with a fluent API.
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::sampler::TpeSampler;
    ///
    /// let study = Study::builder().sampler(TpeSampler::new()).build();
    /// ```
    #[must_use]
    pub fn builder() -> StudyBuilder {
        StudyBuilder::new()
    }

    /// Create a study with a custom sampler.
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::sampler::random::RandomSampler;
    ///
    /// let study = Study::with_sampler(RandomSampler::with_seed(42));
    /// ```
    pub fn with_sampler(sampler: impl Sampler + 'static) -> Self {
        Self::from_arc(Arc::new(sampler))
    }

    pub(crate) fn from_arc(sampler: Arc<dyn Sampler>) -> Self {
        Self {
            sampler,
            history: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Replace the sampler used for future trials.
    ///
    /// Completed trials stay in the history and inform the new sampler.
    pub fn set_sampler(&mut self, sampler: impl Sampler + 'static) {
        self.sampler = Arc::new(sampler);
    }

    /// Create a new trial with a unique ID.
    ///
    /// The trial starts in the `Running` state and samples through the
    /// study's sampler. After evaluating the objective, pass it to
    /// [`complete_trial`](Self::complete_trial) or
    /// [`fail_trial`](Self::fail_trial).
    ///
    /// ```
    /// use fmin::Study;
    ///
    /// let study = Study::new();
    /// assert_eq!(study.create_trial().id(), 0);
    /// assert_eq!(study.create_trial().id(), 1);
    /// ```
    #[must_use]
    pub fn create_trial(&self) -> Trial {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Trial::with_sampler(id, Arc::clone(&self.sampler), Arc::clone(&self.history))
    }

    /// Record a completed trial with its loss.
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::parameter::FloatParam;
    ///
    /// let study = Study::new();
    /// let x = FloatParam::new(0.0, 1.0);
    /// let mut trial = study.create_trial();
    /// let v = x.suggest(&mut trial).unwrap();
    /// study.complete_trial(trial, v * v).unwrap();
    ///
    /// assert_eq!(study.n_trials(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFiniteObjective` if `value` is NaN or infinite.
    /// The trial is then discarded and the history is left unchanged.
    pub fn complete_trial(&self, trial: Trial, value: f64) -> crate::Result<()> {
        if !value.is_finite() {
            let err = Error::NonFiniteObjective {
                trial_id: trial.id(),
                value,
            };
            self.fail_trial(trial, &err);
            return Err(err);
        }
        let completed = trial.into_completed(value);
        self.history.write().push(completed);
        Ok(())
    }

    /// Discard a failed trial.
    ///
    /// Failed trials never enter the history, so they do not influence
    /// future sampling.
    #[allow(clippy::needless_pass_by_value)]
    pub fn fail_trial(&self, trial: Trial, error: impl ToString) {
        #[cfg(feature = "tracing")]
        let message = error.to_string();
        #[cfg(not(feature = "tracing"))]
        let _ = (trial, error);
        trace_debug!(trial_id = trial.id(), error = %message, "trial failed");
    }

    /// Request a new trial. Alias for [`create_trial`](Self::create_trial)
    /// in the ask-and-tell interface.
    #[must_use]
    pub fn ask(&self) -> Trial {
        self.create_trial()
    }

    /// Report the result of a trial obtained from [`ask`](Self::ask).
    ///
    /// An `Err` discards the trial; an `Ok` loss is recorded through
    /// [`complete_trial`](Self::complete_trial).
    ///
    /// ```
    /// use fmin::Study;
    ///
    /// let study = Study::new();
    ///
    /// let trial = study.ask();
    /// study.tell(trial, Ok::<_, &str>(42.0)).unwrap();
    /// assert_eq!(study.n_trials(), 1);
    ///
    /// let trial = study.ask();
    /// study.tell(trial, Err::<f64, _>("evaluation failed")).unwrap();
    /// assert_eq!(study.n_trials(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFiniteObjective` for a NaN or infinite loss.
    pub fn tell(
        &self,
        trial: Trial,
        value: core::result::Result<f64, impl ToString>,
    ) -> crate::Result<()> {
        match value {
            Ok(v) => self.complete_trial(trial, v),
            Err(e) => {
                self.fail_trial(trial, e);
                Ok(())
            }
        }
    }

    /// Return clones of all completed trials, in completion order.
    #[must_use]
    pub fn trials(&self) -> Vec<CompletedTrial> {
        self.history.read().clone()
    }

    /// Return the number of completed trials.
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.history.read().len()
    }
}
