use core::any::Any;
use core::ops::ControlFlow;

use crate::error::Error;
use crate::objective::Objective;

use super::Study;

impl Study {
    /// Run up to `n_trials` sequential evaluations of `objective`.
    ///
    /// Accepts any [`Objective`] implementation, including plain closures
    /// (`Fn(&mut Trial) -> Result<f64, E>`). Struct-based objectives can
    /// override [`before_trial`](Objective::before_trial) and
    /// [`after_trial`](Objective::after_trial) to stop early.
    ///
    /// # Errors
    ///
    /// - `Error::ObjectiveFailed` if the objective returns an error. When
    ///   that error is already an [`Error`], it is returned unchanged.
    /// - `Error::NonFiniteObjective` if the objective returns NaN or an
    ///   infinite loss.
    /// - `Error::NoCompletedTrials` if the loop finished without any
    ///   completed trial, for example when `n_trials` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::parameter::FloatParam;
    /// use fmin::sampler::random::RandomSampler;
    ///
    /// let study = Study::with_sampler(RandomSampler::with_seed(42));
    /// let x = FloatParam::new(-10.0, 10.0);
    ///
    /// study
    ///     .optimize(10, |trial: &mut fmin::Trial| {
    ///         let v = x.suggest(trial)?;
    ///         Ok::<_, fmin::Error>(v * v)
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(study.n_trials(), 10);
    /// assert!(study.best_value().unwrap() >= 0.0);
    /// ```
    #[allow(clippy::needless_pass_by_value)]
    pub fn optimize(&self, n_trials: usize, objective: impl Objective) -> crate::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("optimize", n_trials).entered();

        for _ in 0..n_trials {
            if let ControlFlow::Break(()) = objective.before_trial(self) {
                trace_debug!("stopped before trial");
                break;
            }

            let mut trial = self.create_trial();
            let trial_id = trial.id();
            let value = match objective.evaluate(&mut trial) {
                Ok(value) => value,
                Err(e) => {
                    let err = objective_error(trial_id, e);
                    self.fail_trial(trial, &err);
                    return Err(err);
                }
            };

            if !value.is_finite() {
                let err = Error::NonFiniteObjective { trial_id, value };
                self.fail_trial(trial, &err);
                return Err(err);
            }

            let completed = trial.into_completed(value);
            let flow = objective.after_trial(self, &completed);
            self.history.write().push(completed);

            trace_debug!(trial_id, loss = value, "trial completed");
            #[cfg(feature = "tracing")]
            if self.last_is_best() {
                tracing::info!(trial_id, loss = value, "new best value found");
            }

            if let ControlFlow::Break(()) = flow {
                trace_debug!(trial_id, "stopped after trial");
                break;
            }
        }

        if self.n_trials() == 0 {
            return Err(Error::NoCompletedTrials);
        }
        Ok(())
    }
}

/// Converts an objective's error into a crate error, passing crate errors
/// through unchanged.
fn objective_error<E: ToString + 'static>(trial_id: u64, e: E) -> Error {
    let message = e.to_string();
    let boxed: Box<dyn Any> = Box::new(e);
    match boxed.downcast::<Error>() {
        Ok(err) => *err,
        Err(_) => Error::ObjectiveFailed { trial_id, message },
    }
}
