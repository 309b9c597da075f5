use crate::sampler::CompletedTrial;

use super::Study;

/// Orders two trials by loss, lowest first.
///
/// Recorded losses are always finite, so `total_cmp` agrees with `<`.
fn by_loss(a: &CompletedTrial, b: &CompletedTrial) -> core::cmp::Ordering {
    a.value.total_cmp(&b.value)
}

impl Study {
    /// Return the trial with the lowest loss.
    ///
    /// Ties keep the earliest trial.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoCompletedTrials` if no trials have been completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::parameter::FloatParam;
    ///
    /// let study = Study::new();
    /// assert!(study.best_trial().is_err());
    ///
    /// let x = FloatParam::new(0.0, 1.0);
    ///
    /// let mut trial1 = study.create_trial();
    /// let _ = x.suggest(&mut trial1);
    /// study.complete_trial(trial1, 0.8).unwrap();
    ///
    /// let mut trial2 = study.create_trial();
    /// let _ = x.suggest(&mut trial2);
    /// study.complete_trial(trial2, 0.3).unwrap();
    ///
    /// assert_eq!(study.best_trial().unwrap().value, 0.3);
    /// ```
    pub fn best_trial(&self) -> crate::Result<CompletedTrial> {
        let trials = self.history.read();
        trials
            .iter()
            .min_by(|a, b| by_loss(a, b))
            .cloned()
            .ok_or(crate::Error::NoCompletedTrials)
    }

    /// Return the lowest loss found so far.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoCompletedTrials` if no trials have been completed.
    pub fn best_value(&self) -> crate::Result<f64> {
        self.best_trial().map(|trial| trial.value)
    }

    /// Return the `n` trials with the lowest loss, best first.
    ///
    /// ```
    /// use fmin::Study;
    /// use fmin::parameter::FloatParam;
    ///
    /// let study = Study::new();
    /// let x = FloatParam::new(0.0, 10.0);
    ///
    /// for val in [5.0, 1.0, 3.0] {
    ///     let mut t = study.create_trial();
    ///     let _ = x.suggest(&mut t);
    ///     study.complete_trial(t, val).unwrap();
    /// }
    ///
    /// let top2 = study.top_trials(2);
    /// assert_eq!(top2.len(), 2);
    /// assert_eq!(top2[0].value, 1.0);
    /// assert_eq!(top2[1].value, 3.0);
    /// ```
    #[must_use]
    pub fn top_trials(&self, n: usize) -> Vec<CompletedTrial> {
        let trials = self.history.read();
        let mut indices: Vec<usize> = (0..trials.len()).collect();
        indices.sort_by(|&a, &b| by_loss(&trials[a], &trials[b]));
        indices.truncate(n);
        indices.iter().map(|&i| trials[i].clone()).collect()
    }

    /// Returns `true` when the most recent trial holds the lowest loss.
    #[cfg(feature = "tracing")]
    pub(crate) fn last_is_best(&self) -> bool {
        let trials = self.history.read();
        let best = trials.iter().min_by(|a, b| by_loss(a, b)).map(|t| t.id);
        best.is_some() && trials.last().map(|t| t.id) == best
    }
}
