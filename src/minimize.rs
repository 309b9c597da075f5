//! Hyperopt-style entry point: minimize a function of a real vector over a
//! [`SearchSpace`].
//!
//! ```
//! use fmin::{Algo, fmin};
//! use fmin::space::SearchSpace;
//!
//! let space = SearchSpace::new().uniform("x", -10.0, 10.0)?;
//! let best = fmin(|x: &[f64]| (x[0] - 3.0).powi(2), &space, Algo::Tpe, 100)?;
//!
//! println!("{best}");
//! # Ok::<(), fmin::Error>(())
//! ```

use core::fmt;
use core::ops::ControlFlow;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::sampler::random::RandomSampler;
use crate::sampler::tpe::TpeSampler;
use crate::sampler::{CompletedTrial, Sampler};
use crate::space::{Point, SearchSpace};
use crate::study::Study;
use crate::trial::Trial;

/// Default evaluation budget of [`Fmin`].
pub const DEFAULT_MAX_EVALS: usize = 100;

/// The strategy that proposes each new point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algo {
    /// Tree-structured Parzen Estimator with default settings.
    #[default]
    Tpe,
    /// Uniform random search.
    Random,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tpe => f.write_str("tpe"),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Minimizes `f` over `space` with `max_evals` evaluations and returns the
/// best point found.
///
/// `f` receives the coordinates in the space's declared order.
///
/// # Errors
///
/// Returns `Error::EmptySpace` for a space without dimensions,
/// `Error::NoCompletedTrials` when `max_evals` is zero, and
/// `Error::NonFiniteObjective` if `f` returns NaN or an infinity.
pub fn fmin<F>(f: F, space: &SearchSpace, algo: Algo, max_evals: usize) -> Result<Point>
where
    F: Fn(&[f64]) -> f64,
{
    Fmin::new(space)
        .algo(algo)
        .max_evals(max_evals)
        .run(f)
        .map(|result| result.best)
}

/// Configurable minimization run.
///
/// # Defaults
///
/// - Algorithm: [`Algo::Tpe`]
/// - Budget: [`DEFAULT_MAX_EVALS`] evaluations
/// - Seed: none (fresh entropy per run)
/// - Loss threshold: none
///
/// ```
/// use fmin::space::SearchSpace;
/// use fmin::{Algo, Fmin};
///
/// let space = SearchSpace::new()
///     .uniform("x", -5.0, 5.0)?
///     .uniform("y", -5.0, 5.0)?;
///
/// let result = Fmin::new(&space)
///     .algo(Algo::Tpe)
///     .max_evals(200)
///     .seed(7)
///     .loss_threshold(0.5)
///     .run(|p: &[f64]| p[0].powi(2) + p[1].powi(2))?;
///
/// assert!(result.best_loss <= 0.5 || result.trials().len() == 200);
/// # Ok::<(), fmin::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Fmin<'a> {
    space: &'a SearchSpace,
    algo: Algo,
    max_evals: usize,
    seed: Option<u64>,
    loss_threshold: Option<f64>,
}

impl<'a> Fmin<'a> {
    /// Starts a run over `space` with default settings.
    #[must_use]
    pub fn new(space: &'a SearchSpace) -> Self {
        Self {
            space,
            algo: Algo::default(),
            max_evals: DEFAULT_MAX_EVALS,
            seed: None,
            loss_threshold: None,
        }
    }

    /// Sets the proposal algorithm.
    #[must_use]
    pub fn algo(mut self, algo: Algo) -> Self {
        self.algo = algo;
        self
    }

    /// Sets the number of objective evaluations.
    #[must_use]
    pub fn max_evals(mut self, max_evals: usize) -> Self {
        self.max_evals = max_evals;
        self
    }

    /// Fixes the random seed so the run is reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Stops as soon as a loss at or below `threshold` is observed.
    #[must_use]
    pub fn loss_threshold(mut self, threshold: f64) -> Self {
        self.loss_threshold = Some(threshold);
        self
    }

    fn sampler(&self) -> Result<Arc<dyn Sampler>> {
        let sampler: Arc<dyn Sampler> = match (self.algo, self.seed) {
            (Algo::Tpe, Some(seed)) => Arc::new(TpeSampler::builder().seed(seed).build()?),
            (Algo::Tpe, None) => Arc::new(TpeSampler::new()),
            (Algo::Random, Some(seed)) => Arc::new(RandomSampler::with_seed(seed)),
            (Algo::Random, None) => Arc::new(RandomSampler::new()),
        };
        Ok(sampler)
    }

    /// Runs the minimization.
    ///
    /// # Errors
    ///
    /// See [`fmin()`].
    pub fn run<F>(self, f: F) -> Result<FminResult>
    where
        F: Fn(&[f64]) -> f64,
    {
        if self.space.is_empty() {
            return Err(Error::EmptySpace);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "fmin",
            algo = %self.algo,
            max_evals = self.max_evals,
            dims = self.space.len()
        )
        .entered();

        let study = Study::from_arc(self.sampler()?);
        let objective = SpaceObjective {
            space: self.space,
            f,
            loss_threshold: self.loss_threshold,
        };
        study.optimize(self.max_evals, objective)?;

        let best_trial = study.best_trial()?;
        let best = self.space.point_of(&best_trial)?;
        trace_info!(
            best_loss = best_trial.value,
            n_trials = study.n_trials(),
            "minimization finished"
        );

        Ok(FminResult {
            best,
            best_loss: best_trial.value,
            study,
        })
    }
}

/// Outcome of [`Fmin::run`].
#[derive(Debug)]
pub struct FminResult {
    /// The best point found.
    pub best: Point,
    /// The loss at [`best`](Self::best).
    pub best_loss: f64,
    study: Study,
}

impl FminResult {
    /// All completed trials, in evaluation order.
    #[must_use]
    pub fn trials(&self) -> Vec<CompletedTrial> {
        self.study.trials()
    }

    /// The study that ran the minimization, for reporting.
    #[must_use]
    pub fn study(&self) -> &Study {
        &self.study
    }
}

/// Adapts a function of a real vector to the study's trial interface.
struct SpaceObjective<'a, F> {
    space: &'a SearchSpace,
    f: F,
    loss_threshold: Option<f64>,
}

impl<F> Objective for SpaceObjective<'_, F>
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Error;

    fn evaluate(&self, trial: &mut Trial) -> Result<f64> {
        let point = self.space.suggest(trial)?;
        Ok((self.f)(point.values()))
    }

    fn after_trial(&self, _study: &Study, trial: &CompletedTrial) -> ControlFlow<()> {
        match self.loss_threshold {
            Some(threshold) if trial.value <= threshold => {
                trace_info!(trial_id = trial.id, loss = trial.value, "loss threshold reached");
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}
