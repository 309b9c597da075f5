//! The [`Objective`] trait defines what gets minimized.
//!
//! For simple closures, pass them directly to
//! [`Study::optimize`](crate::Study::optimize):
//!
//! ```
//! use fmin::prelude::*;
//!
//! let study = Study::new();
//! let x = FloatParam::new(-10.0, 10.0).name("x");
//!
//! study
//!     .optimize(50, |trial: &mut Trial| {
//!         let v = x.suggest(trial)?;
//!         Ok::<_, Error>((v - 3.0).powi(2))
//!     })
//!     .unwrap();
//! ```
//!
//! For early stopping, implement [`Objective`] on a struct:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use fmin::Objective;
//! use fmin::prelude::*;
//!
//! struct StopBelow {
//!     x: FloatParam,
//!     target: f64,
//! }
//!
//! impl Objective for StopBelow {
//!     type Error = Error;
//!
//!     fn evaluate(&self, trial: &mut Trial) -> Result<f64> {
//!         let v = self.x.suggest(trial)?;
//!         Ok((v - 3.0).powi(2))
//!     }
//!
//!     fn after_trial(&self, _study: &Study, trial: &CompletedTrial) -> ControlFlow<()> {
//!         if trial.value < self.target {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let study = Study::new();
//! let obj = StopBelow {
//!     x: FloatParam::new(-10.0, 10.0).name("x"),
//!     target: 1.0,
//! };
//! study.optimize(500, obj).unwrap();
//! assert!(study.best_value().unwrap() < 1.0);
//! ```

use core::ops::ControlFlow;

use crate::sampler::CompletedTrial;
use crate::study::Study;
use crate::trial::Trial;

/// An objective function with lifecycle hooks.
///
/// The only required method is [`evaluate`](Objective::evaluate). Closures
/// of the form `Fn(&mut Trial) -> Result<f64, E>` implement this trait
/// through a blanket impl.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString + 'static;

    /// Evaluate the loss for a single trial.
    ///
    /// Sample parameters from `trial` via
    /// [`FloatParam::suggest`](crate::parameter::FloatParam::suggest) and
    /// return the loss.
    ///
    /// # Errors
    ///
    /// Any error whose type implements `ToString`. An error stops the
    /// optimization loop and surfaces as
    /// [`Error::ObjectiveFailed`](crate::Error::ObjectiveFailed).
    fn evaluate(&self, trial: &mut Trial) -> Result<f64, Self::Error>;

    /// Called before each trial is created.
    ///
    /// Return `ControlFlow::Break(())` to stop before the next trial starts.
    fn before_trial(&self, _study: &Study) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after each completed trial, before it joins the history.
    ///
    /// Return `ControlFlow::Break(())` to stop the optimization loop.
    fn after_trial(&self, _study: &Study, _trial: &CompletedTrial) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: Fn(&mut Trial) -> Result<f64, E>,
    E: ToString + 'static,
{
    type Error = E;

    fn evaluate(&self, trial: &mut Trial) -> Result<f64, E> {
        self(trial)
    }
}
