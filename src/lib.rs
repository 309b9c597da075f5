#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Hyperopt-style minimization of black-box real functions.
//!
//! Declare a bounded search space, hand over a function of a real vector,
//! pick an algorithm and an evaluation budget, and get back the best point
//! found. The default algorithm is a Tree-structured Parzen Estimator (TPE)
//! that learns from every completed evaluation.
//!
//! # Getting Started
//!
//! ```
//! use fmin::prelude::*;
//!
//! let space = SearchSpace::new()
//!     .uniform("x", -10.0, 10.0)?
//!     .uniform("y", -10.0, 10.0)?;
//!
//! let best = fmin(
//!     |p: &[f64]| (p[0] - 3.0).powi(2) + (p[1] + 1.0).powi(2),
//!     &space,
//!     Algo::Tpe,
//!     200,
//! )?;
//!
//! println!("{best}");
//! # Ok::<(), Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`SearchSpace`](space::SearchSpace) | Ordered, named dimensions: uniform, log-uniform, quantized. |
//! | [`fmin()`] / [`Fmin`] | Run a minimization and return the best [`Point`](space::Point). |
//! | [`Study`] | The loop underneath: creates trials, records losses, tracks the best. |
//! | [`Trial`] | A single evaluation, carrying the suggested parameter values. |
//! | [`Sampler`](sampler::Sampler) | Strategy for choosing the next point ([`TpeSampler`](sampler::TpeSampler), [`RandomSampler`](sampler::RandomSampler)). |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key points | on |
//! | `demo` | The `fmin-demo` binary, with `anyhow` and `tracing-subscriber` | on |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod distribution;
mod error;
pub mod functions;
pub mod grid;
mod kde;
mod minimize;
pub mod objective;
pub mod parameter;
mod rng_util;
pub mod sampler;
pub mod space;
mod study;
mod trial;
mod visualization;

pub use distribution::FloatDistribution;
pub use error::{Error, Result};
pub use minimize::{Algo, DEFAULT_MAX_EVALS, Fmin, FminResult, fmin};
pub use objective::Objective;
pub use study::{Study, StudyBuilder};
pub use trial::Trial;
pub use visualization::{generate_curve_report, generate_html_report};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use fmin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Curve, linspace};
    pub use crate::minimize::{Algo, Fmin, FminResult, fmin};
    pub use crate::objective::Objective;
    pub use crate::parameter::FloatParam;
    pub use crate::sampler::{CompletedTrial, RandomSampler, TpeSampler};
    pub use crate::space::{Point, SearchSpace};
    pub use crate::study::{Study, StudyBuilder};
    pub use crate::trial::Trial;
    pub use crate::visualization::{generate_curve_report, generate_html_report};
}
