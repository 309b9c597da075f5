//! Tree-structured Parzen Estimator (TPE) sampling.
//!
//! TPE is a sequential model-based optimization algorithm that models
//! p(x | y) instead of p(y | x). It splits completed trials into "good" and
//! "bad" groups, fits a Parzen estimator to each, and proposes points by
//! maximizing the l(x)/g(x) ratio, an approximation of Expected Improvement.
//!
//! # Gamma strategies
//!
//! | Strategy | Good trials | Default |
//! |----------|-------------|---------|
//! | [`HyperoptGamma`] | `min(ceil(gamma * sqrt(n)), max_good)` | yes, gamma = 0.25, max = 25 |
//! | [`FixedGamma`] | `ceil(gamma * n)` | gamma = 0.25 |
//!
//! ```
//! use fmin::Study;
//! use fmin::sampler::tpe::TpeSampler;
//!
//! let study = Study::with_sampler(TpeSampler::new());
//! ```

mod gamma;
mod sampler;

pub use gamma::{FixedGamma, GammaStrategy, HyperoptGamma};
pub use sampler::{TpeSampler, TpeSamplerBuilder};
