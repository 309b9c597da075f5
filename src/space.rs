//! Named, ordered search spaces and the points drawn from them.
//!
//! A [`SearchSpace`] is an ordered list of dimensions, each a
//! [`FloatParam`] under a unique name. Drawing a trial's values through the
//! space yields a [`Point`], which keeps the declared order.
//!
//! ```
//! use fmin::space::SearchSpace;
//!
//! let space = SearchSpace::new()
//!     .uniform("x", -5.0, 5.0)?
//!     .loguniform("lr", 1e-4, 1e-1)?
//!     .quniform("depth", 1.0, 10.0, 1.0)?;
//!
//! assert_eq!(space.names(), vec!["x", "lr", "depth"]);
//! # Ok::<(), fmin::Error>(())
//! ```

use core::fmt;

use crate::error::{Error, Result};
use crate::parameter::FloatParam;
use crate::sampler::CompletedTrial;
use crate::trial::Trial;

/// An ordered set of named, bounded dimensions.
#[derive(Clone, Debug, Default)]
pub struct SearchSpace {
    dims: Vec<(String, FloatParam)>,
}

impl SearchSpace {
    /// Creates an empty space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dimension sampled uniformly from `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` for inverted or non-finite bounds,
    /// `Error::EmptyDimensionName` for an empty name, and
    /// `Error::DuplicateDimension` if `name` is already declared.
    pub fn uniform(self, name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        self.push(name.into(), FloatParam::new(low, high))
    }

    /// Adds a dimension sampled uniformly in log space between `low` and
    /// `high`, both given on the natural scale.
    ///
    /// # Errors
    ///
    /// As [`uniform`](Self::uniform), plus `Error::InvalidLogBounds` if
    /// `low` is not positive.
    pub fn loguniform(self, name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        self.push(name.into(), FloatParam::new(low, high).log_scale())
    }

    /// Adds a dimension restricted to `low + k * q` within `[low, high]`.
    ///
    /// # Errors
    ///
    /// As [`uniform`](Self::uniform), plus `Error::InvalidStep` if `q` is
    /// not positive.
    pub fn quniform(self, name: impl Into<String>, low: f64, high: f64, q: f64) -> Result<Self> {
        self.push(name.into(), FloatParam::new(low, high).step(q))
    }

    fn push(mut self, name: String, param: FloatParam) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyDimensionName);
        }
        if self.dims.iter().any(|(n, _)| *n == name) {
            return Err(Error::DuplicateDimension(name));
        }
        let param = param.name(name.clone());
        param.validate()?;
        self.dims.push((name, param));
        Ok(self)
    }

    /// Dimension names in declared order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.dims.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Returns `true` if no dimension has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// The parameters backing each dimension, in declared order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &FloatParam)> {
        self.dims.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Looks up the parameter for `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownDimension` if `name` is not declared.
    pub fn param(&self, name: &str) -> Result<&FloatParam> {
        self.dims
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
            .ok_or_else(|| Error::UnknownDimension(name.to_string()))
    }

    /// The point at the centre of every interval.
    ///
    /// Log dimensions use the geometric midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point {
            names: self.dims.iter().map(|(n, _)| n.clone()).collect(),
            values: self
                .dims
                .iter()
                .map(|(_, p)| p.distribution().midpoint())
                .collect(),
        }
    }

    /// Suggests a value for every dimension on `trial`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySpace` for a space without dimensions, or any
    /// error from [`Trial::suggest_param`].
    pub fn suggest(&self, trial: &mut Trial) -> Result<Point> {
        if self.dims.is_empty() {
            return Err(Error::EmptySpace);
        }
        let values = self
            .dims
            .iter()
            .map(|(_, p)| p.suggest(trial))
            .collect::<Result<Vec<_>>>()?;
        Ok(Point {
            names: self.dims.iter().map(|(n, _)| n.clone()).collect(),
            values,
        })
    }

    /// Reads this space's values back out of a completed trial.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownDimension` if the trial did not sample one of
    /// the dimensions.
    pub fn point_of(&self, trial: &CompletedTrial) -> Result<Point> {
        let values = self
            .dims
            .iter()
            .map(|(n, p)| {
                trial
                    .get(p)
                    .ok_or_else(|| Error::UnknownDimension(n.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Point {
            names: self.dims.iter().map(|(n, _)| n.clone()).collect(),
            values,
        })
    }
}

/// A named coordinate in a [`SearchSpace`], in declared dimension order.
///
/// Displays as `{x_1: v1, x_2: v2, ...}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    names: Vec<String>,
    values: Vec<f64>,
}

impl Point {
    /// The value of dimension `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownDimension` if `name` is not part of the point.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
            .ok_or_else(|| Error::UnknownDimension(name.to_string()))
    }

    /// Values in declared dimension order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Values in declared dimension order, borrowed.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dimension names in declared order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterates `(name, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` for a point with no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
