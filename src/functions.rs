//! The two demonstration objectives and their search spaces.

use crate::error::Result;
use crate::space::SearchSpace;

/// Output path of the single-variable curve plot written by the demo.
pub const SINGLE_VARIABLE_PLOT: &str = "single_variable.html";

/// `sin(x1 * (x2^2 - x3) / x4) * cos(x1)`.
///
/// Expects at least four coordinates; extra ones are ignored.
///
/// ```
/// use fmin::functions::four_variable;
///
/// let y = four_variable(&[0.0, 1.0, 2.0, -50.0]);
/// assert_eq!(y, 0.0);
/// ```
#[must_use]
pub fn four_variable(x: &[f64]) -> f64 {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    (x1 * (x2.powi(2) - x3) / x4).sin() * x1.cos()
}

/// `sin(x * (x^2 - x) / x) * cos(x)`.
///
/// Undefined at `x = 0`, where it returns NaN.
///
/// ```
/// use fmin::functions::single_variable;
///
/// assert!(single_variable(0.0).is_nan());
/// assert!(single_variable(1.5).is_finite());
/// ```
#[must_use]
pub fn single_variable(x: f64) -> f64 {
    (x * (x.powi(2) - x) / x).sin() * x.cos()
}

/// `x_1` in (-100, 100), `x_2` in (-200, 100), `x_3` in (0, 50),
/// `x_4` in (-100, -20).
///
/// # Errors
///
/// Never fails for these constant bounds; the `Result` comes from the
/// space builder.
pub fn four_variable_space() -> Result<SearchSpace> {
    SearchSpace::new()
        .uniform("x_1", -100.0, 100.0)?
        .uniform("x_2", -200.0, 100.0)?
        .uniform("x_3", 0.0, 50.0)?
        .uniform("x_4", -100.0, -20.0)
}

/// `x` in (-100, 100).
///
/// # Errors
///
/// Never fails for these constant bounds; the `Result` comes from the
/// space builder.
pub fn single_variable_space() -> Result<SearchSpace> {
    SearchSpace::new().uniform("x", -100.0, 100.0)
}
