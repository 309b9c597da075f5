//! Evenly spaced grids and sampled curves for plotting.

/// Returns `n` evenly spaced values from `low` to `high`, both inclusive.
///
/// The last value is exactly `high`. `n == 1` yields `[low]`; `n == 0`
/// yields an empty vector.
///
/// ```
/// use fmin::grid::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let range = high - low;
            let last = n - 1;
            (0..n)
                .map(|i| {
                    if i == last {
                        high
                    } else {
                        low + (i as f64 * range) / last as f64
                    }
                })
                .collect()
        }
    }
}

/// A function sampled on a grid, with linear interpolation between samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    /// Grid coordinates, increasing.
    pub xs: Vec<f64>,
    /// Function values at `xs`.
    pub ys: Vec<f64>,
}

impl Curve {
    /// Evaluates `f` at `n` evenly spaced points over `[low, high]`.
    ///
    /// ```
    /// use fmin::grid::Curve;
    ///
    /// let curve = Curve::sample(|x| x * x, -1.0, 1.0, 3);
    /// assert_eq!(curve.ys, vec![1.0, 0.0, 1.0]);
    /// ```
    pub fn sample<F>(f: F, low: f64, high: f64, n: usize) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let xs = linspace(low, high, n);
        let ys = xs.iter().map(|&x| f(x)).collect();
        Self { xs, ys }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Piecewise-linear value at `x`.
    ///
    /// Returns `None` outside `[xs[0], xs[last]]`, for an empty curve, when
    /// `xs` and `ys` differ in length, or when the grid ends are not finite.
    ///
    /// ```
    /// use fmin::grid::Curve;
    ///
    /// let curve = Curve::sample(|x| 2.0 * x, 0.0, 10.0, 11);
    /// assert_eq!(curve.interpolate(2.5), Some(5.0));
    /// assert_eq!(curve.interpolate(11.0), None);
    /// ```
    #[must_use]
    pub fn interpolate(&self, x: f64) -> Option<f64> {
        if self.xs.len() != self.ys.len() {
            return None;
        }
        let first = *self.xs.first()?;
        let last = *self.xs.last()?;
        if !first.is_finite() || !last.is_finite() || x.is_nan() || x < first || x > last {
            return None;
        }
        // index of the first grid point >= x
        let hi = self.xs.partition_point(|&xi| xi < x);
        let x1 = *self.xs.get(hi)?;
        let y1 = *self.ys.get(hi)?;
        if x1 <= x {
            return Some(y1);
        }
        let lo = hi.checked_sub(1)?;
        let (x0, y0) = (*self.xs.get(lo)?, *self.ys.get(lo)?);
        let t = (x - x0) / (x1 - x0);
        Some(y0 + t * (y1 - y0))
    }

    /// The sample with the lowest finite value, as `(x, y)`.
    #[must_use]
    pub fn argmin(&self) -> Option<(f64, f64)> {
        self.xs
            .iter()
            .zip(&self.ys)
            .filter(|(_, y)| y.is_finite())
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, &y)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints_exactly() {
        let xs = linspace(-100.0, 100.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], -100.0);
        assert_eq!(xs[999], 100.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_last_point_is_exact_for_awkward_ranges() {
        let xs = linspace(0.1, 0.7, 7);
        assert_eq!(xs[6], 0.7);
    }

    #[test]
    fn interpolate_at_grid_points_returns_samples() {
        let curve = Curve::sample(f64::sin, 0.0, 3.0, 31);
        for (x, y) in curve.xs.iter().zip(&curve.ys) {
            assert_eq!(curve.interpolate(*x), Some(*y));
        }
    }

    #[test]
    fn interpolate_single_sample() {
        let curve = Curve::sample(|x| x + 1.0, 2.0, 5.0, 1);
        assert_eq!(curve.interpolate(2.0), Some(3.0));
        assert_eq!(curve.interpolate(2.5), None);
    }

    #[test]
    fn interpolate_empty_curve() {
        let curve = Curve::sample(|x| x, 0.0, 1.0, 0);
        assert!(curve.is_empty());
        assert_eq!(curve.interpolate(0.5), None);
    }

    #[test]
    fn interpolate_rejects_mismatched_lengths() {
        let curve = Curve {
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![5.0],
        };
        assert_eq!(curve.interpolate(1.5), None);
        assert_eq!(curve.interpolate(0.0), None);
    }

    #[test]
    fn interpolate_rejects_non_finite_grid() {
        let curve = Curve::sample(|x| x, f64::NAN, 1.0, 4);
        assert_eq!(curve.interpolate(0.5), None);

        let curve = Curve::sample(|x| x, 0.0, f64::INFINITY, 4);
        assert_eq!(curve.interpolate(0.5), None);
    }

    #[test]
    fn argmin_skips_non_finite() {
        let curve = Curve {
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![f64::NAN, 3.0, 1.0],
        };
        assert_eq!(curve.argmin(), Some((2.0, 1.0)));
    }
}
