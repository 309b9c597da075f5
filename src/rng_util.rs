use crate::distribution::FloatDistribution;

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Standard normal variate via the Box-Muller transform.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    // 1 - u keeps the logarithm finite
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (core::f64::consts::TAU * u2).cos()
}

/// Draws uniformly from a distribution, honouring log scale and step.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn sample_uniform(rng: &mut fastrand::Rng, d: &FloatDistribution) -> f64 {
    if let Some(step) = d.step {
        let n_steps = ((d.high - d.low) / step).floor() as i64;
        let k = rng.i64(0..=n_steps);
        return (d.low + (k as f64) * step).min(d.high);
    }
    let (low, high) = d.internal_bounds();
    d.from_internal(f64_range(rng, low, high))
}
