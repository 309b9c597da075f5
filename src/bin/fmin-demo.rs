//! Minimizes the two demonstration functions with TPE, prints the best
//! points, and plots the single-variable curve.

use anyhow::Context;
use fmin::functions::{
    SINGLE_VARIABLE_PLOT, four_variable, four_variable_space, single_variable,
    single_variable_space,
};
use fmin::grid::Curve;
use fmin::{Algo, fmin, generate_curve_report};
use tracing_subscriber::EnvFilter;

const MAX_EVALS: usize = 500;
const CURVE_SAMPLES: usize = 1000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let space = four_variable_space()?;
    let best = fmin(four_variable, &space, Algo::Tpe, MAX_EVALS)
        .context("minimizing the four-variable function")?;
    println!("{best}");
    let x_mins = best.to_vec();
    println!("my_fcn(x_mins) = {}", four_variable(&x_mins));

    let space = single_variable_space()?;
    let best = fmin(|x: &[f64]| single_variable(x[0]), &space, Algo::Tpe, MAX_EVALS)
        .context("minimizing the single-variable function")?;
    println!("{best}");
    let x_min = best.get("x")?;
    let y_min = single_variable(x_min);
    println!("my_fcn(x_mins) = {y_min}");

    let curve = Curve::sample(single_variable, -100.0, 100.0, CURVE_SAMPLES);
    generate_curve_report(&curve, (x_min, y_min), SINGLE_VARIABLE_PLOT)
        .with_context(|| format!("writing {SINGLE_VARIABLE_PLOT}"))?;
    println!("plot written to {SINGLE_VARIABLE_PLOT}");

    Ok(())
}
