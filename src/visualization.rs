//! HTML report generation.
//!
//! Generate self-contained HTML files with embedded
//! [Plotly.js](https://plotly.com/javascript/) charts for offline viewing.
//!
//! | Report | Charts |
//! |---|---|
//! | [`generate_curve_report`] | A sampled 1-D function with the reported minimum as a red marker |
//! | [`generate_html_report`] | Loss history with best-so-far line, one slice plot per dimension |
//!
//! ```no_run
//! use fmin::grid::Curve;
//! use fmin::generate_curve_report;
//!
//! let curve = Curve::sample(|x| (x - 1.0).powi(2), -5.0, 5.0, 200);
//! generate_curve_report(&curve, (1.0, 0.0), "curve.html").unwrap();
//! ```
//!
//! An internet connection is needed on first load to fetch `Plotly.js`
//! from a CDN.

use core::fmt::Write as _;
use std::collections::BTreeMap;
use std::path::Path;

use crate::grid::Curve;
use crate::parameter::ParamId;
use crate::sampler::CompletedTrial;
use crate::study::Study;

/// Write a plot of `curve` with `minimum` overlaid as a red marker.
///
/// `minimum` is the `(x, f(x))` pair reported by the optimizer. The curve
/// is drawn as straight segments between samples.
///
/// # Errors
///
/// Return an I/O error if the file cannot be created or written.
pub fn generate_curve_report(
    curve: &Curve,
    minimum: (f64, f64),
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut html = String::with_capacity(4096 + curve.len() * 48);
    write_page_start(
        &mut html,
        "Single Variable Minimization",
        &format!("{} samples", curve.len()),
    );

    html.push_str("<div class=\"chart\"><div class=\"chart-title\">Objective Curve</div><div id=\"curve\"></div></div>\n");
    write_curve_chart(&mut html, curve, minimum);

    html.push_str("</body>\n</html>\n");
    std::fs::write(path, html)
}

/// Generate an HTML report for a study.
///
/// Includes the loss history with a best-so-far line and one slice plot per
/// sampled parameter. Charts without data are omitted.
///
/// # Errors
///
/// Return an I/O error if the file cannot be created or written.
pub fn generate_html_report(study: &Study, path: impl AsRef<Path>) -> std::io::Result<()> {
    let trials = study.trials();
    std::fs::write(path, build_study_html(&trials))
}

fn build_study_html(trials: &[CompletedTrial]) -> String {
    let mut html = String::with_capacity(8192);
    write_page_start(
        &mut html,
        "Optimization Report",
        &format!("Minimize &middot; {} trials", trials.len()),
    );

    let param_info = collect_param_labels(trials);

    html.push_str("<div class=\"chart\"><div class=\"chart-title\">Optimization History</div><div id=\"history\"></div></div>\n");
    write_history_chart(&mut html, trials);

    if !param_info.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Slice Plots</div><div id=\"slices\"></div></div>\n");
        write_slice_charts(&mut html, trials, &param_info);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_page_start(html: &mut String, title: &str, subtitle: &str) {
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
  .chart-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
"#,
    );
}

/// Parameter labels across all trials, ordered by parameter id.
fn collect_param_labels(trials: &[CompletedTrial]) -> BTreeMap<ParamId, String> {
    let mut info = BTreeMap::new();
    for trial in trials {
        for &id in trial.params.keys() {
            info.entry(id).or_insert_with(|| {
                trial
                    .param_labels
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| id.to_string())
            });
        }
    }
    info
}

// ---------------------------------------------------------------------------
// Chart generators
// ---------------------------------------------------------------------------

fn write_curve_chart(html: &mut String, curve: &Curve, (x_min, y_min): (f64, f64)) {
    let _ = write!(
        html,
        r##"<script>
Plotly.newPlot("curve", [
  {{ x: {xs}, y: {ys}, mode: "lines", name: "f(x)", type: "scatter",
     line: {{ color: "#3498db", width: 1.5, shape: "linear" }} }},
  {{ x: [{x}], y: [{y}], mode: "markers", name: "Minimum", type: "scatter",
     marker: {{ color: "red", size: 12 }} }}
], {{ xaxis: {{ title: "x" }}, yaxis: {{ title: "f(x)" }},
     margin: {{ t: 10 }}, legend: {{ x: 1, xanchor: "right", y: 1 }} }},
   {{ responsive: true }});
</script>
"##,
        xs = js_array(&curve.xs),
        ys = js_array(&curve.ys),
        x = js_number(x_min),
        y = js_number(y_min),
    );
}

fn write_history_chart(html: &mut String, trials: &[CompletedTrial]) {
    let Some(first) = trials.first() else {
        return;
    };

    let mut ids = Vec::with_capacity(trials.len());
    let mut vals = Vec::with_capacity(trials.len());
    let mut best_vals = Vec::with_capacity(trials.len());
    let mut best = first.value;
    for t in trials {
        ids.push(t.id);
        vals.push(t.value);
        best = best.min(t.value);
        best_vals.push(best);
    }

    let _ = write!(
        html,
        r##"<script>
Plotly.newPlot("history", [
  {{ x: {ids:?}, y: {vals}, mode: "markers", name: "Loss", type: "scatter",
     marker: {{ color: "#3498db", size: 6 }} }},
  {{ x: {ids:?}, y: {best_vals}, mode: "lines", name: "Best so far", type: "scatter",
     line: {{ color: "#e74c3c", width: 2 }} }}
], {{ xaxis: {{ title: "Trial" }}, yaxis: {{ title: "Loss" }},
     margin: {{ t: 10 }}, legend: {{ x: 1, xanchor: "right", y: 1 }} }},
   {{ responsive: true }});
</script>
"##,
        vals = js_array(&vals),
        best_vals = js_array(&best_vals),
    );
}

fn write_slice_charts(
    html: &mut String,
    trials: &[CompletedTrial],
    param_info: &BTreeMap<ParamId, String>,
) {
    if trials.is_empty() {
        return;
    }

    let n_params = param_info.len();
    let cols = n_params.min(2);
    let rows = n_params.div_ceil(cols);

    let mut subplot_titles = Vec::with_capacity(n_params);
    let mut traces = String::new();
    for (i, (id, label)) in param_info.iter().enumerate() {
        subplot_titles.push(format!("\"{}\"", escape_js(label)));

        let (x_vals, y_vals): (Vec<f64>, Vec<f64>) = trials
            .iter()
            .filter_map(|t| t.params.get(id).map(|&v| (v, t.value)))
            .unzip();

        let axis = if i == 0 {
            String::new()
        } else {
            (i + 1).to_string()
        };
        let _ = write!(
            traces,
            r##"{{ x: {xs}, y: {ys}, mode: "markers", type: "scatter",
               xaxis: "x{axis}", yaxis: "y{axis}",
               marker: {{ color: "#3498db", size: 5 }}, showlegend: false }},"##,
            xs = js_array(&x_vals),
            ys = js_array(&y_vals),
        );
    }

    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot("slices", [{traces}],
  {{ grid: {{ rows: {rows}, columns: {cols}, pattern: "independent" }},
     annotations: [{annotations}],
     margin: {{ t: 30 }}, showlegend: false }},
  {{ responsive: true }});
</script>
"#,
        annotations = build_subplot_annotations(&subplot_titles, rows, cols),
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Formats a number as a JavaScript literal; non-finite values become `null`
/// so Plotly leaves a gap.
fn js_number(v: f64) -> String {
    if v.is_finite() {
        format!("{v:?}")
    } else {
        "null".to_string()
    }
}

fn js_array(vals: &[f64]) -> String {
    let items: Vec<String> = vals.iter().map(|&v| js_number(v)).collect();
    format!("[{}]", items.join(", "))
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Build Plotly annotation objects to act as subplot titles.
#[allow(clippy::cast_precision_loss)]
fn build_subplot_annotations(titles: &[String], rows: usize, cols: usize) -> String {
    let mut anns = Vec::with_capacity(titles.len());
    for (i, title) in titles.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;
        let x = if cols == 1 {
            0.5
        } else {
            col as f64 / (cols as f64 - 1.0)
        };
        let y = 1.0 - row as f64 / (rows as f64).max(1.0) + 0.02;
        anns.push(format!(
            r#"{{ text: {title}, x: {x:.3}, y: {y:.3}, xref: "paper", yref: "paper",
               showarrow: false, font: {{ size: 12 }} }}"#,
        ));
    }
    anns.join(",")
}
