//! Curve plot artifacts
//!
//! Pure rendering: each finalized curve becomes one 2-D line-plot PNG under
//! the output root. No numeric logic lives here; failures are backend or
//! I/O errors and propagate to the caller.

use std::fs;
use std::path::Path;

use plotters::prelude::*;

use crate::metrics::EffPurCurves;
use crate::{Error, Result};

/// Plot artifact dimensions in pixels.
const PLOT_SIZE: (u32, u32) = (1024, 1024);

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Axis range with a small margin; degenerate spans are widened so the
/// chart remains drawable.
fn padded_range(values: &[f64]) -> std::ops::Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span < 1e-9 {
        (min - 0.5)..(max + 0.5)
    } else {
        (min - 0.05 * span)..(max + 0.05 * span)
    }
}

/// Render one named curve as a PNG line plot.
///
/// # Errors
///
/// [`Error::Render`] for empty or length-mismatched data and for any
/// backend failure (including the underlying file write).
pub fn render_curve(
    x: &[f64],
    y: &[f64],
    x_label: &str,
    y_label: &str,
    title: &str,
    path: &Path,
) -> Result<()> {
    if x.is_empty() || x.len() != y.len() {
        return Err(Error::Render(format!(
            "cannot plot {title:?}: {} x values against {} y values",
            x.len(),
            y.len()
        )));
    }

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 36))
        .margin(24)
        .x_label_area_size(56)
        .y_label_area_size(56)
        .build_cartesian_2d(padded_range(x), padded_range(y))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)),
            &BLUE,
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Persist the three telemetry plots under `output_dir`.
///
/// Writes `metrics_eff_plot.png` (efficiency vs. cut), `metrics_pur_plot.png`
/// (purity vs. cut), and `metrics_auc_plot.png` (purity vs. efficiency),
/// creating `output_dir` if absent.
///
/// # Errors
///
/// [`Error::Io`] if the directory cannot be created, otherwise any
/// [`Error::Render`] from the individual plots.
pub fn save_metrics(curves: &EffPurCurves, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let (x, y) = curves.eff_plot();
    render_curve(
        x,
        y,
        "Cut",
        "Efficiency",
        "Efficiency vs. Cut",
        &output_dir.join("metrics_eff_plot.png"),
    )?;

    let (x, y) = curves.pur_plot();
    render_curve(
        x,
        y,
        "Cut",
        "Purity",
        "Purity vs. Cut",
        &output_dir.join("metrics_pur_plot.png"),
    )?;

    let (x, y) = curves.auc_plot();
    render_curve(
        x,
        y,
        "Efficiency",
        "Purity",
        "Purity vs. Efficiency",
        &output_dir.join("metrics_auc_plot.png"),
    )?;

    Ok(())
}
