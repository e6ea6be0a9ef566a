//! Single-point cross-mode bars (`cmp_diff/`)
//!
//! For one fixed (readers, writers) point, one bar chart per metric with a
//! bar per synchronization mode. Bar heights go through the caller's scale
//! (log10 by default); the annotation above each bar is the *linear* ratio
//! of the mode's raw latency to the baseline mode's raw latency at the same
//! point, so the baseline always reads exactly `1.000x`.

use crate::scale::Scale;
use crate::{chart_dir, chart_err, CMP_POINT_DIR};
use crate::{AXIS_LABEL_FONT_SIZE, DATA_LABEL_FONT_SIZE, TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use syncsweep_core::{Metric, PerformanceTensor, Result, SyncMode};
use tracing::{info, warn};

/// Bar width in mode-index units
const BAR_WIDTH: f64 = 0.4;
/// Extra Y headroom above the tallest scaled bar
const Y_HEADROOM: f64 = 1.0;
/// Gap between a bar top and its annotation, in scaled units
const LABEL_OFFSET: f64 = 0.1;

/// One mode's bar at the fixed point
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    mode: SyncMode,
    raw: f64,
    scaled: f64,
}

/// Render both per-metric bar charts for one (readers, writers) point
pub fn plot_point_comparison(
    tensor: &PerformanceTensor,
    readers: usize,
    writers: usize,
    modes: &[SyncMode],
    scale: Scale,
    out_root: &Path,
) -> Result<()> {
    tensor.validate_shape()?;
    let dir = chart_dir(out_root, CMP_POINT_DIR)?;
    for metric in Metric::ALL {
        plot_metric(tensor, readers, writers, modes, metric, scale, &dir)?;
    }
    Ok(())
}

/// Collect the finite bars for one metric at the fixed point
fn collect_bars(
    tensor: &PerformanceTensor,
    readers: usize,
    writers: usize,
    modes: &[SyncMode],
    metric: Metric,
    scale: Scale,
) -> Result<Vec<Bar>> {
    let mut bars = Vec::with_capacity(modes.len());
    for &mode in modes {
        let raw = tensor.get(mode, readers, writers, metric)?;
        if raw.is_finite() {
            bars.push(Bar {
                mode,
                raw,
                scaled: scale.apply(raw),
            });
        } else {
            warn!(
                "no {} measurement for {} at ({}, {}), skipping its bar",
                metric, mode, readers, writers
            );
        }
    }
    Ok(bars)
}

/// The speedup annotation for one bar
fn format_speedup(raw: f64, baseline_raw: f64) -> String {
    format!("{:.3}x", raw / baseline_raw)
}

fn plot_metric(
    tensor: &PerformanceTensor,
    readers: usize,
    writers: usize,
    modes: &[SyncMode],
    metric: Metric,
    scale: Scale,
    dir: &Path,
) -> Result<()> {
    let bars = collect_bars(tensor, readers, writers, modes, metric, scale)?;
    let baseline_raw = bars
        .iter()
        .find(|bar| bar.mode == SyncMode::BASELINE)
        .map(|bar| bar.raw);
    if baseline_raw.is_none() {
        warn!(
            "no {} baseline ({}) measurement at ({}, {}); bars drawn without speedup annotations",
            metric,
            SyncMode::BASELINE,
            readers,
            writers
        );
    }

    let y_max = bars
        .iter()
        .map(|bar| bar.scaled)
        .fold(0.0_f64, f64::max)
        + Y_HEADROOM;
    let y_min = bars
        .iter()
        .map(|bar| bar.scaled)
        .fold(0.0_f64, f64::min);

    let labels: Vec<&str> = modes.iter().map(|mode| mode.name()).collect();
    let num_modes = modes.len().max(1);

    let path = dir.join(format!(
        "cmp_{}_{}_{}.svg",
        metric.label().to_lowercase(),
        readers,
        writers
    ));
    let root = SVGBackend::new(&path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{} performance across modes for {} readers & {} writers",
                metric.label(),
                readers,
                writers
            ),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(num_modes as f64 - 0.5), y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_modes)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < labels.len() && (x - idx as f64).abs() < 0.3 {
                labels[idx].to_string()
            } else {
                String::new()
            }
        })
        .y_desc(scale.axis_desc())
        .x_desc("Type of concurrency control/synchronization method")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    for bar in &bars {
        let Some(position) = modes.iter().position(|&m| m == bar.mode) else {
            continue;
        };
        let x_center = position as f64;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [
                    (x_center - BAR_WIDTH / 2.0, 0.0),
                    (x_center + BAR_WIDTH / 2.0, bar.scaled),
                ],
                RED.filled(),
            )))
            .map_err(chart_err)?;

        if let Some(baseline_raw) = baseline_raw {
            chart
                .draw_series(std::iter::once(Text::new(
                    format_speedup(bar.raw, baseline_raw),
                    (x_center, bar.scaled + LABEL_OFFSET),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))
                .map_err(chart_err)?;
        }
    }

    root.present().map_err(chart_err)?;
    info!("saved figure to {:?}", path);
    Ok(())
}
