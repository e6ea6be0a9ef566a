//! Grouped multi-operation bars (`cmp_ops/`)
//!
//! One shared chart per metric spanning every operation with a stored
//! artifact. Within an operation's cluster there is one bar per
//! (mode, anchor point) combination: same-mode bars share a color, the
//! second anchor point is drawn hatched, and every bar is annotated with its
//! scaled height. This is the only chart that reads multiple tensors.

use crate::scale::Scale;
use crate::{chart_dir, chart_err, mode_color, CMP_OPS_DIR};
use crate::{
    AXIS_LABEL_FONT_SIZE, DATA_LABEL_FONT_SIZE, LEGEND_FONT_SIZE, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::BTreeMap;
use std::path::Path;
use syncsweep_core::{Metric, Operation, PerformanceTensor, Result, SyncMode};
use tracing::{info, warn};

/// Default anchor points highlighted in the comparison
pub const DEFAULT_ANCHORS: [(usize, usize); 2] = [(8, 2), (8, 9)];

/// Fraction of each operation cluster occupied by bars
const GROUP_WIDTH: f64 = 0.8;
/// Diagonal stripe count for hatched bars
const HATCH_STRIPES: usize = 6;
/// Extra Y headroom above the tallest scaled bar
const Y_HEADROOM: f64 = 1.0;

/// One bar of the grouped chart
#[derive(Debug, Clone, Copy)]
struct GroupedBar {
    x_left: f64,
    x_right: f64,
    scaled: f64,
    mode: SyncMode,
    hatched: bool,
}

/// Render the grouped multi-operation comparison for one metric
pub fn plot_operation_comparison(
    tensors: &BTreeMap<Operation, PerformanceTensor>,
    metric: Metric,
    anchors: [(usize, usize); 2],
    scale: Scale,
    out_root: &Path,
) -> Result<()> {
    if tensors.is_empty() {
        warn!("no operation artifacts to compare, skipping grouped chart");
        return Ok(());
    }
    for tensor in tensors.values() {
        tensor.validate_shape()?;
    }

    let operations: Vec<Operation> = tensors.keys().copied().collect();
    let num_ops = operations.len();
    let bars_per_cluster = SyncMode::COUNT * anchors.len();
    let bar_width = GROUP_WIDTH / bars_per_cluster as f64;

    let mut bars: Vec<GroupedBar> = Vec::new();
    for (op_index, operation) in operations.iter().enumerate() {
        let tensor = &tensors[operation];
        for mode in SyncMode::ALL {
            for (anchor_index, &(readers, writers)) in anchors.iter().enumerate() {
                if readers >= tensor.max_readers() || writers >= tensor.max_writers() {
                    warn!(
                        "anchor ({}, {}) outside {} tensor shape {:?}, skipping",
                        readers,
                        writers,
                        operation,
                        tensor.shape()
                    );
                    continue;
                }
                let raw = tensor.get(mode, readers, writers, metric)?;
                if !raw.is_finite() {
                    continue;
                }
                let slot = mode.index() * anchors.len() + anchor_index;
                let x_offset =
                    (slot as f64 - (bars_per_cluster as f64 - 1.0) / 2.0) * bar_width;
                let x_center = op_index as f64 + x_offset;
                bars.push(GroupedBar {
                    x_left: x_center - bar_width / 2.0 + 0.005,
                    x_right: x_center + bar_width / 2.0 - 0.005,
                    scaled: scale.apply(raw),
                    mode,
                    hatched: anchor_index > 0,
                });
            }
        }
    }

    let y_max = bars.iter().map(|b| b.scaled).fold(0.0_f64, f64::max) + Y_HEADROOM;
    let y_min = bars.iter().map(|b| b.scaled).fold(0.0_f64, f64::min);

    let path = dir_path(out_root, metric)?;
    let root = SVGBackend::new(&path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let [(r0, w0), (r1, w1)] = anchors;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{}{} performance by operation; ({}, {}) solid vs ({}, {}) hatched",
                scale.title_prefix(),
                metric.label(),
                r0,
                w0,
                r1,
                w1
            ),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(num_ops as f64 - 0.5), y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_ops)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < operations.len() && (x - idx as f64).abs() < 0.3 {
                operations[idx].stem().to_string()
            } else {
                String::new()
            }
        })
        .y_desc(scale.axis_desc())
        .x_desc("Benchmarked operation")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    for bar in &bars {
        let color = mode_color(bar.mode);
        if bar.hatched {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(bar.x_left, 0.0), (bar.x_right, bar.scaled)],
                    color.stroke_width(1),
                )))
                .map_err(chart_err)?;
            chart
                .draw_series(hatch_stripes(bar, color).into_iter())
                .map_err(chart_err)?;
        } else {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(bar.x_left, 0.0), (bar.x_right, bar.scaled)],
                    color.filled(),
                )))
                .map_err(chart_err)?;
        }

        let x_center = (bar.x_left + bar.x_right) / 2.0;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{:.2}", bar.scaled),
                (x_center, bar.scaled.max(0.0) + 0.05),
                ("sans-serif", DATA_LABEL_FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))
            .map_err(chart_err)?;
    }

    // mode legend (anchor styling is spelled out in the caption)
    for mode in SyncMode::ALL {
        let color = mode_color(mode);
        chart
            .draw_series(std::iter::once(Circle::new(
                (num_ops as f64 - 1.0, y_max),
                0,
                color.filled(),
            )))
            .map_err(chart_err)?
            .label(mode.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("saved figure to {:?}", path);
    Ok(())
}

fn dir_path(out_root: &Path, metric: Metric) -> Result<std::path::PathBuf> {
    let dir = chart_dir(out_root, CMP_OPS_DIR)?;
    Ok(dir.join(format!("cmp_ops_{}.svg", metric.label().to_lowercase())))
}

/// Diagonal stripe segments clipped to a bar's extent
fn hatch_stripes(bar: &GroupedBar, color: RGBColor) -> Vec<PathElement<(f64, f64)>> {
    let bottom = bar.scaled.min(0.0);
    let top = bar.scaled.max(0.0);
    let height = top - bottom;
    if height <= 0.0 {
        return Vec::new();
    }
    let step = height / HATCH_STRIPES as f64;
    (0..HATCH_STRIPES)
        .map(|i| {
            let y_start = bottom + step * i as f64;
            let y_end = (y_start + step).min(top);
            PathElement::new(
                vec![(bar.x_left, y_start), (bar.x_right, y_end)],
                color.stroke_width(1),
            )
        })
        .collect()
}
