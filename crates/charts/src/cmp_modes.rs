//! Cross-mode latency lines (`cmp_modes/`)
//!
//! Four charts per tensor: each (y-axis metric, x-axis role) combination in
//! {(Read, readers), (Write, readers), (Write, writers), (Read, writers)},
//! with one line per synchronization mode and the other role's count held
//! fixed. Y values go through the caller's scale (log10 by default).

use crate::scale::Scale;
use crate::series::{finite_line, Role};
use crate::{chart_dir, chart_err, mode_color, CMP_MODES_DIR};
use crate::{AXIS_LABEL_FONT_SIZE, LEGEND_FONT_SIZE, TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use plotters::prelude::*;
use std::path::Path;
use syncsweep_core::{Metric, PerformanceTensor, Result, SyncMode};
use tracing::info;

/// Default fixed count for the role that is not on the X axis
pub const DEFAULT_FIXED_OTHER: usize = 2;

/// Render all four cross-mode comparison charts
pub fn plot_mode_comparison(
    tensor: &PerformanceTensor,
    scale: Scale,
    fixed_other: usize,
    out_root: &Path,
) -> Result<()> {
    tensor.validate_shape()?;
    let dir = chart_dir(out_root, CMP_MODES_DIR)?;
    plot_combination(tensor, Metric::Read, Role::Readers, scale, fixed_other, &dir)?;
    plot_combination(tensor, Metric::Write, Role::Readers, scale, fixed_other, &dir)?;
    plot_combination(tensor, Metric::Write, Role::Writers, scale, fixed_other, &dir)?;
    plot_combination(tensor, Metric::Read, Role::Writers, scale, fixed_other, &dir)?;
    Ok(())
}

/// One chart: `metric` latency per mode against `role`'s thread count
fn plot_combination(
    tensor: &PerformanceTensor,
    metric: Metric,
    role: Role,
    scale: Scale,
    fixed_other: usize,
    dir: &Path,
) -> Result<()> {
    let mut lines = Vec::new();
    for mode in SyncMode::ALL {
        let line = finite_line(tensor, mode, role, fixed_other, metric)?;
        let scaled: Vec<(f64, f64)> = line
            .iter()
            .map(|&(x, v)| (x as f64, scale.apply(v)))
            .collect();
        lines.push((mode, scaled));
    }

    let values: Vec<f64> = lines
        .iter()
        .flat_map(|(_, line)| line.iter().map(|(_, v)| *v))
        .collect();
    let (y_min, y_max) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        (min - 0.5, max + 0.5)
    };
    let x_max = role.axis_len(tensor).saturating_sub(1).max(1) as f64;

    let path = dir.join(format!(
        "cmp_{}_{}_{}.svg",
        metric.label(),
        role.label(),
        fixed_other
    ));
    let root = SVGBackend::new(&path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{}Cycles per {} with {} {} threads",
                scale.title_prefix(),
                metric.label(),
                fixed_other,
                role.other().label()
            ),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .y_desc(scale.axis_desc())
        .x_desc(format!("Number of {} threads", role.label()))
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    for (mode, line) in &lines {
        if line.is_empty() {
            continue;
        }
        let color = mode_color(*mode);
        chart
            .draw_series(LineSeries::new(line.clone(), color.stroke_width(3)))
            .map_err(chart_err)?
            .label(mode.name())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("saved figure to {:?}", path);
    Ok(())
}
