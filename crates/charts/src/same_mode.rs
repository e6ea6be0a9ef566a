//! Per-mode latency lines (`cmp_same/`)
//!
//! For one synchronization mode, two charts: latency vs. reader count with
//! one line per writer count in a fixed small set, and the symmetric chart
//! over writer counts. The Y axis is raw nanoseconds; each line is labeled
//! with the fixed count of the other role.

use crate::scale::Scale;
use crate::series::{finite_line, Role};
use crate::{chart_dir, chart_err, SAME_MODE_DIR};
use crate::{AXIS_LABEL_FONT_SIZE, LEGEND_FONT_SIZE, TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use plotters::prelude::*;
use std::path::Path;
use syncsweep_core::{Metric, PerformanceTensor, Result, SyncMode};
use tracing::info;

/// Fixed other-role counts overlaid as separate lines
const OVERLAY_COUNTS: [usize; 3] = [1, 3, 8];

/// Render both per-mode line charts for one mode
pub fn plot_for_mode(tensor: &PerformanceTensor, mode: SyncMode, out_root: &Path) -> Result<()> {
    tensor.validate_shape()?;
    info!("plotting per-mode charts for {mode}");
    let dir = chart_dir(out_root, SAME_MODE_DIR)?;
    plot_axis(tensor, mode, Role::Readers, &dir)?;
    plot_axis(tensor, mode, Role::Writers, &dir)?;
    Ok(())
}

/// One chart: latency of `role`'s metric against `role`'s thread count
fn plot_axis(
    tensor: &PerformanceTensor,
    mode: SyncMode,
    role: Role,
    dir: &Path,
) -> Result<()> {
    // reading latency varies along the reader axis, writing along the writer axis
    let metric = match role {
        Role::Readers => Metric::Read,
        Role::Writers => Metric::Write,
    };
    let other_len = role.other().axis_len(tensor);

    let mut lines = Vec::new();
    for other_count in OVERLAY_COUNTS.into_iter().filter(|&c| c < other_len) {
        let line = finite_line(tensor, mode, role, other_count, metric)?;
        lines.push((other_count, line));
    }

    let y_max = lines
        .iter()
        .flat_map(|(_, line)| line.iter().map(|(_, v)| *v))
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.1;
    let x_max = role.axis_len(tensor).saturating_sub(1).max(1) as f64;

    let path = dir.join(format!("{}_{}.svg", mode, role.label()));
    let root = SVGBackend::new(&path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Cycles per {} in {} mode", role.label(), mode),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .y_desc(Scale::Linear.axis_desc())
        .x_desc(format!("Number of {} threads", role.label()))
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    for (idx, (other_count, line)) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let color = Palette99::pick(idx).to_rgba();
        let data: Vec<(f64, f64)> = line.iter().map(|&(x, v)| (x as f64, v)).collect();
        chart
            .draw_series(LineSeries::new(data, color.stroke_width(3)))
            .map_err(chart_err)?
            .label(format!("{} threads = {}", role.other().label(), other_count))
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
