//! 3D latency surfaces (`surfaces/`)
//!
//! One triangulated surface per (mode, metric) pair over the full
//! reader-count × writer-count grid, with Z = scale(latency). Each grid quad
//! is split into two triangles; a triangle is drawn only when all three of
//! its corners are finite, so missing cells punch holes in the surface
//! instead of being interpolated.

use crate::scale::Scale;
use crate::{chart_dir, chart_err, mode_color, SURFACE_DIR};
use crate::{TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use plotters::prelude::*;
use std::path::Path;
use syncsweep_core::{Metric, PerformanceTensor, Result, SyncMode};
use tracing::info;

/// Render the latency surface for one (mode, metric) pair
pub fn plot_surface(
    tensor: &PerformanceTensor,
    mode: SyncMode,
    metric: Metric,
    scale: Scale,
    out_root: &Path,
) -> Result<()> {
    tensor.validate_shape()?;
    let dir = chart_dir(out_root, SURFACE_DIR)?;
    let num_readers = tensor.max_readers();
    let num_writers = tensor.max_writers();

    // scaled height grid, NaN where unmeasured
    let mut grid = vec![vec![f64::NAN; num_writers]; num_readers];
    for (readers, row) in grid.iter_mut().enumerate() {
        for (writers, cell) in row.iter_mut().enumerate() {
            let value = tensor.get(mode, readers, writers, metric)?;
            if value.is_finite() {
                *cell = scale.apply(value);
            }
        }
    }

    let finite: Vec<f64> = grid
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    let (mut z_min, mut z_max) = if finite.is_empty() {
        (0.0, 1.0)
    } else {
        (
            finite.iter().copied().fold(f64::MAX, f64::min),
            finite.iter().copied().fold(f64::MIN, f64::max),
        )
    };
    if z_min == z_max {
        z_max = z_min + 1.0;
    }
    z_min = z_min.min(0.0);

    let x_max = num_readers.saturating_sub(1).max(1) as f64;
    let w_max = num_writers.saturating_sub(1).max(1) as f64;

    let path = dir.join(format!("{}_{}.svg", mode, metric.label()));
    let root = SVGBackend::new(&path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{}{} latency surface in {} mode",
                scale.title_prefix(),
                metric.label(),
                mode
            ),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .build_cartesian_3d(0.0..x_max, z_min..z_max, 0.0..w_max)
        .map_err(chart_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.6;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .draw()
        .map_err(chart_err)?;

    let color = mode_color(mode);
    let polygons: Vec<_> = triangulate(&grid)
        .into_iter()
        .map(|corners| Polygon::new(corners.to_vec(), color.mix(0.5).filled()))
        .collect();
    let triangle_count = polygons.len();
    chart
        .draw_series(polygons.into_iter())
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!(
        "saved figure to {:?} ({} triangles)",
        path, triangle_count
    );
    Ok(())
}

/// Split every grid quad into two triangles, keeping all-finite ones
///
/// Coordinates are `(reader count, height, writer count)`.
fn triangulate(grid: &[Vec<f64>]) -> Vec<[(f64, f64, f64); 3]> {
    let mut triangles = Vec::new();
    let num_readers = grid.len();
    let num_writers = grid.first().map_or(0, Vec::len);

    for readers in 0..num_readers.saturating_sub(1) {
        for writers in 0..num_writers.saturating_sub(1) {
            let corners = [
                (readers, writers),
                (readers + 1, writers),
                (readers + 1, writers + 1),
                (readers, writers + 1),
            ];
            for tri in [[0usize, 1, 2], [0, 2, 3]] {
                let points = tri.map(|i| {
                    let (r, w) = corners[i];
                    (r as f64, grid[r][w], w as f64)
                });
                if points.iter().all(|(_, height, _)| height.is_finite()) {
                    triangles.push(points);
                }
            }
        }
    }
    triangles
}
