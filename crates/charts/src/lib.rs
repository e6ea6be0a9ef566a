//! Chart generation for performance tensors
//!
//! Five independent chart families, each reading a shape-validated
//! [`syncsweep_core::PerformanceTensor`] (or a map of them) and writing SVG
//! files into a fixed subdirectory of the output root:
//!
//! - `same_mode` → `cmp_same/`: per-mode latency vs. thread count lines
//! - `surface` → `surfaces/`: triangulated 3D latency surfaces
//! - `cmp_modes` → `cmp_modes/`: cross-mode latency lines
//! - `cmp_point` → `cmp_diff/`: single-point cross-mode bars with speedups
//! - `cmp_ops` → `cmp_ops/`: grouped multi-operation bars
//!
//! None of the algorithms mutate the tensor. Missing (NaN) cells are
//! filtered out before any scaling or drawing; they are never clamped,
//! substituted, or interpolated.

use plotters::prelude::RGBColor;
use std::path::{Path, PathBuf};
use syncsweep_core::{Error, Result, SyncMode};

pub mod cmp_modes;
pub mod cmp_ops;
pub mod cmp_point;
pub mod same_mode;
pub mod scale;
pub mod series;
pub mod surface;

pub use cmp_modes::plot_mode_comparison;
pub use cmp_ops::plot_operation_comparison;
pub use cmp_point::plot_point_comparison;
pub use same_mode::plot_for_mode;
pub use scale::Scale;
pub use surface::plot_surface;

/// Output subdirectory for per-mode line plots
pub const SAME_MODE_DIR: &str = "cmp_same";
/// Output subdirectory for cross-mode line plots
pub const CMP_MODES_DIR: &str = "cmp_modes";
/// Output subdirectory for single-point cross-mode bar plots
pub const CMP_POINT_DIR: &str = "cmp_diff";
/// Output subdirectory for grouped multi-operation bar plots
pub const CMP_OPS_DIR: &str = "cmp_ops";
/// Output subdirectory for 3D surfaces
pub const SURFACE_DIR: &str = "surfaces";

// Font sizes shared by all chart families
pub(crate) const TITLE_FONT_SIZE: u32 = 30;
pub(crate) const AXIS_LABEL_FONT_SIZE: u32 = 20;
pub(crate) const TICK_LABEL_FONT_SIZE: u32 = 16;
pub(crate) const LEGEND_FONT_SIZE: u32 = 16;
pub(crate) const DATA_LABEL_FONT_SIZE: u32 = 14;

/// Fixed color per synchronization mode, indexed by mode ordinal
pub(crate) const MODE_COLORS: [RGBColor; SyncMode::COUNT] = [
    RGBColor(66, 133, 244), // RCU - blue
    RGBColor(52, 168, 83),  // RWLOCK - green
    RGBColor(251, 188, 5),  // LOCK - yellow
    RGBColor(171, 71, 188), // ATOMIC - purple
    RGBColor(234, 67, 53),  // RACE - red
];

/// Color of one mode's lines and bars
pub(crate) fn mode_color(mode: SyncMode) -> RGBColor {
    MODE_COLORS[mode.index()]
}

/// Map a charting backend failure into the shared error type
pub(crate) fn chart_err(e: impl std::fmt::Display) -> Error {
    Error::Chart(e.to_string())
}

/// Create (if needed) and return one chart family's output subdirectory
pub(crate) fn chart_dir(out_root: &Path, sub: &str) -> Result<PathBuf> {
    let dir = out_root.join(sub);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
