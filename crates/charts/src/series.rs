//! Finite-series extraction
//!
//! Chart families 1 and 3 plot latency against one thread-count axis while
//! the other role's count stays fixed. These helpers slice the tensor
//! accordingly and drop non-finite cells, so a series over an axis of
//! length `n` has at most `n` points.

use syncsweep_core::{Metric, PerformanceTensor, Result, SyncMode};

/// Which thread-count axis a line chart varies along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Vary the reader count, hold the writer count fixed
    Readers,
    /// Vary the writer count, hold the reader count fixed
    Writers,
}

impl Role {
    /// Axis label fragment ("Read"/"Write" threads)
    pub fn label(self) -> &'static str {
        match self {
            Role::Readers => "Read",
            Role::Writers => "Write",
        }
    }

    /// The other role
    pub fn other(self) -> Role {
        match self {
            Role::Readers => Role::Writers,
            Role::Writers => Role::Readers,
        }
    }

    /// Cardinality of this role's axis in a tensor
    pub fn axis_len(self, tensor: &PerformanceTensor) -> usize {
        match self {
            Role::Readers => tensor.max_readers(),
            Role::Writers => tensor.max_writers(),
        }
    }
}

/// One metric's latency along `role`'s axis with the other role fixed
///
/// Returns `(thread count, latency)` pairs, finite cells only.
pub fn finite_line(
    tensor: &PerformanceTensor,
    mode: SyncMode,
    role: Role,
    fixed_other: usize,
    metric: Metric,
) -> Result<Vec<(usize, f64)>> {
    let len = role.axis_len(tensor);
    let mut points = Vec::with_capacity(len);
    for count in 0..len {
        let value = match role {
            Role::Readers => tensor.get(mode, count, fixed_other, metric)?,
            Role::Writers => tensor.get(mode, fixed_other, count, metric)?,
        };
        if value.is_finite() {
            points.push((count, value));
        }
    }
    Ok(points)
}
