//! Iteration-count tuning table
//!
//! Lock-heavy (mode, operation) combinations run orders of magnitude slower
//! per iteration, so they get a reduced read-loop budget to keep the
//! wall-clock time of a full sweep bounded. The table is static; nothing is
//! adaptive.

use syncsweep_core::{Operation, SyncMode};

/// Full read-loop outer iteration count
pub const READ_OUTER_FULL: u32 = 2000;
/// Reduced read-loop outer iteration count for slow combinations
pub const READ_OUTER_REDUCED: u32 = 20;
/// Read-loop inner iteration count (never tuned)
pub const READ_INNER: u32 = 10_000;

/// Write-loop outer iteration count (fixed, writers also sleep between ops)
pub const WRITE_OUTER: u32 = 10;
/// Write-loop inner iteration count (fixed)
pub const WRITE_INNER: u32 = 200;

/// Loop budgets passed to one benchmark invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPlan {
    /// Outer read-loop count
    pub read_outer: u32,
    /// Inner read-loop count
    pub read_inner: u32,
    /// Outer write-loop count
    pub write_outer: u32,
    /// Inner write-loop count
    pub write_inner: u32,
}

impl IterationPlan {
    /// The budget for one (mode, operation) combination
    pub fn for_point(mode: SyncMode, operation: Operation) -> Self {
        let read_outer = if uses_reduced_budget(mode, operation) {
            READ_OUTER_REDUCED
        } else {
            READ_OUTER_FULL
        };
        IterationPlan {
            read_outer,
            read_inner: READ_INNER,
            write_outer: WRITE_OUTER,
            write_inner: WRITE_INNER,
        }
    }
}

/// Whether a (mode, operation) combination gets the reduced read budget
///
/// Lock and RwLock always do. Atomic does only when the operation's atomic
/// path is lock-emulated rather than a hardware instruction. Rcu and Race
/// never do.
pub fn uses_reduced_budget(mode: SyncMode, operation: Operation) -> bool {
    match mode {
        SyncMode::Lock | SyncMode::RwLock => true,
        SyncMode::Atomic => !operation.is_hardware_atomic(),
        SyncMode::Rcu | SyncMode::Race => false,
    }
}
