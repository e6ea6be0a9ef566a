//! Full parameter-space sweep
//!
//! Walks (mode, readers, writers) in fixed order, one blocking invocation at
//! a time, and fills a fresh tensor. Parse failures are logged and counted,
//! never propagated: the cell stays at the sentinel and the sweep continues.

use crate::invoker::BenchmarkInvoker;
use std::time::{Duration, Instant};
use syncsweep_core::{PerformanceTensor, Result, Sample, SyncMode};
use tracing::{info, warn};

/// Outcome counters for one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of parameter points visited (degenerate points included)
    pub attempted: usize,
    /// Number of invocations whose output could not be parsed
    pub failed: usize,
    /// Wall-clock duration of the whole sweep
    pub elapsed: Duration,
}

/// Drives one operation's sweep over the full parameter space
#[derive(Debug)]
pub struct SweepOrchestrator {
    invoker: BenchmarkInvoker,
    max_readers: usize,
    max_writers: usize,
}

impl SweepOrchestrator {
    /// Create an orchestrator for one operation's invoker
    pub fn new(invoker: BenchmarkInvoker, max_readers: usize, max_writers: usize) -> Self {
        SweepOrchestrator {
            invoker,
            max_readers,
            max_writers,
        }
    }

    /// Run the sweep over the given modes and return the filled tensor
    ///
    /// Modes are visited in the order given (callers normally pass
    /// [`SyncMode::ALL`]); within a mode, readers is the outer loop and
    /// writers the inner one. The tensor always has the full mode axis;
    /// cells of modes not in `modes` stay at the sentinel.
    pub fn run(&self, modes: &[SyncMode]) -> Result<(PerformanceTensor, SweepReport)> {
        let operation = self.invoker.operation();
        let start = Instant::now();
        let mut tensor = PerformanceTensor::new(self.max_readers, self.max_writers);
        let per_mode_total = self.max_readers * self.max_writers;
        let mut attempted = 0usize;
        let mut failed = 0usize;

        for &mode in modes {
            let mut done_in_mode = 0usize;
            for readers in 0..self.max_readers {
                for writers in 0..self.max_writers {
                    let sample = match self.invoker.invoke(readers, writers, mode) {
                        Ok(sample) => sample,
                        Err(err) => {
                            warn!(
                                operation = %operation,
                                mode = %mode,
                                readers,
                                writers,
                                "invocation failed, leaving cell unmeasured: {err}"
                            );
                            failed += 1;
                            Sample::EMPTY
                        }
                    };
                    tensor.put_sample(mode, readers, writers, sample)?;
                    attempted += 1;
                    done_in_mode += 1;
                    info!(
                        "({operation} {mode}) done {done_in_mode}/{per_mode_total} ({:.1}%), elapsed {:.1}s",
                        100.0 * done_in_mode as f64 / per_mode_total as f64,
                        start.elapsed().as_secs_f64()
                    );
                }
            }
            info!("({operation} {mode}) done {per_mode_total}/{per_mode_total} (100.0%)");
        }

        let report = SweepReport {
            attempted,
            failed,
            elapsed: start.elapsed(),
        };
        if report.failed > 0 {
            warn!(
                "({operation}) sweep finished with {} failed point(s) out of {}",
                report.failed, report.attempted
            );
        }
        Ok((tensor, report))
    }
}
