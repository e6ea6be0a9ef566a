//! Single benchmark invocation and stdout parsing
//!
//! The benchmark executable is a black box that prints latency numbers to
//! stdout. The expected output depends on the point shape:
//! - `readers == 0 && writers == 0`: degenerate, never invoked
//! - `readers == 0`: one float, the write latency
//! - `writers == 0`: one float, the read latency
//! - both positive: two lines, read latency then write latency
//!
//! A trailing blank line is tolerated. Anything else is an [`InvokeError`],
//! which the orchestrator degrades to a missing cell; a single bad run never
//! aborts a sweep.

use crate::plan::IterationPlan;
use std::path::{Path, PathBuf};
use std::process::Command;
use syncsweep_core::{Operation, Sample, SamplePoint, SyncMode};
use thiserror::Error;

/// Recoverable per-invocation failure
///
/// Carries enough context to log the failure with (operation, mode, point,
/// raw output) and move on.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The external process could not be spawned
    #[error("failed to run {executable:?} for {point}: {source}")]
    Spawn {
        /// Path of the executable that failed to start
        executable: PathBuf,
        /// The parameter point being measured
        point: SamplePoint,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// The process ran but its stdout did not match the expected shape
    #[error("unparsable benchmark output for {point}: {reason}; raw output {raw:?}")]
    Parse {
        /// The parameter point being measured
        point: SamplePoint,
        /// What was wrong with the output
        reason: String,
        /// The raw captured stdout
        raw: String,
    },
}

/// Runs the benchmark executable for one operation
#[derive(Debug, Clone)]
pub struct BenchmarkInvoker {
    executable: PathBuf,
    operation: Operation,
}

impl BenchmarkInvoker {
    /// Create an invoker for one operation's executable
    pub fn new(executable: impl Into<PathBuf>, operation: Operation) -> Self {
        BenchmarkInvoker {
            executable: executable.into(),
            operation,
        }
    }

    /// The operation this invoker benchmarks
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Path of the executable being invoked
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run the benchmark once and parse its output
    ///
    /// Degenerate points short-circuit to the empty sample without spawning
    /// a process. The call blocks until the child exits; no timeout is
    /// imposed, so a hung child hangs the sweep.
    pub fn invoke(
        &self,
        readers: usize,
        writers: usize,
        mode: SyncMode,
    ) -> Result<Sample, InvokeError> {
        let point = SamplePoint {
            readers,
            writers,
            mode,
            operation: self.operation,
        };
        if point.is_degenerate() {
            return Ok(Sample::EMPTY);
        }

        let plan = IterationPlan::for_point(mode, self.operation);
        let output = Command::new(&self.executable)
            .arg(readers.to_string())
            .arg(writers.to_string())
            .arg(mode.name())
            .arg(plan.read_outer.to_string())
            .arg(plan.read_inner.to_string())
            .arg(plan.write_outer.to_string())
            .arg(plan.write_inner.to_string())
            .arg("quiet")
            .output()
            .map_err(|source| InvokeError::Spawn {
                executable: self.executable.clone(),
                point,
                source,
            })?;

        // Exit code is not inspected: a non-zero exit with unparsable output
        // surfaces as a parse error below.
        let raw = String::from_utf8_lossy(&output.stdout).into_owned();
        parse_sample(point, &raw)
    }
}

/// Parse captured stdout into a sample according to the point shape
fn parse_sample(point: SamplePoint, raw: &str) -> Result<Sample, InvokeError> {
    let parse_err = |reason: String| InvokeError::Parse {
        point,
        reason,
        raw: raw.to_string(),
    };

    let mut lines: Vec<&str> = raw.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let expected_lines = if point.readers > 0 && point.writers > 0 {
        2
    } else {
        1
    };
    if lines.len() != expected_lines {
        return Err(parse_err(format!(
            "expected {} output line(s), got {}",
            expected_lines,
            lines.len()
        )));
    }

    let mut values = Vec::with_capacity(expected_lines);
    for line in &lines {
        values.push(parse_latency(line).map_err(parse_err)?);
    }

    let sample = if point.readers == 0 {
        Sample {
            read: None,
            write: Some(values[0]),
        }
    } else if point.writers == 0 {
        Sample {
            read: Some(values[0]),
            write: None,
        }
    } else {
        Sample {
            read: Some(values[0]),
            write: Some(values[1]),
        }
    };
    Ok(sample)
}

/// Parse one latency token, requiring a finite non-negative float
fn parse_latency(line: &str) -> Result<f64, String> {
    let token = line.trim();
    let value: f64 = token
        .parse()
        .map_err(|_| format!("non-numeric token {token:?}"))?;
    if !value.is_finite() {
        return Err(format!("non-finite latency {token:?}"));
    }
    if value < 0.0 {
        return Err(format!("negative latency {token:?}"));
    }
    Ok(value)
}
