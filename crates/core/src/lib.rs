//! Core types for the syncsweep benchmark pipeline
//!
//! This crate defines the foundational types used throughout the system:
//! - SyncMode: the synchronization strategies under test (fixed axis order)
//! - Operation: the benchmarked workloads, one executable per operation
//! - Metric: read vs. write latency, the last tensor axis
//! - SamplePoint / Sample: one benchmark invocation and its result
//! - PerformanceTensor: the dense 4-axis latency array
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod tensor;
pub mod types;

pub use error::{Error, Result};
pub use tensor::{PerformanceTensor, METRIC_COUNT};
pub use types::{Metric, Operation, Sample, SamplePoint, SyncMode};
