//! syncsweep - concurrency benchmark sweep and chart suite
//!
//! syncsweep drives an external concurrency-control micro-benchmark across a
//! (mode x operation x reader-count x writer-count) parameter sweep, collects
//! its timing output into one dense tensor, persists the tensor as a binary
//! artifact, and renders comparison charts from it.
//!
//! # Quick Start
//!
//! ```ignore
//! use syncsweep::{BenchmarkInvoker, Operation, SweepOrchestrator, SyncMode};
//!
//! let invoker = BenchmarkInvoker::new("out/bump-counter.out", Operation::BumpCounter);
//! let orchestrator = SweepOrchestrator::new(invoker, 10, 10);
//! let (tensor, report) = orchestrator.run(&SyncMode::ALL)?;
//! syncsweep::store::save("results/bump-counter/data.perf".as_ref(), &tensor)?;
//! ```
//!
//! # Architecture
//!
//! Data flows strictly one way: the orchestrator fills a
//! [`PerformanceTensor`], the store persists it, and the chart algorithms
//! only ever read stored tensors back. The pipeline is single-threaded and
//! synchronous throughout.

// Re-export the public API of the member crates
pub use syncsweep_core::{
    Error, Metric, Operation, PerformanceTensor, Result, Sample, SamplePoint, SyncMode,
};
pub use syncsweep_sweep::{
    discover, BenchmarkInvoker, InvokeError, IterationPlan, SweepOrchestrator, SweepReport,
    BIN_SUFFIX,
};

/// Artifact persistence
pub use syncsweep_store as store;

/// Chart generation
pub use syncsweep_charts as charts;
