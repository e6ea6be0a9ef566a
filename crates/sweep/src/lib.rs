//! Sweep execution for the syncsweep pipeline
//!
//! This crate owns everything between the parameter space and the filled
//! tensor:
//! - discovery: locate one benchmark executable per operation
//! - plan: the static iteration-count tuning table
//! - invoker: run one executable invocation and parse its stdout
//! - orchestrator: walk the full (mode, readers, writers) space
//!
//! The pipeline is single-threaded and synchronous: exactly one external
//! process runs at a time, and a hung child hangs the sweep. No timeout and
//! no retry anywhere.

pub mod discovery;
pub mod invoker;
pub mod orchestrator;
pub mod plan;

pub use discovery::{discover, BIN_SUFFIX};
pub use invoker::{BenchmarkInvoker, InvokeError};
pub use orchestrator::{SweepOrchestrator, SweepReport};
pub use plan::IterationPlan;
