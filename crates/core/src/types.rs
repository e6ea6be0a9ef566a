//! Benchmark parameter-space types
//!
//! This module defines the closed enumerations that span the sweep's
//! parameter space:
//! - SyncMode: synchronization strategy, fixed order = tensor axis 0 order
//! - Operation: benchmarked workload, one executable per operation
//! - Metric: read vs. write latency, tensor axis 3
//!
//! Every enum carries its own stable ordinal; there is no separate
//! name-to-index lookup table anywhere in the system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One synchronization strategy under test
///
/// The declaration order is significant: it fixes the tensor axis index and
/// the legend/bar ordering in every chart. `Rcu` is the baseline mode for
/// speedup ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncMode {
    /// Lock-free read-copy-update (userspace RCU)
    Rcu = 0,
    /// Reader-writer lock
    RwLock = 1,
    /// Exclusive mutex
    Lock = 2,
    /// Hardware atomic instruction (or a lock-based emulation of one)
    Atomic = 3,
    /// No synchronization at all (racy)
    Race = 4,
}

impl SyncMode {
    /// All modes in their fixed axis order
    pub const ALL: [SyncMode; 5] = [
        SyncMode::Rcu,
        SyncMode::RwLock,
        SyncMode::Lock,
        SyncMode::Atomic,
        SyncMode::Race,
    ];

    /// Number of synchronization modes (tensor axis 0 cardinality)
    pub const COUNT: usize = Self::ALL.len();

    /// Reference mode for speedup ratios in bar comparisons
    pub const BASELINE: SyncMode = SyncMode::Rcu;

    /// Stable axis ordinal of this mode
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`SyncMode::index`]
    pub fn from_index(index: usize) -> Option<SyncMode> {
        Self::ALL.get(index).copied()
    }

    /// The token passed to the benchmark executable and shown in legends
    pub fn name(self) -> &'static str {
        match self {
            SyncMode::Rcu => "RCU",
            SyncMode::RwLock => "RWLOCK",
            SyncMode::Lock => "LOCK",
            SyncMode::Atomic => "ATOMIC",
            SyncMode::Race => "RACE",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One benchmarked workload
///
/// Each operation maps to a separate benchmark executable named
/// `<stem>.out` inside the binaries directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    /// Plain counter increment
    BumpCounter,
    /// Multi-field struct update
    StructAbc,
    /// String replacement
    AtomicStr,
    /// Vector push/replace
    AtomicVec,
}

impl Operation {
    /// All operations in their fixed order
    pub const ALL: [Operation; 4] = [
        Operation::BumpCounter,
        Operation::StructAbc,
        Operation::AtomicStr,
        Operation::AtomicVec,
    ];

    /// Executable file stem for this operation
    pub fn stem(self) -> &'static str {
        match self {
            Operation::BumpCounter => "bump-counter",
            Operation::StructAbc => "struct-abc",
            Operation::AtomicStr => "atomic-str",
            Operation::AtomicVec => "atomic-vec",
        }
    }

    /// Whether the operation's atomic variant runs on a real hardware
    /// instruction
    ///
    /// Only a plain counter fits in a single atomic word; every other
    /// workload emulates its "atomic" mode with a lock, which changes which
    /// modes need a reduced iteration budget.
    pub fn is_hardware_atomic(self) -> bool {
        matches!(self, Operation::BumpCounter)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Which latency a tensor cell holds (tensor axis 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Per-read latency
    Read = 0,
    /// Per-write latency
    Write = 1,
}

impl Metric {
    /// Both metrics in axis order
    pub const ALL: [Metric; 2] = [Metric::Read, Metric::Write];

    /// Stable axis ordinal of this metric
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label used in chart titles and file names
    pub fn label(self) -> &'static str {
        match self {
            Metric::Read => "Read",
            Metric::Write => "Write",
        }
    }

    /// The opposite metric
    pub fn other(self) -> Metric {
        match self {
            Metric::Read => Metric::Write,
            Metric::Write => Metric::Read,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point of the sweep's parameter space, identifying a single benchmark
/// invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplePoint {
    /// Number of reader threads
    pub readers: usize,
    /// Number of writer threads
    pub writers: usize,
    /// Synchronization mode under test
    pub mode: SyncMode,
    /// Benchmarked workload
    pub operation: Operation,
}

impl SamplePoint {
    /// A point with neither readers nor writers produces no data and is
    /// never invoked
    pub fn is_degenerate(&self) -> bool {
        self.readers == 0 && self.writers == 0
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} r={} w={}",
            self.operation, self.mode, self.readers, self.writers
        )
    }
}

/// The result of one benchmark invocation
///
/// Either latency may be absent: a point with zero readers measures only
/// writes and vice versa. Absence is distinct from a zero latency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Per-read latency in nanoseconds, if measured
    pub read: Option<f64>,
    /// Per-write latency in nanoseconds, if measured
    pub write: Option<f64>,
}

impl Sample {
    /// The sample with no measurements at all
    pub const EMPTY: Sample = Sample {
        read: None,
        write: None,
    };

    /// True when neither latency was measured
    pub fn is_empty(&self) -> bool {
        self.read.is_none() && self.write.is_none()
    }

    /// The latency for one metric, if measured
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Read => self.read,
            Metric::Write => self.write,
        }
    }
}
