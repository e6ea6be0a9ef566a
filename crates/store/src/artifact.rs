//! Stored tensor artifact format
//!
//! The on-disk artifact is a bincode encoding of [`StoredTensor`]:
//!
//! ```text
//! +------------------+
//! | magic "PERF"     | 4 bytes
//! | format version   | u32
//! | modes            | axis cardinalities
//! | max_readers      |
//! | max_writers      |
//! | data             | flat row-major f64 cells (NaN = unmeasured)
//! +------------------+
//! ```
//!
//! `load_dir` enforces the "exactly one artifact per analysis directory"
//! precondition; zero or multiple matches is a configuration error the
//! caller must fix, not a recoverable ambiguity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use syncsweep_core::{Error, Operation, PerformanceTensor, Result};
use tracing::{debug, info};

/// Magic bytes at the start of every artifact
pub const ARTIFACT_MAGIC: [u8; 4] = *b"PERF";

/// Artifact format version, bumped on incompatible layout changes
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// File extension `load_dir` scans for
pub const ARTIFACT_EXTENSION: &str = "perf";

/// Conventional artifact file name written by the sweep pipeline
pub const ARTIFACT_NAME: &str = "data.perf";

/// The serialized artifact layout
#[derive(Debug, Serialize, Deserialize)]
struct StoredTensor {
    magic: [u8; 4],
    format_version: u32,
    modes: u64,
    max_readers: u64,
    max_writers: u64,
    data: Vec<f64>,
}

impl StoredTensor {
    fn from_tensor(tensor: &PerformanceTensor) -> Self {
        StoredTensor {
            magic: ARTIFACT_MAGIC,
            format_version: ARTIFACT_FORMAT_VERSION,
            modes: tensor.num_modes() as u64,
            max_readers: tensor.max_readers() as u64,
            max_writers: tensor.max_writers() as u64,
            data: tensor.data().to_vec(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.magic != ARTIFACT_MAGIC {
            return Err(Error::Serialization(format!(
                "invalid artifact magic {:?}, expected {:?}",
                self.magic, ARTIFACT_MAGIC
            )));
        }
        if self.format_version > ARTIFACT_FORMAT_VERSION {
            return Err(Error::Serialization(format!(
                "unsupported artifact version {}, max supported is {}",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        Ok(())
    }

    fn into_tensor(self) -> Result<PerformanceTensor> {
        self.validate()?;
        PerformanceTensor::from_parts(
            self.modes as usize,
            self.max_readers as usize,
            self.max_writers as usize,
            self.data,
        )
    }
}

/// Serialize a tensor to a single artifact file
///
/// The whole encoding is written in one `fs::write`; there are no partial or
/// append writes.
pub fn save(path: &Path, tensor: &PerformanceTensor) -> Result<()> {
    let stored = StoredTensor::from_tensor(tensor);
    let bytes = bincode::serialize(&stored)?;
    fs::write(path, bytes)?;
    info!("saved performance data to {:?}", path);
    Ok(())
}

/// Load a tensor from an artifact file
pub fn load(path: &Path) -> Result<PerformanceTensor> {
    let bytes = fs::read(path)?;
    let stored: StoredTensor = bincode::deserialize(&bytes)?;
    stored.into_tensor()
}

/// Load the single artifact of an analysis directory
///
/// # Errors
/// Returns a configuration error unless the directory contains exactly one
/// `*.perf` file.
pub fn load_dir(dir: &Path) -> Result<PerformanceTensor> {
    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == ARTIFACT_EXTENSION) {
            matches.push(path);
        }
    }
    if matches.len() != 1 {
        return Err(Error::Config(format!(
            "need exactly one .{} artifact in {:?} for analysis, found {}",
            ARTIFACT_EXTENSION,
            dir,
            matches.len()
        )));
    }
    debug!("loading artifact {:?}", matches[0]);
    load(&matches[0])
}

/// Load the artifact of every operation that has an analysis directory
///
/// Scans `results_root/<operation stem>/` for each operation; directories
/// that exist must satisfy the exactly-one-artifact precondition. Used by
/// the multi-operation comparison chart.
pub fn load_all(results_root: &Path) -> Result<BTreeMap<Operation, PerformanceTensor>> {
    let mut tensors = BTreeMap::new();
    for operation in Operation::ALL {
        let dir = results_root.join(operation.stem());
        if dir.is_dir() {
            tensors.insert(operation, load_dir(&dir)?);
        }
    }
    Ok(tensors)
}
