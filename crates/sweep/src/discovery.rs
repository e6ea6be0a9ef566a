//! Benchmark executable discovery
//!
//! One executable per operation, named `<stem>.out` inside the binaries
//! directory. Discovery runs once before any sweep; a missing directory is a
//! fatal configuration error, while an individual missing binary just means
//! that operation is skipped.

use std::path::{Path, PathBuf};
use syncsweep_core::{Error, Operation, Result};
use tracing::debug;

/// File suffix the build system gives benchmark executables
pub const BIN_SUFFIX: &str = "out";

/// Locate the benchmark executable of every operation that has one
///
/// Returns `(operation, path)` pairs in [`Operation::ALL`] order.
///
/// # Errors
/// Returns a configuration error when `bin_dir` is not a directory.
pub fn discover(bin_dir: &Path) -> Result<Vec<(Operation, PathBuf)>> {
    if !bin_dir.is_dir() {
        return Err(Error::Config(format!(
            "no benchmark binaries directory at {:?}; build the benchmarks first",
            bin_dir
        )));
    }

    let mut found = Vec::new();
    for operation in Operation::ALL {
        let path = bin_dir.join(format!("{}.{}", operation.stem(), BIN_SUFFIX));
        if path.is_file() {
            found.push((operation, path));
        } else {
            debug!("no {} binary in {:?}, skipping", operation, bin_dir);
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_missing_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = discover(&missing).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("binaries directory"));
    }

    #[test]
    fn test_discovers_present_binaries_in_enum_order() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("atomic-str.out")).unwrap();
        File::create(dir.path().join("bump-counter.out")).unwrap();
        // unrelated files are ignored
        File::create(dir.path().join("README.md")).unwrap();
        File::create(dir.path().join("bump-counter.o")).unwrap();

        let found = discover(dir.path()).unwrap();
        let ops: Vec<Operation> = found.iter().map(|(op, _)| *op).collect();
        assert_eq!(ops, vec![Operation::BumpCounter, Operation::AtomicStr]);
        for (op, path) in &found {
            assert!(path.file_name().unwrap().to_str().unwrap().starts_with(op.stem()));
        }
    }

    #[test]
    fn test_empty_directory_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }
}
