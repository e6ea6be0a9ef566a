//! Shared test utilities for the integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::io::Write as _;
use std::path::PathBuf;
use syncsweep::{Metric, Operation, PerformanceTensor, Sample, SyncMode};
use tempfile::TempDir;

/// A scratch binaries directory holding fake benchmark executables.
pub struct FakeBinDir {
    pub dir: TempDir,
}

impl FakeBinDir {
    pub fn new() -> Self {
        FakeBinDir {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Install a fake benchmark executable for one operation.
    ///
    /// The script honors the real output contract: one float when a role
    /// count is zero, two lines otherwise.
    #[cfg(unix)]
    pub fn install_contract_script(&self, operation: Operation) -> PathBuf {
        self.install_script(
            operation,
            r#"
if [ "$1" -eq 0 ]; then
    echo 50.0
elif [ "$2" -eq 0 ]; then
    echo 5.0
else
    echo 5.0
    echo 50.0
fi
"#,
        )
    }

    /// Install a fake benchmark executable with an arbitrary shell body.
    #[cfg(unix)]
    pub fn install_script(&self, operation: Operation, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self
            .path()
            .join(format!("{}.{}", operation.stem(), syncsweep::BIN_SUFFIX));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "{body}").unwrap();
        drop(file);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}

/// A fully-populated tensor with distinct, predictable cell values.
pub fn populated_tensor(max_readers: usize, max_writers: usize) -> PerformanceTensor {
    let mut tensor = PerformanceTensor::new(max_readers, max_writers);
    for mode in SyncMode::ALL {
        for readers in 0..max_readers {
            for writers in 0..max_writers {
                if readers == 0 && writers == 0 {
                    continue;
                }
                let base = cell_value(mode, readers, writers);
                let sample = Sample {
                    read: (readers > 0).then_some(base),
                    write: (writers > 0).then_some(base + 0.5),
                };
                tensor.put_sample(mode, readers, writers, sample).unwrap();
            }
        }
    }
    tensor
}

/// Deterministic per-cell value used by `populated_tensor`.
pub fn cell_value(mode: SyncMode, readers: usize, writers: usize) -> f64 {
    (mode.index() * 10_000 + readers * 100 + writers) as f64 + 1.0
}

/// Assert a chart file exists under `root` and is not empty.
pub fn assert_chart(root: &std::path::Path, sub: &str, name: &str) {
    let path = root.join(sub).join(name);
    assert!(path.is_file(), "missing chart {}", path.display());
    assert!(
        std::fs::metadata(&path).unwrap().len() > 0,
        "empty chart {}",
        path.display()
    );
}

// Re-export for convenience in test modules.
pub use syncsweep::store;

/// Metric axis shorthand used across suites.
pub const METRICS: [Metric; 2] = Metric::ALL;
