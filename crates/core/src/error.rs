//! Error types for the syncsweep pipeline
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Per-invocation parse failures are deliberately *not* part of this
//! hierarchy: they degrade to missing cells inside the sweep crate and never
//! propagate past the orchestrator.

use std::io;
use thiserror::Error;

/// Result type alias for syncsweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the syncsweep pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations, process output capture)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error for the stored artifact
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Fatal configuration error (missing binaries directory,
    /// wrong number of stored artifacts, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tensor handed to a consumer does not have the expected axis
    /// cardinalities
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected shape as `[modes, readers, writers, metrics]`
        expected: [usize; 4],
        /// Actual shape found
        actual: [usize; 4],
    },

    /// Tensor index outside the tensor's shape
    #[error("Index out of bounds: ({mode}, {readers}, {writers}) in tensor of shape {shape:?}")]
    OutOfBounds {
        /// Mode axis index
        mode: usize,
        /// Reader-count axis index
        readers: usize,
        /// Writer-count axis index
        writers: usize,
        /// Shape of the tensor that rejected the index
        shape: [usize; 4],
    },

    /// Chart rendering backend failure
    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_error_display_serialization() {
        let err = Error::Serialization("invalid format".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("invalid format"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("no binaries directory".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("no binaries directory"));
    }

    #[test]
    fn test_error_display_shape_mismatch() {
        let err = Error::ShapeMismatch {
            expected: [5, 10, 10, 2],
            actual: [4, 10, 10, 2],
        };
        let msg = err.to_string();
        assert!(msg.contains("Shape mismatch"));
        assert!(msg.contains("[5, 10, 10, 2]"));
        assert!(msg.contains("[4, 10, 10, 2]"));
    }

    #[test]
    fn test_error_display_out_of_bounds() {
        let err = Error::OutOfBounds {
            mode: 0,
            readers: 12,
            writers: 3,
            shape: [5, 10, 10, 2],
        };
        let msg = err.to_string();
        assert!(msg.contains("out of bounds"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_error_display_chart() {
        let err = Error::Chart("backend write failed".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Chart error"));
        assert!(msg.contains("backend write failed"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_bincode() {
        let invalid_data = vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<String> = bincode::deserialize(&invalid_data).map_err(|e| e.into());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::ShapeMismatch {
            expected: [5, 10, 10, 2],
            actual: [5, 8, 8, 2],
        };
        match err {
            Error::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, [5, 10, 10, 2]);
                assert_eq!(actual, [5, 8, 8, 2]);
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
