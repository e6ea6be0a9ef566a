//! The dense 4-axis latency tensor
//!
//! Axis order is fixed as `[mode, readers, writers, metric]` with shape
//! `(SyncMode::COUNT, max_readers, max_writers, 2)`. Unmeasured cells hold
//! `f64::NAN`, which is distinguishable from a true zero latency. The tensor
//! is filled exactly once per sweep and is read-only afterwards: the store
//! serializes it whole and the chart algorithms only ever read it.

use crate::error::{Error, Result};
use crate::types::{Metric, Sample, SyncMode};
use serde::{Deserialize, Serialize};

/// Cardinality of the metric axis (read and write)
pub const METRIC_COUNT: usize = 2;

/// Dense row-major latency tensor over `[mode, readers, writers, metric]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTensor {
    modes: usize,
    max_readers: usize,
    max_writers: usize,
    data: Vec<f64>,
}

impl PerformanceTensor {
    /// Create a sentinel-initialized tensor for the full mode set
    pub fn new(max_readers: usize, max_writers: usize) -> Self {
        let len = SyncMode::COUNT * max_readers * max_writers * METRIC_COUNT;
        PerformanceTensor {
            modes: SyncMode::COUNT,
            max_readers,
            max_writers,
            data: vec![f64::NAN; len],
        }
    }

    /// Rebuild a tensor from its axis cardinalities and flat data
    ///
    /// # Errors
    /// Returns a serialization error when the data length does not match the
    /// claimed shape.
    pub fn from_parts(
        modes: usize,
        max_readers: usize,
        max_writers: usize,
        data: Vec<f64>,
    ) -> Result<Self> {
        let expected = modes * max_readers * max_writers * METRIC_COUNT;
        if data.len() != expected {
            return Err(Error::Serialization(format!(
                "tensor data length {} does not match shape ({}, {}, {}, {})",
                data.len(),
                modes,
                max_readers,
                max_writers,
                METRIC_COUNT
            )));
        }
        Ok(PerformanceTensor {
            modes,
            max_readers,
            max_writers,
            data,
        })
    }

    /// Shape as `[modes, readers, writers, metrics]`
    pub fn shape(&self) -> [usize; 4] {
        [self.modes, self.max_readers, self.max_writers, METRIC_COUNT]
    }

    /// Cardinality of the mode axis
    pub fn num_modes(&self) -> usize {
        self.modes
    }

    /// Cardinality of the reader-count axis
    pub fn max_readers(&self) -> usize {
        self.max_readers
    }

    /// Cardinality of the writer-count axis
    pub fn max_writers(&self) -> usize {
        self.max_writers
    }

    /// The flat row-major cell data
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn offset(&self, mode: SyncMode, readers: usize, writers: usize) -> Result<usize> {
        if mode.index() >= self.modes || readers >= self.max_readers || writers >= self.max_writers
        {
            return Err(Error::OutOfBounds {
                mode: mode.index(),
                readers,
                writers,
                shape: self.shape(),
            });
        }
        Ok(((mode.index() * self.max_readers + readers) * self.max_writers + writers)
            * METRIC_COUNT)
    }

    /// Read one cell
    ///
    /// Returns the NaN sentinel for unmeasured cells.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when the index is outside the shape.
    pub fn get(&self, mode: SyncMode, readers: usize, writers: usize, metric: Metric) -> Result<f64> {
        let offset = self.offset(mode, readers, writers)?;
        Ok(self.data[offset + metric.index()])
    }

    /// Write one cell
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when the index is outside the shape.
    pub fn set(
        &mut self,
        mode: SyncMode,
        readers: usize,
        writers: usize,
        metric: Metric,
        value: f64,
    ) -> Result<()> {
        let offset = self.offset(mode, readers, writers)?;
        self.data[offset + metric.index()] = value;
        Ok(())
    }

    /// Write both metrics of one sample point
    ///
    /// Absent measurements store the NaN sentinel.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when the index is outside the shape.
    pub fn put_sample(
        &mut self,
        mode: SyncMode,
        readers: usize,
        writers: usize,
        sample: Sample,
    ) -> Result<()> {
        let offset = self.offset(mode, readers, writers)?;
        self.data[offset + Metric::Read.index()] = sample.read.unwrap_or(f64::NAN);
        self.data[offset + Metric::Write.index()] = sample.write.unwrap_or(f64::NAN);
        Ok(())
    }

    /// Check that the mode axis covers the full [`SyncMode`] set
    ///
    /// Every chart algorithm calls this before reading; a mismatched tensor
    /// is a caller bug and fails fast rather than being silently reshaped.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] on any cardinality mismatch.
    pub fn validate_shape(&self) -> Result<()> {
        let actual = self.shape();
        let expected = [SyncMode::COUNT, self.max_readers, self.max_writers, METRIC_COUNT];
        if actual != expected {
            return Err(Error::ShapeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Bit-exact equality, treating NaN cells at equal positions as equal
    ///
    /// Used to verify round-trip fidelity of the stored artifact; the
    /// derived `PartialEq` on `f64` would report `NaN != NaN`.
    pub fn eq_bitwise(&self, other: &PerformanceTensor) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}
