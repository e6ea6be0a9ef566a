//! Binary artifact persistence for performance tensors
//!
//! One sweep produces one tensor, serialized whole into a single `data.perf`
//! file per analysis directory. The artifact is a bincode encoding of the
//! tensor plus magic bytes, a format version, and the axis cardinalities;
//! round-trip fidelity is bit-exact, including NaN sentinel placement.

pub mod artifact;

pub use artifact::{load, load_all, load_dir, save, ARTIFACT_EXTENSION, ARTIFACT_NAME};
