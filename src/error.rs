//! Error types for the nearest-neighbors crate.

use thiserror::Error;

/// Every failure is a precondition violation on a pure function, so there
/// is nothing to retry or recover internally; errors go straight back to
/// the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnnError {
    #[error("feature vectors disagree in length: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("input must contain at least one element")]
    EmptyInput,

    #[error("k must be at least 1, got {k}")]
    InvalidK { k: usize },
}

pub type Result<T> = std::result::Result<T, KnnError>;
