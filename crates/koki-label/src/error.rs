//! Error types for koki-label

use thiserror::Error;

/// Errors that can occur while labelling an image or querying the result
#[derive(Debug, Error)]
pub enum LabelError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] koki_core::Error),

    /// Malformed grid dimensions or threshold
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Query against a label that is out of range or not canonical
    #[error("invalid label {label}: not a canonical label among {count} allocated")]
    InvalidLabel { label: u16, count: usize },

    /// Label, alias or clip tables could not grow
    #[error("allocation failure: {0}")]
    AllocationFailure(String),
}

/// Result type for labelling operations
pub type LabelResult<T> = Result<T, LabelError>;
