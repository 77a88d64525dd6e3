//! Error types for koki-core
//!
//! Provides the error type shared by the image containers in this crate.
//! Higher-level crates wrap it in their own error enums.

use thiserror::Error;

/// koki-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer does not match the image dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for koki-core operations
pub type Result<T> = std::result::Result<T, Error>;
