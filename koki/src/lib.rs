//! koki - Thresholded region labelling for Rust
//!
//! Finds dark (or light) connected regions in greyscale images and keeps
//! per-region bounding boxes and pixel counts, ready for marker detection
//! or any other consumer of blob candidates.
//!
//! # Example
//!
//! ```
//! use koki::GrayImage;
//! use koki::label::label_image;
//!
//! let image = GrayImage::new(3, 3).unwrap();
//! let labelled = label_image(&image, 128.0).unwrap();
//! assert_eq!(labelled.clip(1).unwrap().mass, 9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use koki_core::*;

// Re-export the labelling crate as a module to avoid name conflicts
pub use koki_label as label;
