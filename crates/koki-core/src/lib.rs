//! koki-core - Basic data structures for the koki labelling library
//!
//! This crate provides the value types shared by the rest of the workspace:
//!
//! - [`GrayImage`] - Dense single-channel 8-bit image
//! - [`Point2Di`] - Integer screen coordinate
//! - [`Error`] / [`Result`] - Core error handling

pub mod error;
pub mod gray;
pub mod point;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use point::Point2Di;
