//! koki-label - Threshold labelling for greyscale images
//!
//! This crate turns a greyscale image into a set of labelled regions:
//!
//! - **Labelling** - Thresholding plus 4-connected component labelling with
//!   alias merging ([`label_image`])
//! - **Region store** - Label grid, alias table and per-region clip
//!   statistics ([`LabelledImage`], [`ClipRegion`])
//! - **Usability policy** - Configurable filter for regions worth handing
//!   to downstream consumers ([`UseablePolicy`])
//!
//! # Examples
//!
//! ```
//! use koki_core::GrayImage;
//! use koki_label::{UseablePolicy, label_image};
//!
//! // A dark 10x10 square on a white 20x20 background
//! let mut image = GrayImage::new_filled(20, 20, 255).unwrap();
//! for y in 5..15 {
//!     for x in 5..15 {
//!         image.set_pixel(x, y, 0).unwrap();
//!     }
//! }
//!
//! let labelled = label_image(&image, 128.0).unwrap();
//! assert_eq!(labelled.num_regions(), 1);
//!
//! let clip = labelled.clip(1).unwrap();
//! assert_eq!(clip.mass, 100);
//! assert!(labelled.is_useable(1, &UseablePolicy::default()).unwrap());
//! ```

pub mod clip;
pub mod error;
pub mod labelled;
pub mod scan;
pub mod useable;

// Re-export core types
pub use koki_core;

pub use clip::ClipRegion;
pub use error::{LabelError, LabelResult};
pub use labelled::{LabelledImage, VISUAL_BACKGROUND, visual_intensity};
pub use scan::{LabelOptions, MAX_THRESHOLD, Polarity, label_image, label_image_with_options};
pub use useable::UseablePolicy;
