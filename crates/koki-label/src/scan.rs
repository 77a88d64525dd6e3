//! Threshold labelling
//!
//! Splits a greyscale image into background and foreground with a single
//! threshold, then labels 4-connected foreground regions with a two-pass
//! raster scan:
//!
//! 1. Scan pixels in row-major order, looking at the left and upper
//!    neighbours. New regions get the next provisional label; when two
//!    different labels meet, the higher root is aliased to the lower one.
//!    Bounding box and mass are accumulated under whichever provisional
//!    label each pixel received.
//! 2. Flatten the alias table so every label points directly at its
//!    canonical root, fold the accumulated clip regions into their roots,
//!    and rewrite the grid with canonical labels.

use crate::clip::ClipRegion;
use crate::error::{LabelError, LabelResult};
use crate::labelled::LabelledImage;
use koki_core::GrayImage;
use log::{debug, trace};

/// Largest threshold accepted for 8-bit intensities
pub const MAX_THRESHOLD: f32 = 255.0;

/// Which side of the threshold counts as foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pixels below the threshold are foreground
    #[default]
    DarkForeground,
    /// Pixels above the threshold are foreground
    LightForeground,
}

/// Options for [`label_image_with_options`]
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    /// Intensity threshold, `0.0..=255.0`
    pub threshold: f32,
    /// Foreground side of the threshold
    pub polarity: Polarity,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            threshold: 128.0,
            polarity: Polarity::DarkForeground,
        }
    }
}

impl LabelOptions {
    /// Create options with the given threshold and dark foreground
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Set the polarity
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    fn validate(&self) -> LabelResult<()> {
        if !(0.0..=MAX_THRESHOLD).contains(&self.threshold) {
            return Err(LabelError::InvalidInput(format!(
                "threshold must be within 0..={}, got {}",
                MAX_THRESHOLD, self.threshold
            )));
        }
        Ok(())
    }

    #[inline]
    fn is_foreground(&self, value: u8) -> bool {
        let value = value as f32;
        match self.polarity {
            Polarity::DarkForeground => value < self.threshold,
            Polarity::LightForeground => value > self.threshold,
        }
    }
}

/// Label an image: pixels below `threshold` are foreground.
///
/// # Arguments
///
/// * `image` - Greyscale source image
/// * `threshold` - Intensity threshold in `0.0..=255.0`; pixels with a value
///   at or above it are background
///
/// # Errors
///
/// Returns [`LabelError::InvalidInput`] for a NaN or out-of-range threshold
/// and [`LabelError::AllocationFailure`] if the label tables cannot grow.
///
/// # Examples
///
/// ```
/// use koki_core::GrayImage;
/// use koki_label::label_image;
///
/// #[rustfmt::skip]
/// let image = GrayImage::from_raw(4, 2, vec![
///     0, 255,   0,   0,
///     0, 255, 255,   0,
/// ]).unwrap();
///
/// let labelled = label_image(&image, 128.0).unwrap();
/// assert_eq!(labelled.num_regions(), 2);
/// assert_eq!(labelled.clip(1).unwrap().mass, 2);
/// assert_eq!(labelled.clip(2).unwrap().mass, 3);
/// ```
pub fn label_image(image: &GrayImage, threshold: f32) -> LabelResult<LabelledImage> {
    label_image_with_options(image, &LabelOptions::new(threshold))
}

/// Label an image using explicit [`LabelOptions`].
///
/// # Errors
///
/// See [`label_image`].
pub fn label_image_with_options(
    image: &GrayImage,
    options: &LabelOptions,
) -> LabelResult<LabelledImage> {
    options.validate()?;

    let mut labelled = LabelledImage::new(image.width(), image.height())?;
    let w = image.width() as usize;
    let mut merges = 0usize;

    for y in 0..image.height() {
        let row = image.row(y);
        let row_start = y as usize * w;

        for (x, &value) in row.iter().enumerate() {
            if !options.is_foreground(value) {
                continue;
            }

            let idx = row_start + x;
            let left = if x > 0 { labelled.data[idx - 1] } else { 0 };
            let up = if y > 0 { labelled.data[idx - w] } else { 0 };
            let (px, py) = (x as i32, y as i32);

            let label = match (left, up) {
                (0, 0) => labelled.allocate(px, py)?,
                (l, 0) | (0, l) => {
                    labelled.clips[l as usize - 1].extend(px, py);
                    l
                }
                (l, u) if l == u => {
                    labelled.clips[l as usize - 1].extend(px, py);
                    l
                }
                (l, u) => {
                    let a = labelled.find_root(l);
                    let b = labelled.find_root(u);
                    let (lo, hi) = (a.min(b), a.max(b));
                    if lo != hi {
                        trace!("merging label {} into {} at ({}, {})", hi, lo, px, py);
                        labelled.aliases[hi as usize - 1] = lo;
                        merges += 1;
                    }
                    labelled.clips[lo as usize - 1].extend(px, py);
                    lo
                }
            };

            labelled.data[idx] = label;
        }
    }

    labelled.resolve_aliases();
    labelled.relabel();

    debug!(
        "labelled {}x{} image at threshold {}: {} provisional labels, {} merges, {} regions",
        image.width(),
        image.height(),
        options.threshold,
        labelled.num_provisional(),
        merges,
        labelled.num_regions()
    );

    Ok(labelled)
}

impl LabelledImage {
    /// Allocate the next provisional label for a new region at `(x, y)`.
    fn allocate(&mut self, x: i32, y: i32) -> LabelResult<u16> {
        let count = self.aliases.len();
        if count >= u16::MAX as usize {
            return Err(LabelError::AllocationFailure(format!(
                "label space exhausted after {} labels",
                count
            )));
        }
        self.aliases
            .try_reserve(1)
            .map_err(|e| LabelError::AllocationFailure(format!("alias table: {}", e)))?;
        self.clips
            .try_reserve(1)
            .map_err(|e| LabelError::AllocationFailure(format!("clip table: {}", e)))?;

        let label = (count + 1) as u16;
        self.aliases.push(label);
        self.clips.push(ClipRegion::from_pixel(x, y));
        Ok(label)
    }

    /// Find the current root of `label`, compressing the path behind it.
    fn find_root(&mut self, label: u16) -> u16 {
        let mut root = label;
        while self.aliases[root as usize - 1] != root {
            root = self.aliases[root as usize - 1];
        }

        let mut current = label;
        while current != root {
            let next = self.aliases[current as usize - 1];
            self.aliases[current as usize - 1] = root;
            current = next;
        }

        root
    }

    /// Point every alias entry directly at its canonical label and fold the
    /// clip regions of merged labels into their canonical region.
    ///
    /// Aliases only ever point at lower labels, so visiting labels in
    /// ascending order sees each parent fully resolved before its children.
    fn resolve_aliases(&mut self) {
        for i in 0..self.aliases.len() {
            let parent = self.aliases[i];
            if parent as usize != i + 1 {
                self.aliases[i] = self.aliases[parent as usize - 1];
            }
        }

        for i in 0..self.aliases.len() {
            let root = self.aliases[i] as usize - 1;
            if root != i {
                let merged = self.clips[i];
                self.clips[root].merge(&merged);
            }
        }

        // Superseded entries carry their canonical region's final values
        for i in 0..self.aliases.len() {
            let root = self.aliases[i] as usize - 1;
            if root != i {
                self.clips[i] = self.clips[root];
            }
        }
    }

    /// Rewrite every grid cell with its canonical label.
    fn relabel(&mut self) {
        let aliases = &self.aliases;
        for label in self.data.iter_mut().filter(|label| **label != 0) {
            *label = aliases[*label as usize - 1];
        }
    }
}
