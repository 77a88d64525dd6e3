//! Labelled images
//!
//! A [`LabelledImage`] owns the label grid together with the two tables
//! describing the labels found in it:
//!
//! - `aliases[label - 1]` is the canonical label that `label` resolves to.
//!   Merged labels always point at the lower of the two, i.e. `min(l1, l2)`.
//! - `clips[label - 1]` is the bounding box and mass of the region.
//!
//! Label `0` is background and has no table entry. After labelling every
//! non-zero grid value is canonical.

use crate::clip::ClipRegion;
use crate::error::{LabelError, LabelResult};
use crate::useable::UseablePolicy;
use koki_core::GrayImage;

/// Output intensity of background pixels in [`LabelledImage::to_visual_grid`]
pub const VISUAL_BACKGROUND: u8 = 255;

/// Label grid plus alias and clip tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledImage {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) data: Vec<u16>,
    pub(crate) aliases: Vec<u16>,
    pub(crate) clips: Vec<ClipRegion>,
}

impl LabelledImage {
    /// Create an empty labelled image: all-background grid, no labels.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidInput`] if width or height is 0, or
    /// [`LabelError::AllocationFailure`] if the grid cannot be allocated.
    pub fn new(width: u16, height: u16) -> LabelResult<Self> {
        if width == 0 || height == 0 {
            return Err(LabelError::InvalidInput(format!(
                "labelled image dimensions must be non-zero: {}x{}",
                width, height
            )));
        }

        let len = width as usize * height as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            LabelError::AllocationFailure(format!("label grid of {} entries: {}", len, e))
        })?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            data,
            aliases: Vec::new(),
            clips: Vec::new(),
        })
    }

    /// Width of the label grid
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the label grid
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The label grid, row after row
    #[inline]
    pub fn labels(&self) -> &[u16] {
        &self.data
    }

    /// The alias table, indexed by `label - 1`
    #[inline]
    pub fn aliases(&self) -> &[u16] {
        &self.aliases
    }

    /// The clip table, indexed by `label - 1`
    #[inline]
    pub fn clips(&self) -> &[ClipRegion] {
        &self.clips
    }

    /// Number of labels allocated during the scan, merged ones included
    #[inline]
    pub fn num_provisional(&self) -> usize {
        self.aliases.len()
    }

    /// Number of distinct regions
    pub fn num_regions(&self) -> usize {
        self.canonical_labels().count()
    }

    /// Label of pixel `(x, y)`, or `None` if out of bounds
    pub fn label_at(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width as u32 || y >= self.height as u32 {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Raw alias table entry for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidLabel`] if `label` was never allocated.
    pub fn alias(&self, label: u16) -> LabelResult<u16> {
        if label == 0 || label as usize > self.aliases.len() {
            return Err(self.invalid_label(label));
        }
        Ok(self.aliases[label as usize - 1])
    }

    /// Follow the alias chain of `label` to its canonical label.
    ///
    /// Background (0) and unallocated labels resolve to themselves.
    pub fn resolve(&self, label: u16) -> u16 {
        let mut current = label;
        // A valid chain is strictly decreasing, so it has at most
        // `aliases.len()` links.
        for _ in 0..self.aliases.len() {
            let idx = current as usize;
            if idx == 0 || idx > self.aliases.len() {
                break;
            }
            let next = self.aliases[idx - 1];
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Whether `label` is allocated and maps to itself
    pub fn is_canonical(&self, label: u16) -> bool {
        label != 0
            && (label as usize) <= self.aliases.len()
            && self.aliases[label as usize - 1] == label
    }

    /// Canonical labels in ascending order
    pub fn canonical_labels(&self) -> impl Iterator<Item = u16> + '_ {
        self.aliases
            .iter()
            .enumerate()
            .filter(|&(i, &alias)| alias as usize == i + 1)
            .map(|(_, &alias)| alias)
    }

    /// Canonical labels paired with their clip regions
    pub fn regions(&self) -> impl Iterator<Item = (u16, &ClipRegion)> + '_ {
        self.canonical_labels()
            .map(move |label| (label, &self.clips[label as usize - 1]))
    }

    /// Clip region of a canonical label.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidLabel`] if `label` is 0, unallocated or
    /// not canonical.
    pub fn clip(&self, label: u16) -> LabelResult<&ClipRegion> {
        if !self.is_canonical(label) {
            return Err(self.invalid_label(label));
        }
        Ok(&self.clips[label as usize - 1])
    }

    /// Whether the region `label` satisfies `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidLabel`] if `label` is not canonical.
    pub fn is_useable(&self, label: u16, policy: &UseablePolicy) -> LabelResult<bool> {
        let clip = self.clip(label)?;
        Ok(policy.accepts(clip, self.width as u32, self.height as u32))
    }

    /// All canonical labels accepted by `policy`
    pub fn useable_labels(&self, policy: &UseablePolicy) -> Vec<u16> {
        self.regions()
            .filter(|(_, clip)| policy.accepts(clip, self.width as u32, self.height as u32))
            .map(|(label, _)| label)
            .collect()
    }

    /// Number of background pixels
    pub fn background_count(&self) -> usize {
        self.data.iter().filter(|&&label| label == 0).count()
    }

    /// Render the label grid for display.
    ///
    /// Background becomes white; each label gets a fixed grey level derived
    /// from its value, so the output is identical across calls.
    pub fn to_visual_grid(&self) -> LabelResult<GrayImage> {
        let pixels = self.data.iter().map(|&label| visual_intensity(label)).collect();
        Ok(GrayImage::from_raw(self.width, self.height, pixels)?)
    }

    /// Binary mask of one region, cropped to its clip box.
    ///
    /// Pixels of the region are 255, everything else 0.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidLabel`] if `label` is not canonical.
    pub fn region_mask(&self, label: u16) -> LabelResult<GrayImage> {
        let clip = *self.clip(label)?;
        let mut mask = GrayImage::new(clip.width() as u16, clip.height() as u16)?;
        let w = self.width as usize;

        for y in clip.min.y..=clip.max.y {
            let row = &self.data[y as usize * w..(y as usize + 1) * w];
            for x in clip.min.x..=clip.max.x {
                if row[x as usize] == label {
                    mask.set_pixel((x - clip.min.x) as u32, (y - clip.min.y) as u32, 255)?;
                }
            }
        }

        Ok(mask)
    }

    fn invalid_label(&self, label: u16) -> LabelError {
        LabelError::InvalidLabel {
            label,
            count: self.aliases.len(),
        }
    }
}

/// Display intensity for a label: 255 for background, `0..=239` otherwise.
///
/// Consecutive labels are spread across the grey range; the first 240
/// labels all map to distinct values.
#[inline]
pub fn visual_intensity(label: u16) -> u8 {
    if label == 0 {
        return VISUAL_BACKGROUND;
    }
    ((label as u32 * 47) % 240) as u8
}
