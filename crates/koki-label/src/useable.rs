//! Usability policy for labelled regions
//!
//! Downstream consumers only care about regions that could plausibly be
//! what they are looking for. What "plausible" means is up to the consumer,
//! so the predicate is expressed as a [`UseablePolicy`] value rather than a
//! fixed formula.

use crate::clip::ClipRegion;

/// Thresholds deciding whether a region is worth handing downstream
#[derive(Debug, Clone, PartialEq)]
pub struct UseablePolicy {
    /// Minimum pixel count
    pub min_mass: u32,
    /// Maximum pixel count, if bounded
    pub max_mass: Option<u32>,
    /// Regions whose box lies within this many pixels of an image edge are
    /// rejected (0 disables the check)
    pub border_margin: u32,
    /// Minimum bounding box width
    pub min_width: u32,
    /// Minimum bounding box height
    pub min_height: u32,
    /// Minimum ratio of mass to bounding box area
    pub min_fill_ratio: f32,
}

impl Default for UseablePolicy {
    fn default() -> Self {
        Self {
            min_mass: 64,
            max_mass: None,
            border_margin: 1,
            min_width: 1,
            min_height: 1,
            min_fill_ratio: 0.0,
        }
    }
}

impl UseablePolicy {
    /// Create a policy with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that accepts every region
    pub fn permissive() -> Self {
        Self {
            min_mass: 0,
            max_mass: None,
            border_margin: 0,
            min_width: 0,
            min_height: 0,
            min_fill_ratio: 0.0,
        }
    }

    /// Set the minimum mass
    pub fn with_min_mass(mut self, mass: u32) -> Self {
        self.min_mass = mass;
        self
    }

    /// Set the maximum mass
    pub fn with_max_mass(mut self, mass: u32) -> Self {
        self.max_mass = Some(mass);
        self
    }

    /// Set the border exclusion margin
    pub fn with_border_margin(mut self, margin: u32) -> Self {
        self.border_margin = margin;
        self
    }

    /// Set the minimum bounding box size
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the minimum fill ratio
    pub fn with_min_fill_ratio(mut self, ratio: f32) -> Self {
        self.min_fill_ratio = ratio;
        self
    }

    /// Check a region found in a `width` x `height` image against the policy.
    pub fn accepts(&self, clip: &ClipRegion, width: u32, height: u32) -> bool {
        if clip.mass < self.min_mass {
            return false;
        }
        if self.max_mass.is_some_and(|max| clip.mass > max) {
            return false;
        }
        if clip.width() < self.min_width || clip.height() < self.min_height {
            return false;
        }
        if clip.touches_border(width, height, self.border_margin) {
            return false;
        }
        clip.fill_ratio() >= self.min_fill_ratio
    }
}
