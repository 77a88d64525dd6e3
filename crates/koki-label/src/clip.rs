//! Clip regions - bounding box and mass of a labelled region

use koki_core::Point2Di;

/// Bounding box and pixel count of a labelled region.
///
/// In screen coordinates, where `(0, 0)` is the top left, `min` is the top
/// left corner of the bounding box and `max` the bottom right. Both corners
/// are inclusive, so a single pixel has `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRegion {
    /// Top left corner
    pub min: Point2Di,
    /// Bottom right corner
    pub max: Point2Di,
    /// Number of pixels in the region
    pub mass: u32,
}

impl ClipRegion {
    /// A region consisting of the single pixel `(x, y)`
    pub fn from_pixel(x: i32, y: i32) -> Self {
        let p = Point2Di::new(x, y);
        Self {
            min: p,
            max: p,
            mass: 1,
        }
    }

    /// Add pixel `(x, y)` to the region.
    #[inline]
    pub fn extend(&mut self, x: i32, y: i32) {
        let p = Point2Di::new(x, y);
        self.min = self.min.min(p);
        self.max = self.max.max(p);
        self.mass += 1;
    }

    /// Fold another region into this one (box union, mass sum).
    #[inline]
    pub fn merge(&mut self, other: &ClipRegion) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.mass += other.mass;
    }

    /// Bounding box width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x + 1) as u32
    }

    /// Bounding box height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y + 1) as u32
    }

    /// Bounding box area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether `(x, y)` lies inside the bounding box
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    /// Fraction of the bounding box covered by region pixels
    pub fn fill_ratio(&self) -> f32 {
        self.mass as f32 / self.area() as f32
    }

    /// Whether the bounding box comes within `margin` pixels of the edge of
    /// a `width` x `height` image. A margin of 0 never matches.
    pub fn touches_border(&self, width: u32, height: u32, margin: u32) -> bool {
        if margin == 0 {
            return false;
        }
        let margin = margin as i64;
        (self.min.x as i64) < margin
            || (self.min.y as i64) < margin
            || (self.max.x as i64) >= width as i64 - margin
            || (self.max.y as i64) >= height as i64 - margin
    }
}
