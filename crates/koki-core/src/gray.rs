//! GrayImage - single-channel 8-bit image container
//!
//! A dense, row-major intensity grid. Pixel `(x, y)` lives at
//! `data[y * width + x]`. Dimensions are bounded by `u16` so that every
//! coordinate fits the label tables built on top of it.

use crate::error::{Error, Result};

/// Single-channel 8-bit image
///
/// # Examples
///
/// ```
/// use koki_core::GrayImage;
///
/// let mut img = GrayImage::new(4, 3).unwrap();
/// img.set_pixel(1, 2, 200).unwrap();
/// assert_eq!(img.get_pixel(1, 2), Some(200));
/// assert_eq!(img.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image with all pixels set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new image with all pixels set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u16, height: u16, value: u8) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_raw(width: u16, height: u16, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw row-major pixel data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u16) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Get a pixel value, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width as u32 || y >= self.height as u32 {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `(x, y)` lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width as u32 || y >= self.height as u32 {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width as u32,
                height: self.height as u32,
            });
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
        Ok(())
    }

    /// Check whether two images have the same dimensions
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.width == other.width && self.height == other.height
    }
}

fn check_dimensions(width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension {
            width: width as u32,
            height: height as u32,
        });
    }
    Ok(())
}
