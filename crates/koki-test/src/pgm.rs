//! Minimal binary PGM (P5) writer for inspecting test output

use koki_core::GrayImage;
use std::io::Write;

/// Write a `GrayImage` as a binary PGM (P5) with maxval 255.
pub fn write_pgm<W: Write>(image: &GrayImage, mut writer: W) -> std::io::Result<()> {
    write!(writer, "P5\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.data())?;
    writer.flush()
}
