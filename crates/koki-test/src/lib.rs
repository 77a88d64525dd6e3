//! koki-test - Regression test framework for koki
//!
//! Tests create a [`RegParams`], run a sequence of numbered checks against
//! it and assert on [`RegParams::cleanup`] at the end. Every failing check
//! is recorded and reported together, so one run shows all mismatches.
//!
//! # Usage
//!
//! ```ignore
//! use koki_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(9.0, clip.mass as f64, 0.0);
//! rp.write_grid(&labelled.to_visual_grid()?)?;
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". Display mode
//!   additionally writes intermediate grids to `tests/regout/` as PGM files.

mod error;
mod params;
mod pgm;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use pgm::write_pgm;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // koki-test is at crates/koki-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
