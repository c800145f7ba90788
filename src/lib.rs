#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod compositor;
pub mod config;
pub mod image;
pub mod job;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: in-memory composition + the job result record.
pub use crate::compositor::{compose_pair, ComposeOptions, Composition, CropMode};
pub use crate::types::ComposeReport;

// Config types consumed by the CLI driver.
pub use crate::config::{load_config, JobConfig, OutputConfig};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use diff_canvas::prelude::*;
/// use diff_canvas::image::io::{load_rgb_image, save_rgb_image};
/// use std::path::Path;
///
/// # fn main() -> Result<(), String> {
/// let before = load_rgb_image(Path::new("before.png"))?;
/// let after = load_rgb_image(Path::new("after.png"))?;
/// let composition = compose_pair(&before, &after, &ComposeOptions::split_view());
/// save_rgb_image(&composition.canvas, Path::new("diff.png"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::compositor::{compose_pair, ComposeOptions, CropMode};
    pub use crate::types::ComposeReport;
}
