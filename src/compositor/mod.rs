//! Side-by-side composition pipeline.
//!
//! Overview
//! - Normalizes the pair: when dimensions differ, the second image is
//!   resampled to the first image's exact size.
//! - Selects placements per [`CropMode`]: complementary halves of each
//!   source, or both images in full.
//! - Allocates a background-colored canvas sized to the placements plus the
//!   configured margin, pastes both placements, and draws a vertical
//!   separator centered on the seam.
//!
//! Modules
//! - [`options`] – the `ComposeOptions` knobs and the two layout presets.
//! - `pipeline` – the in-memory composition entry point.
//! - `separator` – vertical line rendering with edge clamping.

pub mod options;
mod pipeline;
mod separator;

pub use options::{ComposeOptions, CropMode};
pub use pipeline::{compose_pair, Composition};
pub use separator::draw_separator;

#[cfg(test)]
mod tests;
