use serde::Serialize;
use std::path::PathBuf;

/// Structured record of a completed composition job.
#[derive(Clone, Debug, Serialize)]
pub struct ComposeReport {
    pub image1_path: PathBuf,
    pub image2_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// X coordinate of the boundary between the two placements.
    pub seam_x: u32,
    pub line_width: u32,
    /// Whether the second input was resampled to match the first.
    pub resampled_second: bool,
    pub latency_ms: f64,
}
