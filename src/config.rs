//! JSON job configuration for the CLI driver.

use crate::compositor::ComposeOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the composed canvas (and optional JSON report) are written.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Output image path; the encoder is inferred from the extension.
    pub image_out: PathBuf,
    /// Optional path for the JSON [`ComposeReport`](crate::types::ComposeReport).
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

/// A full composition job: the input pair, output targets and layout knobs.
#[derive(Clone, Debug, Deserialize)]
pub struct JobConfig {
    pub image1_path: PathBuf,
    pub image2_path: PathBuf,
    pub output: OutputConfig,
    #[serde(default)]
    pub compose: ComposeOptions,
}

pub fn load_config(path: &Path) -> Result<JobConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
