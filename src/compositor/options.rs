//! Knobs for the composition pipeline.
//!
//! The two historical behaviours of the tool are presets of the same
//! pipeline: [`ComposeOptions::split_view`] splices complementary halves
//! with a hairline separator, while [`ComposeOptions::side_by_side`] keeps
//! both images whole and separates them with a margin and a thicker line.

use serde::Deserialize;

/// Default canvas background (white).
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Default separator color (black).
pub const SEPARATOR_COLOR: [u8; 3] = [0, 0, 0];

/// Which part of each source image is placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
    /// Left half of the first image next to the right half of the second.
    Halves,
    /// Both images in full.
    Full,
}

/// Options controlling canvas layout and separator rendering.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    pub crop: CropMode,
    /// Blank gap between the two placements, in pixels. The canvas
    /// background shows through the gap.
    pub margin: u32,
    /// Separator stroke width in pixels; `0` disables the line.
    pub line_width: u32,
    /// Separator color (RGB).
    pub line_color: [u8; 3],
    /// Canvas background color (RGB).
    pub background: [u8; 3],
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self::split_view()
    }
}

impl ComposeOptions {
    /// Halves spliced edge to edge, marked with a 1px hairline.
    pub fn split_view() -> Self {
        Self {
            crop: CropMode::Halves,
            margin: 0,
            line_width: 1,
            line_color: SEPARATOR_COLOR,
            background: BACKGROUND_COLOR,
        }
    }

    /// Full images separated by a 10px margin and a 5px line.
    pub fn side_by_side() -> Self {
        Self {
            crop: CropMode::Full,
            margin: 10,
            line_width: 5,
            ..Self::split_view()
        }
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_line_color(mut self, line_color: [u8; 3]) -> Self {
        self.line_color = line_color;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}
