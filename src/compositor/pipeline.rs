//! In-memory composition of an image pair.

use super::options::{ComposeOptions, CropMode};
use super::separator::draw_separator;
use crate::image::ops::{crop_half, resample_to, HalfSide};
use image::{imageops, Rgb, RgbImage};
use log::debug;
use std::borrow::Cow;

/// A composed canvas together with its seam metadata.
#[derive(Clone, Debug)]
pub struct Composition {
    /// The finished canvas, background-filled outside the pasted regions.
    pub canvas: RgbImage,
    /// X coordinate of the boundary the separator is centered on.
    pub seam_x: u32,
    /// Whether the second image was resampled to match the first.
    pub resampled_second: bool,
}

/// Compose `first` and `second` into a single canvas per `options`.
///
/// When the dimensions differ, the second image is resampled to the first
/// image's exact size before placement. Neither input is modified; the
/// canvas is a fresh allocation. The seam sits at
/// `left placement width + margin / 2`, which is the canvas midpoint for
/// spliced halves and the center of the gap for the side-by-side layout.
pub fn compose_pair(first: &RgbImage, second: &RgbImage, options: &ComposeOptions) -> Composition {
    let (width, height) = first.dimensions();

    let resampled_second = second.dimensions() != (width, height);
    let second = if resampled_second {
        Cow::Owned(resample_to(second, width, height))
    } else {
        Cow::Borrowed(second)
    };

    let (left, right): (Cow<'_, RgbImage>, Cow<'_, RgbImage>) = match options.crop {
        CropMode::Halves => (
            Cow::Owned(crop_half(first, HalfSide::Left)),
            Cow::Owned(crop_half(&second, HalfSide::Right)),
        ),
        CropMode::Full => (Cow::Borrowed(first), second),
    };

    let canvas_height = left.height().max(right.height());
    let canvas_width = left.width() + options.margin + right.width();
    let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, Rgb(options.background));

    imageops::replace(&mut canvas, left.as_ref(), 0, 0);
    imageops::replace(
        &mut canvas,
        right.as_ref(),
        i64::from(left.width() + options.margin),
        0,
    );

    let seam_x = left.width() + options.margin / 2;
    draw_separator(&mut canvas, seam_x, options.line_width, Rgb(options.line_color));

    debug!(
        "composed {canvas_width}x{canvas_height} canvas (crop={:?}, margin={}, seam_x={seam_x})",
        options.crop, options.margin
    );

    Composition {
        canvas,
        seam_x,
        resampled_second,
    }
}
