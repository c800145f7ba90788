//! Dimension alignment and half-cropping.

use image::imageops::{self, FilterType};
use image::RgbImage;
use log::debug;

/// Which half of a source image to extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalfSide {
    Left,
    Right,
}

/// Resample `image` to exactly `width` x `height` with a bicubic filter.
///
/// Aspect ratio is intentionally not preserved; mismatched pairs are
/// distorted rather than rejected.
pub fn resample_to(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    debug!(
        "resampling {}x{} -> {width}x{height}",
        image.width(),
        image.height()
    );
    imageops::resize(image, width, height, FilterType::CatmullRom)
}

/// Crop out the left or right half of `image` as a new owned buffer.
///
/// Half width is `floor(width / 2)`, so for odd widths the left half comes
/// out 1px narrower than the right half. The source is unmodified.
pub fn crop_half(image: &RgbImage, side: HalfSide) -> RgbImage {
    let width = image.width();
    let half_width = width / 2;
    let (x0, w) = match side {
        HalfSide::Left => (0, half_width),
        HalfSide::Right => (half_width, width - half_width),
    };
    imageops::crop_imm(image, x0, 0, w, image.height()).to_image()
}
