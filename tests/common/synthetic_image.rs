use image::{Rgb, RgbImage};

/// Generates a solid-color RGB image.
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Generates an image whose left and right halves carry different colors,
/// split at `floor(width / 2)`.
pub fn two_tone_rgb(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let split = width / 2;
    RgbImage::from_fn(width, height, |x, _| {
        if x < split {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
}
