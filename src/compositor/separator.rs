//! Vertical separator rendering.

use image::{Rgb, RgbImage};
use log::warn;

/// Draw a vertical line of `line_width` columns centered on `seam_x`,
/// spanning the full canvas height.
///
/// Columns falling outside the canvas are clipped. Drawing is idempotent
/// for a solid color.
pub fn draw_separator(canvas: &mut RgbImage, seam_x: u32, line_width: u32, color: Rgb<u8>) {
    if line_width == 0 {
        return;
    }
    let x0 = seam_x.saturating_sub(line_width / 2);
    let x1 = x0.saturating_add(line_width).min(canvas.width());
    if x1.saturating_sub(x0) < line_width {
        warn!(
            "separator clipped to columns {x0}..{x1} on a {}px-wide canvas",
            canvas.width()
        );
    }
    for x in x0..x1 {
        for y in 0..canvas.height() {
            canvas.put_pixel(x, y, color);
        }
    }
}
