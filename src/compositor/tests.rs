use super::options::ComposeOptions;
use super::pipeline::compose_pair;
use super::separator::draw_separator;
use image::{Rgb, RgbImage};

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

#[test]
fn separator_is_centered_on_the_seam() {
    let mut canvas = RgbImage::from_pixel(21, 4, Rgb(WHITE));
    draw_separator(&mut canvas, 10, 5, Rgb(BLACK));

    for x in 8..=12 {
        assert_eq!(canvas.get_pixel(x, 0), &Rgb(BLACK), "line column x={x}");
        assert_eq!(canvas.get_pixel(x, 3), &Rgb(BLACK), "line column x={x}");
    }
    assert_eq!(canvas.get_pixel(7, 0), &Rgb(WHITE));
    assert_eq!(canvas.get_pixel(13, 0), &Rgb(WHITE));
}

#[test]
fn separator_clips_at_the_canvas_edge() {
    let mut canvas = RgbImage::from_pixel(4, 2, Rgb(WHITE));
    draw_separator(&mut canvas, 0, 5, Rgb(BLACK));

    for x in 0..4 {
        assert_eq!(
            canvas.get_pixel(x, 0),
            &Rgb(BLACK),
            "clipped line should still cover x={x}"
        );
    }
}

#[test]
fn zero_width_separator_is_a_no_op() {
    let mut canvas = RgbImage::from_pixel(8, 8, Rgb(WHITE));
    let before = canvas.clone();
    draw_separator(&mut canvas, 4, 0, Rgb(BLACK));
    assert_eq!(canvas.as_raw(), before.as_raw());
}

#[test]
fn halves_mode_seam_is_the_canvas_midpoint() {
    let first = RgbImage::from_pixel(9, 3, Rgb([10, 20, 30]));
    let second = RgbImage::from_pixel(9, 3, Rgb([40, 50, 60]));
    let composition = compose_pair(&first, &second, &ComposeOptions::split_view());

    assert_eq!(composition.canvas.dimensions(), (9, 3));
    assert_eq!(composition.seam_x, 4);
    assert!(!composition.resampled_second);
}

#[test]
fn full_mode_respects_margin_arithmetic() {
    let first = RgbImage::from_pixel(7, 3, Rgb([200, 0, 0]));
    let second = RgbImage::from_pixel(7, 3, Rgb([0, 0, 200]));
    let options = ComposeOptions::side_by_side()
        .with_margin(4)
        .with_line_width(0);
    let composition = compose_pair(&first, &second, &options);

    assert_eq!(composition.canvas.dimensions(), (18, 3));
    assert_eq!(composition.seam_x, 9);
    // Placements intact on either side of the gap.
    assert_eq!(composition.canvas.get_pixel(6, 1), &Rgb([200, 0, 0]));
    assert_eq!(composition.canvas.get_pixel(11, 1), &Rgb([0, 0, 200]));
    // Background shows through the gap.
    assert_eq!(composition.canvas.get_pixel(8, 1), &Rgb(WHITE));
}
