#![allow(dead_code)]

use boxcar_converter::image::io::RgbaImage;

pub const INK: [u8; 4] = [25, 25, 30, 255];
pub const WINDOW_BLUE: [u8; 4] = [40, 90, 230, 255];

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)` with `rgba`.
pub fn fill_rect(img: &mut RgbaImage, x0: usize, y0: usize, x1: usize, y1: usize, rgba: [u8; 4]) {
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, rgba);
        }
    }
}

/// Three solid blocks side by side, each `segment` pixels wide, with the
/// given vertical `[top, bottom)` spans, drawn at horizontal offset `x0`.
pub fn three_block_drawing(
    canvas: (usize, usize),
    x0: usize,
    segment: usize,
    spans: [(usize, usize); 3],
) -> RgbaImage {
    let mut img = RgbaImage::blank(canvas.0, canvas.1);
    for (i, (top, bottom)) in spans.into_iter().enumerate() {
        let xs = x0 + i * segment;
        fill_rect(&mut img, xs, top, xs + segment, bottom, INK);
    }
    img
}

/// Ground-standing silhouette: each block rises `heights[i]` pixels above
/// `baseline`.
pub fn silhouette(
    canvas: (usize, usize),
    x0: usize,
    segment: usize,
    baseline: usize,
    heights: [usize; 3],
) -> RgbaImage {
    three_block_drawing(canvas, x0, segment, heights.map(|h| (baseline - h, baseline)))
}

/// Opaque white canvas, as exported by a browser canvas with a white fill.
pub fn white_canvas(width: usize, height: usize) -> RgbaImage {
    let mut img = RgbaImage::blank(width, height);
    fill_rect(&mut img, 0, 0, width, height, [255, 255, 255, 255]);
    img
}
