//! Window detection: bluish, opaque strokes inside the drawing bounds.
//!
//! Children colour car windows blue; the mesh builder can place window quads
//! where the drawing has them instead of using the template's fixed pattern.

use super::regions::for_each_region;
use super::DrawingBounds;
use crate::error::{ConvertError, Result};
use crate::image::ImageRgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub alpha_threshold: u8,
    /// Minimum blue channel value.
    pub min_blue: u8,
    /// Required lead of blue over red.
    pub red_margin: u8,
    /// Required lead of blue over green.
    pub green_margin: u8,
    /// Absolute minimum region size in pixels.
    pub min_area_px: usize,
    /// Minimum region size as a fraction of the drawing bounds area.
    pub min_area_fraction: f32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            min_blue: 120,
            red_margin: 40,
            green_margin: 20,
            min_area_px: 16,
            min_area_fraction: 0.002,
        }
    }
}

impl WindowOptions {
    #[inline]
    pub fn is_window(&self, px: [u8; 4]) -> bool {
        let [r, g, b, a] = px;
        a > self.alpha_threshold
            && b >= self.min_blue
            && b as i16 - r as i16 >= self.red_margin as i16
            && b as i16 - g as i16 >= self.green_margin as i16
    }
}

/// One detected window, in canvas pixels and relative to the drawing bounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRegion {
    pub bounds: DrawingBounds,
    /// `[x, y, width, height]` normalised by the drawing bounds, in [0, 1].
    pub relative: [f32; 4],
    pub pixel_count: usize,
}

/// Find bluish regions within `bounds`, sorted front (left) to rear.
pub fn detect_windows(
    image: &ImageRgba<'_>,
    bounds: &DrawingBounds,
    options: &WindowOptions,
) -> Result<Vec<WindowRegion>> {
    image.validate()?;
    if bounds.is_empty() {
        return Ok(Vec::new());
    }
    if bounds.right() > image.w || bounds.bottom() > image.h {
        return Err(ConvertError::unavailable(format!(
            "drawing bounds {bounds:?} exceed the {}x{} canvas",
            image.w, image.h
        )));
    }
    let (bw, bh) = (bounds.width, bounds.height);
    let min_area = options
        .min_area_px
        .max((bounds.area() as f64 * options.min_area_fraction as f64) as usize);

    let mut windows = Vec::new();
    for_each_region(
        bw,
        bh,
        |idx| options.is_window(image.pixel(bounds.x + idx % bw, bounds.y + idx / bw)),
        |region| {
            if region.len() < min_area {
                return;
            }
            let local = region.bounds();
            let abs = DrawingBounds {
                x: bounds.x + local.x,
                y: bounds.y + local.y,
                ..local
            };
            windows.push(WindowRegion {
                bounds: abs,
                relative: [
                    local.x as f32 / bw as f32,
                    local.y as f32 / bh as f32,
                    local.width as f32 / bw as f32,
                    local.height as f32 / bh as f32,
                ],
                pixel_count: region.len(),
            });
        },
    );
    windows.sort_by_key(|w| (w.bounds.x, w.bounds.y));
    Ok(windows)
}
