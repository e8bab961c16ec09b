//! Canvas sampler: turns an RGBA drawing into an ink mask and its bounds.
//!
//! A pixel is *ink* when it is sufficiently opaque and not near-white. One
//! near-white threshold is applied everywhere in the crate, so the mask, the
//! bounds and the profiles all agree on what counts as a stroke.
//!
//! The full-canvas scans run row-parallel with rayon. Every reduction is over
//! integers (counts, min/max), which keeps results identical to a sequential
//! scan.
//!
//! Submodules
//! - [`regions`] – 8-connected component labelling (largest region isolation).
//! - [`windows`] – bluish window-region detection.

pub mod regions;
pub mod windows;

use crate::error::{ConvertError, Result};
use crate::image::{ImageRgba, ImageView};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Options deciding which pixels are ink and how much ink is enough.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkOptions {
    /// Pixels with alpha at or below this value are background.
    pub alpha_threshold: u8,
    /// Pixels whose r, g and b all exceed this value are background.
    pub near_white: u8,
    /// Absolute floor on the ink pixel count.
    pub min_ink_pixels: usize,
    /// Relative floor on the ink pixel count (fraction of canvas pixels).
    pub min_ink_fraction: f32,
    /// Keep only the largest 8-connected ink region before profiling.
    pub isolate_largest_region: bool,
}

impl Default for InkOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            near_white: 240,
            min_ink_pixels: 100,
            min_ink_fraction: 0.001,
            isolate_largest_region: true,
        }
    }
}

impl InkOptions {
    #[inline]
    pub fn is_ink(&self, px: &[u8]) -> bool {
        let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
        if a <= self.alpha_threshold {
            return false;
        }
        !(r > self.near_white && g > self.near_white && b > self.near_white)
    }

    /// Minimum number of ink pixels for a drawing of `total_pixels` to be
    /// classified: `max(min_ink_pixels, floor(min_ink_fraction * total))`.
    pub fn min_ink_for(&self, total_pixels: usize) -> usize {
        let relative = (total_pixels as f64 * self.min_ink_fraction as f64) as usize;
        self.min_ink_pixels.max(relative)
    }
}

/// Per-pixel ink mask (1 = ink, 0 = background), row-major, stride == width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InkMask {
    pub w: usize,
    pub h: usize,
    data: Vec<u8>,
    count: usize,
}

impl InkMask {
    /// Scan every pixel of `image` and mark ink.
    pub fn from_image(image: &ImageRgba<'_>, options: &InkOptions) -> Result<Self> {
        image.validate()?;
        let w = image.w;
        let h = image.h;
        let mut data = vec![0u8; w * h];
        let count = data
            .par_chunks_mut(w.max(1))
            .enumerate()
            .map(|(y, out)| {
                let row = image.row(y);
                let mut n = 0usize;
                for (dst, px) in out.iter_mut().zip(row.chunks_exact(4)) {
                    if options.is_ink(px) {
                        *dst = 1;
                        n += 1;
                    }
                }
                n
            })
            .sum();
        Ok(Self { w, h, data, count })
    }

    /// Build a mask from raw 0/1 values.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self> {
        if w.checked_mul(h) != Some(data.len()) {
            return Err(ConvertError::unavailable(format!(
                "mask holds {} values, {w}x{h} needs {}",
                data.len(),
                w.saturating_mul(h)
            )));
        }
        let count = data.iter().filter(|&&v| v != 0).count();
        Ok(Self { w, h, data, count })
    }

    /// Mask containing only the listed pixel indices, all below `w * h`.
    pub(crate) fn from_indices(w: usize, h: usize, indices: &[usize]) -> Self {
        let mut data = vec![0u8; w * h];
        for &idx in indices {
            data[idx] = 1;
        }
        Self {
            w,
            h,
            data,
            count: indices.len(),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.data[idx] != 0
    }

    /// Number of ink pixels.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ImageView for InkMask {
    const CHANNELS: usize = 1;

    fn width(&self) -> usize {
        self.w
    }
    fn height(&self) -> usize {
        self.h
    }
    fn stride(&self) -> usize {
        self.w
    }
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

/// Axis-aligned bounding box of ink pixels, in canvas pixels.
///
/// An empty drawing has all-zero bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl DrawingBounds {
    pub fn from_mask(mask: &InkMask) -> Self {
        if mask.is_empty() {
            return Self::default();
        }
        let extent = mask
            .as_slice()
            .par_chunks(mask.w.max(1))
            .enumerate()
            .filter_map(|(y, row)| {
                let first = row.iter().position(|&v| v != 0)?;
                let last = row.iter().rposition(|&v| v != 0)?;
                Some(Extent {
                    min_x: first,
                    max_x: last,
                    min_y: y,
                    max_y: y,
                })
            })
            .reduce_with(Extent::union);
        extent.map(Extent::into_bounds).unwrap_or_default()
    }

    pub(crate) fn from_corners(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Exclusive right edge.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Width / height, or 0 for empty bounds.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[derive(Clone, Copy)]
struct Extent {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl Extent {
    fn union(a: Self, b: Self) -> Self {
        Self {
            min_x: a.min_x.min(b.min_x),
            max_x: a.max_x.max(b.max_x),
            min_y: a.min_y.min(b.min_y),
            max_y: a.max_y.max(b.max_y),
        }
    }

    fn into_bounds(self) -> DrawingBounds {
        DrawingBounds::from_corners(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
