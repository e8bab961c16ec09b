//! Coarse silhouette profiles of an ink mask.
//!
//! The drawing bounds are split into three segments along x (front, middle,
//! rear) and three along y (top, middle, bottom). Each segment reports the
//! extent of the ink it contains: vertical extent for the height profile,
//! horizontal extent for the width profile. Segment size is `dim / 3`
//! (integer division); the last segment absorbs the remainder so the three
//! segments always tile the bounds exactly.
//!
//! The centre of mass is the mean ink position relative to the bounds origin,
//! normalised by the bounds size, hence always in `[0, 1)`.

use crate::sampler::{DrawingBounds, InkMask};
use serde::Serialize;

/// Derived silhouette features consumed by the classifier and the mapper.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProfile {
    /// Bounds width / bounds height.
    pub aspect_ratio: f32,
    /// Max vertical ink extent per horizontal segment: front, middle, rear.
    pub height_profile: [u32; 3],
    /// Max horizontal ink extent per vertical segment: top, middle, bottom.
    pub width_profile: [u32; 3],
    /// Mean ink position normalised by bounds size.
    pub center_of_mass: [f32; 2],
    /// Bounds width in pixels.
    pub length: u32,
    /// Bounds height in pixels.
    pub height: u32,
    pub ink_pixels: usize,
}

impl ShapeProfile {
    /// Profile of `mask` restricted to `bounds`. Empty bounds give the
    /// all-zero profile.
    pub fn from_mask(mask: &InkMask, bounds: &DrawingBounds) -> Self {
        if bounds.is_empty() {
            return Self::default();
        }
        let (bx, by, bw, bh) = (bounds.x, bounds.y, bounds.width, bounds.height);

        let mut col_top = vec![usize::MAX; bw];
        let mut col_bottom = vec![0usize; bw];
        let mut row_left = vec![usize::MAX; bh];
        let mut row_right = vec![0usize; bh];
        let mut sum_x = 0u64;
        let mut sum_y = 0u64;
        let mut count = 0u64;

        for ly in 0..bh {
            for lx in 0..bw {
                if !mask.get(bx + lx, by + ly) {
                    continue;
                }
                col_top[lx] = col_top[lx].min(ly);
                col_bottom[lx] = col_bottom[lx].max(ly);
                row_left[ly] = row_left[ly].min(lx);
                row_right[ly] = row_right[ly].max(lx);
                sum_x += lx as u64;
                sum_y += ly as u64;
                count += 1;
            }
        }

        let height_profile =
            segment_ranges(bw).map(|(s, e)| span(&col_top[s..e], &col_bottom[s..e]));
        let width_profile =
            segment_ranges(bh).map(|(s, e)| span(&row_left[s..e], &row_right[s..e]));

        let center_of_mass = if count == 0 {
            [0.0, 0.0]
        } else {
            let mx = sum_x as f64 / count as f64;
            let my = sum_y as f64 / count as f64;
            [(mx / bw as f64) as f32, (my / bh as f64) as f32]
        };

        Self {
            aspect_ratio: bounds.aspect_ratio(),
            height_profile,
            width_profile,
            center_of_mass,
            length: bw as u32,
            height: bh as u32,
            ink_pixels: count as usize,
        }
    }

    /// Profile for a silhouette known only by its bounds and segment heights.
    ///
    /// Width profile is taken as the full length and the centre of mass as
    /// the bounds centre.
    pub fn from_height_profile(length: u32, height: u32, height_profile: [u32; 3]) -> Self {
        Self {
            aspect_ratio: if height == 0 {
                0.0
            } else {
                length as f32 / height as f32
            },
            height_profile,
            width_profile: [length; 3],
            center_of_mass: [0.5, 0.5],
            length,
            height,
            ink_pixels: 0,
        }
    }

    pub fn front(&self) -> f32 {
        self.height_profile[0] as f32
    }

    pub fn middle(&self) -> f32 {
        self.height_profile[1] as f32
    }

    pub fn rear(&self) -> f32 {
        self.height_profile[2] as f32
    }

    /// Mean of the three segment heights.
    pub fn mean_height(&self) -> f32 {
        self.height_profile.iter().map(|&h| h as f32).sum::<f32>() / 3.0
    }

    /// Length / height of the bounds, or 0 when degenerate.
    pub fn length_to_height(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.length as f32 / self.height as f32
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.length == 0 || self.height == 0
    }
}

/// Three half-open `[start, end)` ranges tiling `0..len`.
pub fn segment_ranges(len: usize) -> [(usize, usize); 3] {
    let seg = len / 3;
    [(0, seg), (seg, 2 * seg), (2 * seg, len)]
}

fn span(lo: &[usize], hi: &[usize]) -> u32 {
    let min = lo.iter().copied().min().unwrap_or(usize::MAX);
    if min == usize::MAX {
        return 0;
    }
    let max = lo
        .iter()
        .zip(hi)
        .filter(|(&l, _)| l != usize::MAX)
        .map(|(_, &h)| h)
        .max()
        .unwrap_or(min);
    (max - min + 1) as u32
}
