//! 8-connected component labelling over pixel predicates.
//!
//! Regions are grown breadth-first from seeds visited in row-major order, so
//! labelling is deterministic: the same mask always yields the same regions
//! in the same order.

use super::{DrawingBounds, InkMask};
use std::collections::VecDeque;

pub(crate) const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Pixels of one connected region together with its bounding box.
#[derive(Clone, Debug)]
pub struct PixelRegion {
    pub indices: Vec<usize>,
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl PixelRegion {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            min_x: usize::MAX,
            max_x: 0,
            min_y: usize::MAX,
            max_y: 0,
        }
    }

    fn reset(&mut self) {
        self.indices.clear();
        self.min_x = usize::MAX;
        self.max_x = 0;
        self.min_y = usize::MAX;
        self.max_y = 0;
    }

    fn push(&mut self, idx: usize, x: usize, y: usize) {
        self.indices.push(idx);
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bounds(&self) -> DrawingBounds {
        if self.indices.is_empty() {
            DrawingBounds::default()
        } else {
            DrawingBounds::from_corners(self.min_x, self.min_y, self.max_x, self.max_y)
        }
    }
}

/// Visit every 8-connected region of pixels satisfying `member`.
///
/// `visit` receives each finished region; the region buffer is reused, so
/// callers that keep a region must clone or swap it out.
pub fn for_each_region<P, V>(width: usize, height: usize, member: P, mut visit: V)
where
    P: Fn(usize) -> bool,
    V: FnMut(&mut PixelRegion),
{
    let n = width * height;
    let mut visited = vec![false; n];
    let mut queue = VecDeque::with_capacity(64);
    let mut region = PixelRegion::with_capacity(128);

    for seed in 0..n {
        if visited[seed] || !member(seed) {
            continue;
        }
        region.reset();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(idx) = queue.pop_front() {
            let x = idx % width;
            let y = idx / width;
            region.push(idx, x, y);

            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= width as isize || yn >= height as isize {
                    continue;
                }
                let neighbor = yn as usize * width + xn as usize;
                if visited[neighbor] || !member(neighbor) {
                    continue;
                }
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }

        visit(&mut region);
    }
}

/// Count the 8-connected ink regions of `mask`.
pub fn count_regions(mask: &InkMask) -> usize {
    let mut count = 0;
    for_each_region(mask.w, mask.h, |idx| mask.is_set(idx), |_| count += 1);
    count
}

/// Keep only the largest 8-connected ink region.
///
/// Ties resolve to the region whose first pixel comes earliest in row-major
/// order. Returns `None` for an empty mask.
pub fn largest_region(mask: &InkMask) -> Option<InkMask> {
    let mut best = PixelRegion::with_capacity(0);
    for_each_region(
        mask.w,
        mask.h,
        |idx| mask.is_set(idx),
        |region| {
            if region.len() > best.len() {
                std::mem::swap(&mut best, region);
            }
        },
    );
    if best.is_empty() {
        return None;
    }
    Some(InkMask::from_indices(mask.w, mask.h, &best.indices))
}
