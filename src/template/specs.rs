//! Static per-template lookup tables.
//!
//! Everything here is hand-authored: nominal proportions, paint colours,
//! window layouts and wheel placement. Fractions refer to the body's length
//! (x, front = 0) and height (y, ground = 0).

use super::TemplateId;
use serde::Serialize;

/// Window layout on each side of the body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowPattern {
    pub count: u8,
    /// `[start, end]` along the length.
    pub span: [f32; 2],
    /// `[bottom, top]` along the height.
    pub band: [f32; 2],
    /// Gap between neighbouring windows, as a fraction of the span.
    pub gap: f32,
}

impl WindowPattern {
    /// `[start, end]` of each window along the length.
    pub fn slots(&self) -> Vec<[f32; 2]> {
        if self.count == 0 {
            return Vec::new();
        }
        let n = self.count as f32;
        let total = self.span[1] - self.span[0];
        let gap = total * self.gap;
        let width = (total - gap * (n - 1.0)) / n;
        (0..self.count)
            .map(|i| {
                let start = self.span[0] + i as f32 * (width + gap);
                [start, start + width]
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec {
    pub id: TemplateId,
    /// Length / height of the hand-authored body.
    pub nominal_ratio: f32,
    /// Default paint as `0xRRGGBB`.
    pub color: u32,
    pub windows: WindowPattern,
    /// Axle positions along the length.
    pub wheel_positions: &'static [f32],
    /// Wheel radius as a fraction of body height.
    pub wheel_radius: f32,
}

impl TemplateSpec {
    /// Linear RGB in [0, 1].
    pub fn rgb(&self) -> [f32; 3] {
        let c = self.color;
        [
            ((c >> 16) & 0xff) as f32 / 255.0,
            ((c >> 8) & 0xff) as f32 / 255.0,
            (c & 0xff) as f32 / 255.0,
        ]
    }
}

const SEDAN: TemplateSpec = TemplateSpec {
    id: TemplateId::Sedan,
    nominal_ratio: 2.2,
    color: 0xe74c3c,
    windows: WindowPattern {
        count: 2,
        span: [0.4, 0.67],
        band: [0.58, 0.92],
        gap: 0.08,
    },
    wheel_positions: &[0.2, 0.8],
    wheel_radius: 0.28,
};

const SEDAN_TYPE2: TemplateSpec = TemplateSpec {
    id: TemplateId::SedanType2,
    nominal_ratio: 2.8,
    color: 0xc0392b,
    windows: WindowPattern {
        count: 2,
        span: [0.37, 0.68],
        band: [0.55, 0.92],
        gap: 0.06,
    },
    wheel_positions: &[0.18, 0.82],
    wheel_radius: 0.26,
};

const SUV: TemplateSpec = TemplateSpec {
    id: TemplateId::Suv,
    nominal_ratio: 2.0,
    color: 0x27ae60,
    windows: WindowPattern {
        count: 3,
        span: [0.34, 0.95],
        band: [0.6, 0.92],
        gap: 0.05,
    },
    wheel_positions: &[0.2, 0.8],
    wheel_radius: 0.3,
};

const TRUCK: TemplateSpec = TemplateSpec {
    id: TemplateId::Truck,
    nominal_ratio: 2.4,
    color: 0xe67e22,
    windows: WindowPattern {
        count: 1,
        span: [0.15, 0.42],
        band: [0.6, 0.92],
        gap: 0.0,
    },
    wheel_positions: &[0.2, 0.78],
    wheel_radius: 0.3,
};

const BUS: TemplateSpec = TemplateSpec {
    id: TemplateId::Bus,
    nominal_ratio: 2.6,
    color: 0xf1c40f,
    windows: WindowPattern {
        count: 5,
        span: [0.08, 0.95],
        band: [0.55, 0.88],
        gap: 0.04,
    },
    wheel_positions: &[0.16, 0.84],
    wheel_radius: 0.2,
};

const SPORTS: TemplateSpec = TemplateSpec {
    id: TemplateId::Sports,
    nominal_ratio: 3.0,
    color: 0x3498db,
    windows: WindowPattern {
        count: 1,
        span: [0.4, 0.58],
        band: [0.55, 0.82],
        gap: 0.0,
    },
    wheel_positions: &[0.2, 0.8],
    wheel_radius: 0.32,
};

pub fn spec_for(id: TemplateId) -> &'static TemplateSpec {
    match id {
        TemplateId::Sedan => &SEDAN,
        TemplateId::SedanType2 => &SEDAN_TYPE2,
        TemplateId::Suv => &SUV,
        TemplateId::Truck => &TRUCK,
        TemplateId::Bus => &BUS,
        TemplateId::Sports => &SPORTS,
    }
}
