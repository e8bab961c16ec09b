//! Side-view body outlines, one per template.
//!
//! Each outline is a closed, counter-clockwise, simple polygon in unit space:
//! x runs from the front bumper (0) to the rear (1), y from the body floor (0)
//! to the roof (1). The last vertex connects back to the first.

use crate::template::TemplateId;

const SEDAN: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.5],   // trunk lid
    [0.8, 0.55],  // rear window base
    [0.68, 1.0],  // roof
    [0.38, 1.0],
    [0.25, 0.55], // windshield base
    [0.0, 0.45],  // bonnet
];

const SEDAN_TYPE2: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.45],
    [0.82, 0.5],
    [0.7, 1.0],
    [0.35, 1.0],
    [0.22, 0.5],
    [0.0, 0.42],
];

const SUV: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.95],
    [0.97, 1.0],
    [0.32, 1.0],
    [0.2, 0.6],
    [0.0, 0.55],
];

const TRUCK: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.5],   // tailgate
    [0.45, 0.5],  // bed floor meets cab
    [0.45, 1.0],  // cab back
    [0.12, 1.0],
    [0.05, 0.6],
    [0.0, 0.55],
];

const BUS: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.95],
    [0.97, 1.0],
    [0.03, 1.0],
    [0.0, 0.95],
];

const SPORTS: &[[f32; 2]] = &[
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 0.45],
    [0.75, 0.55],
    [0.6, 0.85],
    [0.38, 0.85],
    [0.18, 0.45],
    [0.0, 0.35],
];

pub fn profile_outline(template: TemplateId) -> &'static [[f32; 2]] {
    match template {
        TemplateId::Sedan => SEDAN,
        TemplateId::SedanType2 => SEDAN_TYPE2,
        TemplateId::Suv => SUV,
        TemplateId::Truck => TRUCK,
        TemplateId::Bus => BUS,
        TemplateId::Sports => SPORTS,
    }
}

/// Signed area (shoelace); positive for counter-clockwise polygons.
pub fn signed_area(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let [x0, y0] = points[i];
        let [x1, y1] = points[(i + 1) % n];
        acc += x0 * y1 - x1 * y0;
    }
    acc * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines_are_ccw_and_unit_bounded() {
        for id in TemplateId::ALL {
            let outline = profile_outline(id);
            assert!(signed_area(outline) > 0.0, "{id:?} outline is not CCW");
            for &[x, y] in outline {
                assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
            }
            let top = outline.iter().map(|p| p[1]).fold(0.0f32, f32::max);
            let right = outline.iter().map(|p| p[0]).fold(0.0f32, f32::max);
            assert!(top > 0.8 && right == 1.0, "{id:?} does not span the unit box");
        }
    }

    #[test]
    fn bus_is_boxier_than_sports() {
        let bus = signed_area(profile_outline(TemplateId::Bus));
        let sports = signed_area(profile_outline(TemplateId::Sports));
        assert!(bus > 0.9);
        assert!(sports < 0.7);
    }
}
