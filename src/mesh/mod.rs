//! Procedural 3D box-car builder.
//!
//! The body is the template's side-view outline scaled to the requested
//! dimensions and extruded along z. Wheels are cylinders on both sides at the
//! template's axle positions; windows are translucent quads just outside both
//! side faces. Every call builds a fresh [`BoxcarMesh`]; nothing is cached or
//! updated incrementally.
//!
//! World frame: x runs along the car (front bumper at `-length / 2`), y is
//! up with the ground at `y = 0`, z spans the car's depth.
//!
//! Modules
//! - `outline` – unit-space side profiles per template.
//! - `triangulate` – ear clipping for outline caps.
//! - `primitives` – triangle-mesh building blocks.
//! - [`camera`] – framing the finished mesh.
//! - [`obj`] – Wavefront OBJ export.

pub mod camera;
pub mod obj;
mod outline;
mod primitives;
mod triangulate;

pub use camera::{fit_camera, CameraFit, CameraOptions};
pub use outline::{profile_outline, signed_area};
pub use primitives::{cylinder, extrude_polygon, quad_xy, TriangleMesh};
pub use triangulate::triangulate;

use crate::sampler::windows::WindowRegion;
use crate::template::TemplateMapping;
use log::debug;
use nalgebra::{Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

const WHEEL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
const WINDOW_COLOR: [f32; 4] = [0.6, 0.8, 1.0, 0.5];
/// Distance of window quads from the body side, relative to depth.
const WINDOW_OFFSET: f32 = 0.01;

/// Unscaled body size in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDimensions {
    pub length: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            length: 4.0,
            height: 1.5,
            depth: 1.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    pub body: BodyDimensions,
    /// Sides per wheel cylinder.
    pub wheel_segments: usize,
    /// Wheel width as a fraction of body depth.
    pub wheel_width: f32,
    /// Place windows where the drawing has them when any were detected.
    pub use_detected_windows: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            body: BodyDimensions::default(),
            wheel_segments: 24,
            wheel_width: 0.25,
            use_detected_windows: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Body,
    Wheel,
    Window,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshPart {
    pub name: String,
    pub kind: PartKind,
    pub mesh: TriangleMesh,
    /// Linear RGBA in [0, 1].
    pub color: [f32; 4],
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn extend(&mut self, p: &Point3<f32>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f32> {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.max - self.min
        }
    }
}

/// Generated car: body, wheels and windows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxcarMesh {
    pub parts: Vec<MeshPart>,
    pub bounds: Aabb,
}

impl BoxcarMesh {
    pub fn parts_of(&self, kind: PartKind) -> impl Iterator<Item = &MeshPart> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertex_count()).sum()
    }
}

/// Build the car for `mapping`.
///
/// `windows` are the regions detected in the drawing; they replace the
/// template's window pattern along the length when
/// [`MeshOptions::use_detected_windows`] is set and at least one exists.
pub fn build_boxcar(
    mapping: &TemplateMapping,
    windows: &[WindowRegion],
    options: &MeshOptions,
) -> BoxcarMesh {
    let adj = &mapping.adjustments;
    let spec = &mapping.spec;
    let length = options.body.length * adj.scale[0];
    let height = options.body.height * adj.scale[1];
    let depth = options.body.depth * adj.scale[2];
    let offset = Vector3::new(
        adj.position[0] * length,
        adj.position[1] * height,
        adj.position[2] * depth,
    );
    let to_world = |fx: f32, fy: f32| [(fx - 0.5) * length, fy * height];

    let mut parts = Vec::new();

    let outline: Vec<[f32; 2]> = profile_outline(mapping.template)
        .iter()
        .map(|&[fx, fy]| to_world(fx, fy))
        .collect();
    let [r, g, b] = spec.rgb();
    parts.push(MeshPart {
        name: "body".to_string(),
        kind: PartKind::Body,
        mesh: extrude_polygon(&outline, depth),
        color: [r, g, b, 1.0],
    });

    // Wheels are placed in ground coordinates: centred one radius up.
    let radius = spec.wheel_radius * height;
    let wheel_width = options.wheel_width * depth;
    for (axle, &fx) in spec.wheel_positions.iter().enumerate() {
        for (side, z) in [("left", depth * 0.5), ("right", -depth * 0.5)] {
            let [x, _] = to_world(fx, 0.0);
            let center = Point3::new(x, radius - offset.y, z);
            parts.push(MeshPart {
                name: format!("wheel_{axle}_{side}"),
                kind: PartKind::Wheel,
                mesh: cylinder(center, radius, wheel_width, options.wheel_segments),
                color: WHEEL_COLOR,
            });
        }
    }

    let band = spec.windows.band;
    let slots: Vec<[f32; 2]> = if options.use_detected_windows && !windows.is_empty() {
        windows
            .iter()
            .map(|w| {
                let start = w.relative[0].clamp(0.02, 0.98);
                let end = (w.relative[0] + w.relative[2]).clamp(start, 0.98);
                [start, end]
            })
            .filter(|[s, e]| e > s)
            .collect()
    } else {
        spec.windows.slots()
    };
    let z_out = depth * (0.5 + WINDOW_OFFSET);
    for (i, [start, end]) in slots.iter().copied().enumerate() {
        let [x0, y0] = to_world(start, band[0]);
        let [x1, y1] = to_world(end, band[1]);
        for (side, z, facing) in [("left", z_out, true), ("right", -z_out, false)] {
            parts.push(MeshPart {
                name: format!("window_{i}_{side}"),
                kind: PartKind::Window,
                mesh: quad_xy([x0, x1], [y0, y1], z, facing),
                color: WINDOW_COLOR,
            });
        }
    }

    let rotation = Rotation3::from_euler_angles(adj.rotation[0], adj.rotation[1], adj.rotation[2]);
    let mut bounds = Aabb::empty();
    for part in &mut parts {
        part.mesh.transform(|p| rotation * (p + offset), |n| rotation * n);
        for p in &part.mesh.positions {
            bounds.extend(p);
        }
    }

    debug!(
        "build_boxcar: template={:?} parts={} bounds={:?}",
        mapping.template,
        parts.len(),
        bounds
    );
    BoxcarMesh { parts, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{CarType, Classification, Rule};
    use crate::profile::ShapeProfile;
    use crate::template::{map_template, TemplateId};

    fn mapping_for(car_type: CarType, length: u32, height: u32) -> TemplateMapping {
        let classification = Classification {
            car_type,
            confidence: 0.8,
            rule: Rule::Fallback,
        };
        let profile = ShapeProfile::from_height_profile(length, height, [50, 50, 50]);
        map_template(&classification, &profile)
    }

    #[test]
    fn sedan_has_body_four_wheels_and_pattern_windows() {
        let mapping = mapping_for(CarType::Sedan, 220, 100);
        let mesh = build_boxcar(&mapping, &[], &MeshOptions::default());
        assert_eq!(mesh.parts_of(PartKind::Body).count(), 1);
        assert_eq!(mesh.parts_of(PartKind::Wheel).count(), 4);
        assert_eq!(mesh.parts_of(PartKind::Window).count(), 4);
        assert!(mesh.parts.iter().all(|p| !p.mesh.is_empty()));
    }

    #[test]
    fn wheels_rest_on_the_ground() {
        for car_type in CarType::ALL {
            let mapping = mapping_for(car_type, 250, 100);
            let mesh = build_boxcar(&mapping, &[], &MeshOptions::default());
            assert!(
                mesh.bounds.min.y.abs() < 1e-4,
                "{car_type}: lowest point at {}",
                mesh.bounds.min.y
            );
        }
    }

    #[test]
    fn bounds_follow_scaled_dimensions() {
        let mapping = mapping_for(CarType::Bus, 260, 100);
        assert_eq!(mapping.template, TemplateId::Bus);
        let opts = MeshOptions::default();
        let mesh = build_boxcar(&mapping, &[], &opts);
        let size = mesh.bounds.size();
        assert!((size.x - opts.body.length).abs() < 1e-4);
        // Body height plus the ground clearance under it.
        let clearance = mapping.spec.wheel_radius * 0.5 * opts.body.height;
        assert!((size.y - (opts.body.height + clearance)).abs() < 1e-4);
        // Wheels and windows stick out past the body sides.
        assert!(size.z > opts.body.depth);
    }

    #[test]
    fn detected_windows_replace_pattern() {
        let mapping = mapping_for(CarType::Bus, 260, 100);
        let windows = vec![WindowRegion {
            bounds: Default::default(),
            relative: [0.3, 0.1, 0.2, 0.2],
            pixel_count: 100,
        }];
        let mesh = build_boxcar(&mapping, &windows, &MeshOptions::default());
        assert_eq!(mesh.parts_of(PartKind::Window).count(), 2);

        let ignore = MeshOptions {
            use_detected_windows: false,
            ..Default::default()
        };
        let mesh = build_boxcar(&mapping, &windows, &ignore);
        assert_eq!(mesh.parts_of(PartKind::Window).count(), 10);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let mapping = mapping_for(CarType::Truck, 300, 100);
        let a = build_boxcar(&mapping, &[], &MeshOptions::default());
        let b = build_boxcar(&mapping, &[], &MeshOptions::default());
        assert_eq!(a, b);
    }
}
