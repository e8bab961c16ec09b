//! Triangle-mesh primitives: extruded polygons, cylinders and quads.
//!
//! All primitives are emitted with flat (per-face) normals except the
//! cylinder mantle, which uses radial normals. Triangles wind
//! counter-clockwise when seen from outside.

use super::triangulate::triangulate;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use std::f32::consts::TAU;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TriangleMesh {
    pub positions: Vec<Point3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, position: Point3<f32>, normal: Vector3<f32>) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        idx
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn merge(&mut self, other: &TriangleMesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    /// Apply an affine point transform; normals follow the linear part.
    pub fn transform<F, G>(&mut self, point: F, normal: G)
    where
        F: Fn(&Point3<f32>) -> Point3<f32>,
        G: Fn(&Vector3<f32>) -> Vector3<f32>,
    {
        for p in &mut self.positions {
            *p = point(p);
        }
        for n in &mut self.normals {
            *n = normal(n).normalize();
        }
    }
}

/// Extrude a CCW polygon in the xy plane symmetrically along z.
pub fn extrude_polygon(outline: &[[f32; 2]], depth: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let n = outline.len();
    if n < 3 {
        return mesh;
    }
    let zf = depth * 0.5;
    let zb = -zf;
    let tris = triangulate(outline);

    // Caps.
    let front: Vec<u32> = outline
        .iter()
        .map(|&[x, y]| mesh.add_vertex(Point3::new(x, y, zf), Vector3::z()))
        .collect();
    for t in &tris {
        mesh.add_triangle(front[t[0] as usize], front[t[1] as usize], front[t[2] as usize]);
    }
    let back: Vec<u32> = outline
        .iter()
        .map(|&[x, y]| mesh.add_vertex(Point3::new(x, y, zb), -Vector3::z()))
        .collect();
    for t in &tris {
        mesh.add_triangle(back[t[0] as usize], back[t[2] as usize], back[t[1] as usize]);
    }

    // Side walls, one flat quad per edge.
    for i in 0..n {
        let [x0, y0] = outline[i];
        let [x1, y1] = outline[(i + 1) % n];
        let edge = Vector3::new(x1 - x0, y1 - y0, 0.0);
        if edge.norm() <= f32::EPSILON {
            continue;
        }
        let normal = Vector3::new(edge.y, -edge.x, 0.0).normalize();
        let a = mesh.add_vertex(Point3::new(x0, y0, zf), normal);
        let b = mesh.add_vertex(Point3::new(x1, y1, zf), normal);
        let c = mesh.add_vertex(Point3::new(x1, y1, zb), normal);
        let d = mesh.add_vertex(Point3::new(x0, y0, zb), normal);
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, d, c);
    }
    mesh
}

/// Closed cylinder with its axis along z.
pub fn cylinder(center: Point3<f32>, radius: f32, width: f32, segments: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let segments = segments.max(3);
    let zf = center.z + width * 0.5;
    let zb = center.z - width * 0.5;
    let ring: Vec<(f32, f32)> = (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            (theta.cos(), theta.sin())
        })
        .collect();

    for i in 0..segments {
        let (c0, s0) = ring[i];
        let (c1, s1) = ring[(i + 1) % segments];
        let n0 = Vector3::new(c0, s0, 0.0);
        let n1 = Vector3::new(c1, s1, 0.0);
        let p0 = (center.x + radius * c0, center.y + radius * s0);
        let p1 = (center.x + radius * c1, center.y + radius * s1);
        let a = mesh.add_vertex(Point3::new(p0.0, p0.1, zf), n0);
        let b = mesh.add_vertex(Point3::new(p1.0, p1.1, zf), n1);
        let c = mesh.add_vertex(Point3::new(p1.0, p1.1, zb), n1);
        let d = mesh.add_vertex(Point3::new(p0.0, p0.1, zb), n0);
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, d, c);
    }

    for (z, normal, flip) in [(zf, Vector3::z(), false), (zb, -Vector3::z(), true)] {
        let hub = mesh.add_vertex(Point3::new(center.x, center.y, z), normal);
        let rim: Vec<u32> = ring
            .iter()
            .map(|&(c, s)| {
                mesh.add_vertex(
                    Point3::new(center.x + radius * c, center.y + radius * s, z),
                    normal,
                )
            })
            .collect();
        for i in 0..segments {
            let (a, b) = (rim[i], rim[(i + 1) % segments]);
            if flip {
                mesh.add_triangle(hub, b, a);
            } else {
                mesh.add_triangle(hub, a, b);
            }
        }
    }
    mesh
}

/// Axis-aligned rectangle in the plane `z = z`, facing `+z` or `-z`.
pub fn quad_xy(x: [f32; 2], y: [f32; 2], z: f32, facing_positive: bool) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let normal = if facing_positive {
        Vector3::z()
    } else {
        -Vector3::z()
    };
    let v0 = mesh.add_vertex(Point3::new(x[0], y[0], z), normal);
    let v1 = mesh.add_vertex(Point3::new(x[1], y[0], z), normal);
    let v2 = mesh.add_vertex(Point3::new(x[1], y[1], z), normal);
    let v3 = mesh.add_vertex(Point3::new(x[0], y[1], z), normal);
    if facing_positive {
        mesh.add_triangle(v0, v1, v2);
        mesh.add_triangle(v0, v2, v3);
    } else {
        mesh.add_triangle(v0, v2, v1);
        mesh.add_triangle(v0, v3, v2);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every triangle's geometric normal agrees with its stored vertex normals.
    fn assert_outward(mesh: &TriangleMesh) {
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions[i as usize]);
            let face = (b - a).cross(&(c - a));
            if face.norm() < 1e-9 {
                continue;
            }
            let stored: Vector3<f32> = tri
                .iter()
                .map(|&i| mesh.normals[i as usize])
                .fold(Vector3::zeros(), |acc, n| acc + n);
            assert!(
                face.dot(&stored) > 0.0,
                "triangle {tri:?} winds against its normals"
            );
        }
    }

    #[test]
    fn extruded_square_is_a_closed_box() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let mesh = extrude_polygon(&square, 2.0);
        // 2 caps x 2 triangles + 4 walls x 2 triangles.
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count(), 4 + 4 + 16);
        assert_outward(&mesh);
        let zs: Vec<f32> = mesh.positions.iter().map(|p| p.z).collect();
        assert!(zs.iter().all(|&z| z == 1.0 || z == -1.0));
    }

    #[test]
    fn cylinder_counts_and_winding() {
        let mesh = cylinder(Point3::new(1.0, 2.0, 0.0), 0.5, 0.2, 12);
        assert_eq!(mesh.triangle_count(), 12 * 2 + 12 * 2);
        assert_outward(&mesh);
        for p in &mesh.positions {
            let r = ((p.x - 1.0).powi(2) + (p.y - 2.0).powi(2)).sqrt();
            assert!(r <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn quads_face_requested_side() {
        assert_outward(&quad_xy([0.0, 1.0], [0.0, 1.0], 0.5, true));
        assert_outward(&quad_xy([0.0, 1.0], [0.0, 1.0], -0.5, false));
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = quad_xy([0.0, 1.0], [0.0, 1.0], 0.0, true);
        let b = quad_xy([2.0, 3.0], [0.0, 1.0], 0.0, true);
        a.merge(&b);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(&a.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }
}
