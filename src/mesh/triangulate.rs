//! Ear-clipping triangulation for the simple polygons used as body outlines.

/// Triangulate a simple counter-clockwise polygon.
///
/// Returns `n - 2` index triples into `points`, each wound counter-clockwise.
/// Collinear or otherwise degenerate input still terminates: when no proper
/// ear is left the next vertex is clipped regardless.
pub fn triangulate(points: &[[f32; 2]]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);
    let mut cursor = 0usize;
    let mut misses = 0usize;

    while remaining.len() > 3 {
        let m = remaining.len();
        let prev = remaining[(cursor + m - 1) % m];
        let cur = remaining[cursor % m];
        let next = remaining[(cursor + 1) % m];

        let forced = misses >= m;
        if forced || is_ear(points, &remaining, prev, cur, next) {
            triangles.push([prev as u32, cur as u32, next as u32]);
            remaining.remove(cursor % m);
            misses = 0;
            if cursor >= remaining.len() {
                cursor = 0;
            }
        } else {
            cursor = (cursor + 1) % m;
            misses += 1;
        }
    }
    triangles.push([
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);
    triangles
}

fn cross(o: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn is_ear(points: &[[f32; 2]], remaining: &[usize], prev: usize, cur: usize, next: usize) -> bool {
    let (a, b, c) = (points[prev], points[cur], points[next]);
    if cross(a, b, c) <= 1e-9 {
        return false;
    }
    remaining
        .iter()
        .filter(|&&i| i != prev && i != cur && i != next)
        .all(|&i| !inside_triangle(points[i], a, b, c))
}

/// Inclusive point-in-triangle test for a counter-clockwise triangle.
fn inside_triangle(p: [f32; 2], a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::outline::{profile_outline, signed_area};
    use crate::template::TemplateId;

    fn triangle_area(points: &[[f32; 2]], t: [u32; 3]) -> f32 {
        cross(points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]) * 0.5
    }

    #[test]
    fn square_gives_two_triangles() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let tris = triangulate(&square);
        assert_eq!(tris.len(), 2);
        let area: f32 = tris.iter().map(|&t| triangle_area(&square, t)).sum();
        assert!((area - 1.0).abs() < 1e-6);
    }

    #[test]
    fn outlines_triangulate_without_overlap() {
        for id in TemplateId::ALL {
            let outline = profile_outline(id);
            let tris = triangulate(outline);
            assert_eq!(tris.len(), outline.len() - 2, "{id:?}");
            let total: f32 = tris.iter().map(|&t| triangle_area(outline, t)).sum();
            assert!(
                (total - signed_area(outline)).abs() < 1e-5,
                "{id:?}: triangles cover {total}, polygon {}",
                signed_area(outline)
            );
            assert!(tris.iter().all(|&t| triangle_area(outline, t) >= 0.0));
        }
    }

    #[test]
    fn concave_l_shape() {
        let l = [
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ];
        let tris = triangulate(&l);
        assert_eq!(tris.len(), 4);
        let area: f32 = tris.iter().map(|&t| triangle_area(&l, t)).sum();
        assert!((area - 3.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(triangulate(&[[0.0, 0.0], [1.0, 0.0]]).is_empty());
        let collinear = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 1.0]];
        assert_eq!(triangulate(&collinear).len(), 2);
    }
}
