//! Wavefront OBJ export for inspecting generated cars in external tools.

use super::BoxcarMesh;
use crate::error::{ConvertError, Result};
use crate::image::io::ensure_parent_dir;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render `mesh` as OBJ text, one object per part.
pub fn to_obj(mesh: &BoxcarMesh) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# boxcar: {} parts", mesh.parts.len());
    let mut base = 1u32;
    for part in &mesh.parts {
        let m = &part.mesh;
        let _ = writeln!(out, "o {}", part.name);
        for p in &m.positions {
            let _ = writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        for n in &m.normals {
            let _ = writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        }
        for tri in m.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] + base, tri[1] + base, tri[2] + base];
            let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
        }
        base += m.positions.len() as u32;
    }
    out
}

pub fn write_obj(path: &Path, mesh: &BoxcarMesh) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, to_obj(mesh)).map_err(|e| ConvertError::io(path, e))
}
