//! Perspective camera framing for a finished mesh.
//!
//! Distance is chosen so the largest extent of the bounds fits the vertical
//! field of view, then multiplied by a padding factor. Mobile viewports are
//! small, so they get a tighter padding.

use super::Aabb;
use crate::classify::CanvasKind;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub desktop_padding: f32,
    pub mobile_padding: f32,
    /// Viewing direction from the target towards the camera.
    pub direction: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            desktop_padding: 1.5,
            mobile_padding: 1.3,
            direction: [1.0, 0.6, 1.6],
        }
    }
}

impl CameraOptions {
    pub fn padding(&self, canvas: CanvasKind) -> f32 {
        match canvas {
            CanvasKind::Desktop => self.desktop_padding,
            CanvasKind::Mobile => self.mobile_padding,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraFit {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

pub fn fit_camera(bounds: &Aabb, options: &CameraOptions, canvas: CanvasKind) -> CameraFit {
    let direction = Vector3::from(options.direction)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::z);
    if bounds.is_empty() {
        let distance = 10.0;
        return CameraFit {
            position: Point3::origin() + direction * distance,
            target: Point3::origin(),
            distance,
            near: 0.1,
            far: 100.0,
        };
    }

    let target = bounds.center();
    let size = bounds.size();
    let max_dim = size.x.max(size.y).max(size.z);
    let half_fov = (options.fov_y_deg.clamp(1.0, 179.0) * 0.5).to_radians();
    let distance = (max_dim * 0.5 / half_fov.tan()).abs() * options.padding(canvas);
    let radius = size.norm() * 0.5;

    CameraFit {
        position: target + direction * distance,
        target,
        distance,
        near: (distance - radius).max(distance * 0.01),
        far: distance + radius * 4.0,
    }
}
