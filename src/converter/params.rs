//! Parameters configuring the conversion pipeline.
//!
//! Every field has a default, so a JSON config only needs the knobs it
//! changes. Classifier thresholds follow the canvas kind unless overridden
//! explicitly.

use crate::classify::{CanvasKind, ClassifierThresholds};
use crate::mesh::{CameraOptions, MeshOptions};
use crate::sampler::windows::WindowOptions;
use crate::sampler::InkOptions;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConverterParams {
    /// Canvas the drawing came from; selects the threshold preset.
    pub canvas: CanvasKind,
    pub ink: InkOptions,
    pub windows: WindowOptions,
    /// Replaces the canvas preset entirely when set.
    pub thresholds: Option<ClassifierThresholds>,
    pub mesh: MeshOptions,
    pub camera: CameraOptions,
}

impl ConverterParams {
    pub fn for_canvas(canvas: CanvasKind) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Thresholds in effect: the override, else the canvas preset.
    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds.unwrap_or_else(|| self.canvas.thresholds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_follow_canvas_unless_overridden() {
        let mobile = ConverterParams::for_canvas(CanvasKind::Mobile);
        assert_eq!(mobile.thresholds(), ClassifierThresholds::mobile());

        let custom = ClassifierThresholds {
            truck_front_rear_ratio: 2.0,
            ..ClassifierThresholds::desktop()
        };
        let params = ConverterParams {
            canvas: CanvasKind::Mobile,
            thresholds: Some(custom),
            ..Default::default()
        };
        assert_eq!(params.thresholds().truck_front_rear_ratio, 2.0);
    }

    #[test]
    fn deserializes_sparse_json() {
        let params: ConverterParams = serde_json::from_str(
            r#"{ "canvas": "mobile", "ink": { "near_white": 230 }, "mesh": { "wheel_segments": 8 } }"#,
        )
        .unwrap();
        assert_eq!(params.canvas, CanvasKind::Mobile);
        assert_eq!(params.ink.near_white, 230);
        assert_eq!(params.ink.alpha_threshold, 128);
        assert_eq!(params.mesh.wheel_segments, 8);
        assert!(params.thresholds.is_none());
    }
}
