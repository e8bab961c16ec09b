use super::TimingBreakdown;
use crate::classify::{CanvasKind, Classification};
use crate::mesh::{BoxcarMesh, CameraFit};
use crate::profile::ShapeProfile;
use crate::sampler::windows::WindowRegion;
use crate::sampler::DrawingBounds;
use crate::template::TemplateMapping;
use serde::Serialize;

/// Result of classifying one drawing, without geometry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub bounds: DrawingBounds,
    pub profile: ShapeProfile,
    pub classification: Classification,
    pub mapping: TemplateMapping,
    pub windows: Vec<WindowRegion>,
    pub trace: PipelineTrace,
}

/// Analysis plus the generated car and its camera framing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub analysis: AnalysisReport,
    pub mesh: BoxcarMesh,
    pub camera: CameraFit,
}

/// What the pipeline saw and how long each stage took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Ink pixels on the whole canvas.
    pub ink_pixels: usize,
    /// Ink pixels kept after largest-region isolation.
    pub kept_ink_pixels: usize,
    /// Ink needed before the classifier is trusted.
    pub min_ink_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub canvas: CanvasKind,
}
