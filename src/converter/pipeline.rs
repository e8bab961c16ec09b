use super::params::ConverterParams;
use crate::classify::{classify, CanvasKind, Classification, ClassifierThresholds};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    AnalysisReport, ConversionReport, InputDescriptor, PipelineTrace, TimingBreakdown,
};
use crate::error::Result;
use crate::image::ImageRgba;
use crate::mesh::{build_boxcar, fit_camera};
use crate::profile::ShapeProfile;
use crate::sampler::regions::largest_region;
use crate::sampler::windows::detect_windows;
use crate::sampler::{DrawingBounds, InkMask};
use crate::template::map_template;
use log::{debug, warn};
use std::time::Instant;

/// Drawing-to-boxcar converter.
///
/// Holds configuration only; every call runs the whole pipeline from the
/// raster and shares nothing with previous calls.
#[derive(Clone, Debug, Default)]
pub struct BoxcarConverter {
    params: ConverterParams,
}

impl BoxcarConverter {
    pub fn new(params: ConverterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConverterParams {
        &self.params
    }

    /// Classify a drawing and map it onto a template.
    pub fn analyze(&self, image: &ImageRgba<'_>) -> Result<AnalysisReport> {
        let total_start = Instant::now();
        image.validate()?;
        let thresholds = self.params.thresholds();
        let mut timings = TimingBreakdown::default();

        let raw = timings.time("sample", || InkMask::from_image(image, &self.params.ink))?;
        let ink_pixels = raw.count();
        let min_ink_pixels = self.params.ink.min_ink_for(image.w * image.h);

        let mask = timings.time("regions", || {
            if self.params.ink.isolate_largest_region {
                largest_region(&raw).unwrap_or(raw)
            } else {
                raw
            }
        });
        let kept_ink_pixels = mask.count();
        let bounds = DrawingBounds::from_mask(&mask);
        let profile = timings.time("profile", || ShapeProfile::from_mask(&mask, &bounds));
        debug!(
            "BoxcarConverter::analyze ink={} kept={} bounds={:?}",
            ink_pixels, kept_ink_pixels, bounds
        );

        let classification = timings.time("classify", || {
            Self::classify_checked(
                ink_pixels,
                kept_ink_pixels,
                min_ink_pixels,
                &profile,
                &thresholds,
            )
        });
        let windows = timings.time("windows", || {
            detect_windows(image, &bounds, &self.params.windows)
        })?;
        let mapping = timings.time("template", || map_template(&classification, &profile));

        timings.total_ms = elapsed_ms(total_start);
        Ok(AnalysisReport {
            bounds,
            profile,
            classification,
            mapping,
            windows,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    canvas: self.params.canvas,
                },
                timings,
                ink_pixels,
                kept_ink_pixels,
                min_ink_pixels,
            },
        })
    }

    /// Full pipeline: analysis, mesh generation and camera framing.
    pub fn convert(&self, image: &ImageRgba<'_>) -> Result<ConversionReport> {
        let total_start = Instant::now();
        let mut analysis = self.analyze(image)?;

        let mesh_start = Instant::now();
        let mesh = build_boxcar(&analysis.mapping, &analysis.windows, &self.params.mesh);
        let camera = fit_camera(&mesh.bounds, &self.params.camera, self.params.canvas);
        let trace = &mut analysis.trace;
        trace.timings.push("mesh", elapsed_ms(mesh_start));
        trace.timings.total_ms = elapsed_ms(total_start);

        debug!(
            "BoxcarConverter::convert {} -> {:?} ({} triangles)",
            analysis.classification.car_type,
            analysis.mapping.template,
            mesh.triangle_count()
        );
        Ok(ConversionReport {
            analysis,
            mesh,
            camera,
        })
    }

    /// Blank and sparse canvases get the default classification.
    ///
    /// Sparse is judged on the ink kept after region isolation, so scattered
    /// dots with enough ink in total still count as sparse.
    fn classify_checked(
        ink_pixels: usize,
        kept_ink_pixels: usize,
        min_ink_pixels: usize,
        profile: &ShapeProfile,
        thresholds: &ClassifierThresholds,
    ) -> Classification {
        if ink_pixels == 0 {
            debug!("BoxcarConverter::analyze blank canvas");
            return Classification::blank(thresholds);
        }
        if kept_ink_pixels < min_ink_pixels {
            warn!(
                "BoxcarConverter::analyze only {kept_ink_pixels} of {ink_pixels} ink pixels kept (< {min_ink_pixels}), using default"
            );
            return Classification::sparse(thresholds);
        }
        classify(profile, thresholds)
    }

    /// Switch the canvas kind (and with it the threshold preset).
    pub fn set_canvas(&mut self, canvas: CanvasKind) {
        self.params.canvas = canvas;
    }

    /// Override classifier thresholds regardless of canvas kind.
    pub fn set_thresholds(&mut self, thresholds: ClassifierThresholds) {
        self.params.thresholds = Some(thresholds);
    }

    /// Drop a threshold override and go back to the canvas preset.
    pub fn clear_thresholds(&mut self) {
        self.params.thresholds = None;
    }
}
