#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod image;

// Pipeline stages – public for tools and tests that drive them one by one.
pub mod classify;
pub mod mesh;
pub mod profile;
pub mod sampler;
pub mod template;

// --- High-level re-exports -------------------------------------------------

pub use crate::classify::{CanvasKind, CarType, Classification};
pub use crate::converter::{BoxcarConverter, ConverterParams};
pub use crate::diagnostics::{AnalysisReport, ConversionReport};
pub use crate::error::{ConvertError, Result};
pub use crate::mesh::BoxcarMesh;
pub use crate::template::{TemplateId, TemplateMapping};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use boxcar_converter::prelude::*;
///
/// # fn main() -> boxcar_converter::Result<()> {
/// let drawing = RgbaImage::blank(800, 600);
/// let converter = BoxcarConverter::new(ConverterParams::for_canvas(CanvasKind::Mobile));
/// let report = converter.analyze(&drawing.as_view())?;
/// println!("{} {:.2}", report.classification.car_type, report.classification.confidence);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::RgbaImage;
    pub use crate::image::ImageRgba;
    pub use crate::{BoxcarConverter, CanvasKind, CarType, ConverterParams};
}
