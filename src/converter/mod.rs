//! Converter orchestrating the drawing-to-boxcar pipeline.
//!
//! Stages
//! - Sample: scan the canvas into an ink mask (`sampler`).
//! - Regions: keep the largest 8-connected ink region to drop stray marks.
//! - Profile: three-segment height/width profiles and centre of mass.
//! - Classify: decision-list classifier; blank and sparse canvases
//!   short-circuit to a low-confidence sedan.
//! - Windows: bluish regions inside the drawing bounds.
//! - Template: map the classification onto a body template.
//! - Mesh (convert only): extrude, add wheels and windows, frame the camera.
//!
//! Typical usage:
//! ```no_run
//! use boxcar_converter::{BoxcarConverter, ConverterParams};
//! use boxcar_converter::image::ImageRgba;
//!
//! # fn example(rgba: &[u8]) -> boxcar_converter::Result<()> {
//! let image = ImageRgba::new(800, 600, rgba)?;
//! let converter = BoxcarConverter::new(ConverterParams::default());
//! let report = converter.convert(&image)?;
//! println!(
//!     "{} ({:.2})",
//!     report.analysis.classification.car_type,
//!     report.analysis.classification.confidence
//! );
//! # Ok(())
//! # }
//! ```

pub mod params;
mod pipeline;

pub use params::ConverterParams;
pub use pipeline::BoxcarConverter;
