//! Diagnostics returned alongside every analysis and conversion.
//!
//! [`AnalysisReport`] carries the intermediate values of the pipeline
//! (bounds, profile, classification, template mapping, detected windows)
//! together with a [`PipelineTrace`]; [`ConversionReport`] adds the mesh and
//! camera framing. All types serialize to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{AnalysisReport, ConversionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
