//! Threshold presets for the decision-list classifier.
//!
//! The thresholds were tuned by eye on children's drawings and are fragile;
//! they live here so retuning never touches the rules themselves. Ratios are
//! dimensionless, confidences are fixed per-rule scores rather than
//! calibrated probabilities.

use serde::{Deserialize, Serialize};

/// The kind of canvas a drawing was made on.
///
/// Mobile canvases are closer to 4:3 and produce squatter drawings, so a few
/// thresholds are relaxed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasKind {
    #[default]
    Desktop,
    Mobile,
}

impl CanvasKind {
    /// Best guess from canvas dimensions, for callers that do not know where
    /// a drawing came from. Aspect ratios up to 1.5 are treated as mobile.
    pub fn infer(width: usize, height: usize) -> Self {
        if height == 0 {
            return Self::Desktop;
        }
        if width as f32 / height as f32 <= 1.5 {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn thresholds(self) -> ClassifierThresholds {
        match self {
            Self::Desktop => ClassifierThresholds::desktop(),
            Self::Mobile => ClassifierThresholds::mobile(),
        }
    }
}

/// Fixed scores assigned by each rule of the decision list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfidence {
    pub truck: f32,
    pub bus: f32,
    pub sports: f32,
    pub sedan: f32,
    pub suv: f32,
    /// No rule matched.
    pub fallback: f32,
    /// Ink present but below the minimum pixel count.
    pub sparse: f32,
    /// No ink at all.
    pub blank: f32,
}

impl Default for RuleConfidence {
    fn default() -> Self {
        Self {
            truck: 0.85,
            bus: 0.8,
            sports: 0.75,
            sedan: 0.8,
            suv: 0.75,
            fallback: 0.6,
            sparse: 0.3,
            blank: 0.1,
        }
    }
}

/// All tuning knobs of the classifier.
///
/// Heights refer to the three-segment height profile `[front, middle, rear]`;
/// "length" is the bounds width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// Truck: `front / rear` at or above this.
    pub truck_front_rear_ratio: f32,
    /// Bus: `|front - rear| / middle` below this.
    pub bus_max_end_difference: f32,
    /// Bus: `min(front, rear) / max(front, rear)` at or above this.
    pub bus_min_end_symmetry: f32,
    /// Bus: mean segment height in pixels at or above this.
    pub bus_min_mean_height: f32,
    /// Bus: mean segment height / length at or above this.
    pub bus_min_height_to_length: f32,
    /// Middle counts as dominant when it exceeds both ends by this margin.
    pub sedan_middle_margin: f32,
    /// Sports: `(max - min) / max` of the segment heights at most this.
    pub sports_max_variation: f32,
    /// Sports: each end at most `middle * this`.
    pub sports_max_end_to_middle: f32,
    /// Sports: mean segment height in pixels below this...
    pub sports_max_mean_height: f32,
    /// ...or mean segment height / length below this.
    pub sports_max_height_to_length: f32,
    /// Sedan: `|front - rear| / middle` at most this.
    pub sedan_max_end_difference: f32,
    /// Sedan: `rear / middle` at most this (trunk step-down).
    pub sedan_max_rear_to_middle: f32,
    /// SUV: `rear / middle` at least this.
    pub suv_min_rear_to_middle: f32,
    /// SUV: `rear / front` at least this.
    pub suv_min_rear_to_front: f32,
    pub confidence: RuleConfidence,
}

impl ClassifierThresholds {
    pub fn desktop() -> Self {
        Self {
            truck_front_rear_ratio: 1.5,
            bus_max_end_difference: 0.10,
            bus_min_end_symmetry: 0.90,
            bus_min_mean_height: 60.0,
            bus_min_height_to_length: 0.15,
            sedan_middle_margin: 0.10,
            sports_max_variation: 0.25,
            sports_max_end_to_middle: 1.05,
            sports_max_mean_height: 60.0,
            sports_max_height_to_length: 0.15,
            sedan_max_end_difference: 0.30,
            sedan_max_rear_to_middle: 0.85,
            suv_min_rear_to_middle: 0.90,
            suv_min_rear_to_front: 1.15,
            confidence: RuleConfidence::default(),
        }
    }

    pub fn mobile() -> Self {
        Self {
            truck_front_rear_ratio: 1.4,
            bus_max_end_difference: 0.12,
            bus_min_end_symmetry: 0.85,
            ..Self::desktop()
        }
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self::desktop()
    }
}
