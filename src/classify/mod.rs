//! Rule-ordered car archetype classifier.
//!
//! The classifier is a decision list over the three-segment height profile
//! `[front, middle, rear]`: rules are tried in a fixed priority order and the
//! first match wins.
//!
//! 1. Truck  – tall front cab over a low bed (`front / rear` large).
//! 2. Bus    – near-uniform, tall box without a dominant middle.
//! 3. Sports – low, flat silhouette.
//! 4. Sedan  – middle cabin strictly tallest with a trunk step-down.
//! 5. SUV    – cabin extending to the rear.
//! 6. Fallback to sedan.
//!
//! Rules only overlap where thresholds do; the order above is what resolves
//! such overlaps. Confidences are the fixed per-rule scores from
//! [`RuleConfidence`], not probabilities.

mod options;
mod rules;

pub use options::{CanvasKind, ClassifierThresholds, RuleConfidence};

use crate::profile::ShapeProfile;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Car archetypes a drawing can be bucketed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Sedan,
    Suv,
    Truck,
    Bus,
    Sports,
}

impl CarType {
    pub const ALL: [CarType; 5] = [
        CarType::Sedan,
        CarType::Suv,
        CarType::Truck,
        CarType::Bus,
        CarType::Sports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Truck => "truck",
            Self::Bus => "bus",
            Self::Sports => "sports",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which branch of the decision list produced a classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Truck,
    Bus,
    Sports,
    Sedan,
    Suv,
    Fallback,
    Sparse,
    Blank,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub car_type: CarType,
    /// Ad hoc score in [0, 1].
    pub confidence: f32,
    pub rule: Rule,
}

impl Classification {
    /// Result for a canvas without any ink.
    pub fn blank(thresholds: &ClassifierThresholds) -> Self {
        Self {
            car_type: CarType::Sedan,
            confidence: thresholds.confidence.blank,
            rule: Rule::Blank,
        }
    }

    /// Result for a canvas with too little ink to judge.
    pub fn sparse(thresholds: &ClassifierThresholds) -> Self {
        Self {
            car_type: CarType::Sedan,
            confidence: thresholds.confidence.sparse,
            rule: Rule::Sparse,
        }
    }

    fn from_rule(rule: Rule, thresholds: &ClassifierThresholds) -> Self {
        let c = &thresholds.confidence;
        let (car_type, confidence) = match rule {
            Rule::Truck => (CarType::Truck, c.truck),
            Rule::Bus => (CarType::Bus, c.bus),
            Rule::Sports => (CarType::Sports, c.sports),
            Rule::Sedan => (CarType::Sedan, c.sedan),
            Rule::Suv => (CarType::Suv, c.suv),
            Rule::Fallback => (CarType::Sedan, c.fallback),
            Rule::Sparse => (CarType::Sedan, c.sparse),
            Rule::Blank => (CarType::Sedan, c.blank),
        };
        Self {
            car_type,
            confidence: confidence.clamp(0.0, 1.0),
            rule,
        }
    }
}

/// Classify a silhouette profile.
///
/// Degenerate profiles (empty bounds or no measurable height) resolve to the
/// blank classification instead of dividing by zero.
pub fn classify(profile: &ShapeProfile, thresholds: &ClassifierThresholds) -> Classification {
    if profile.is_degenerate() || profile.height_profile.iter().all(|&h| h == 0) {
        debug!("classify: degenerate profile {:?}", profile.height_profile);
        return Classification::blank(thresholds);
    }
    let rule = rules::first_match(profile, thresholds);
    debug!(
        "classify: heights={:?} ratio={:.3} -> {:?}",
        profile.height_profile, profile.aspect_ratio, rule
    );
    Classification::from_rule(rule, thresholds)
}
