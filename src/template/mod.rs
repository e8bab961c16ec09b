//! Maps a classification onto a fixed body template.
//!
//! The mapping is a pure function of the classification and the silhouette
//! proportions: the car type selects the template (long sedans get the
//! stretched variant), and the drawing's length/height ratio relative to the
//! template's nominal ratio yields clamped length and height scales.

mod specs;

pub use specs::{spec_for, TemplateSpec, WindowPattern};

use crate::classify::{CarType, Classification};
use crate::profile::ShapeProfile;
use serde::{Deserialize, Serialize};

/// Length/height ratio above which a sedan uses the stretched template.
pub const LONG_SEDAN_RATIO: f32 = 2.5;
pub const LENGTH_SCALE_RANGE: (f32, f32) = (0.8, 1.5);
pub const HEIGHT_SCALE_RANGE: (f32, f32) = (0.8, 1.3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Sedan,
    #[serde(rename = "sedan-type2")]
    SedanType2,
    Suv,
    Truck,
    Bus,
    Sports,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Sedan,
        TemplateId::SedanType2,
        TemplateId::Suv,
        TemplateId::Truck,
        TemplateId::Bus,
        TemplateId::Sports,
    ];

    pub fn car_type(self) -> CarType {
        match self {
            Self::Sedan | Self::SedanType2 => CarType::Sedan,
            Self::Suv => CarType::Suv,
            Self::Truck => CarType::Truck,
            Self::Bus => CarType::Bus,
            Self::Sports => CarType::Sports,
        }
    }

    pub fn spec(self) -> &'static TemplateSpec {
        spec_for(self)
    }
}

/// Transform applied to the template body.
///
/// `scale` multiplies length, height and depth; `rotation` holds Euler angles
/// in radians; `position` is expressed in body units (fractions of the body
/// length, height and depth).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Adjustments {
    pub scale: [f32; 3],
    pub rotation: [f32; 3],
    pub position: [f32; 3],
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            scale: [1.0; 3],
            rotation: [0.0; 3],
            position: [0.0; 3],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMapping {
    pub template: TemplateId,
    pub confidence: f32,
    pub adjustments: Adjustments,
    pub spec: TemplateSpec,
}

impl TemplateMapping {
    pub fn car_type(&self) -> CarType {
        self.template.car_type()
    }
}

/// Choose the template for a car type given the drawing's length/height.
pub fn select_template(car_type: CarType, length_to_height: f32) -> TemplateId {
    match car_type {
        CarType::Sedan if length_to_height > LONG_SEDAN_RATIO => TemplateId::SedanType2,
        CarType::Sedan => TemplateId::Sedan,
        CarType::Suv => TemplateId::Suv,
        CarType::Truck => TemplateId::Truck,
        CarType::Bus => TemplateId::Bus,
        CarType::Sports => TemplateId::Sports,
    }
}

pub fn map_template(classification: &Classification, profile: &ShapeProfile) -> TemplateMapping {
    let ratio = profile.length_to_height();
    let template = select_template(classification.car_type, ratio);
    let spec = *template.spec();

    let mut adjustments = Adjustments::default();
    if ratio > 0.0 && ratio.is_finite() {
        let rel = ratio / spec.nominal_ratio;
        adjustments.scale[0] = rel.clamp(LENGTH_SCALE_RANGE.0, LENGTH_SCALE_RANGE.1);
        adjustments.scale[1] = (1.0 / rel).clamp(HEIGHT_SCALE_RANGE.0, HEIGHT_SCALE_RANGE.1);
    }
    // Body floats at half a wheel radius so the wheels, centred one radius
    // up, touch y = 0.
    adjustments.position[1] = spec.wheel_radius * 0.5;

    TemplateMapping {
        template,
        confidence: classification.confidence,
        adjustments,
        spec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, ClassifierThresholds, Rule};

    fn classification(car_type: CarType) -> Classification {
        Classification {
            car_type,
            confidence: 0.8,
            rule: Rule::Fallback,
        }
    }

    #[test]
    fn long_sedans_use_stretched_template() {
        assert_eq!(select_template(CarType::Sedan, 2.4), TemplateId::Sedan);
        assert_eq!(select_template(CarType::Sedan, 2.5), TemplateId::Sedan);
        assert_eq!(select_template(CarType::Sedan, 2.6), TemplateId::SedanType2);
        assert_eq!(select_template(CarType::Bus, 4.0), TemplateId::Bus);
    }

    #[test]
    fn scale_follows_ratio_and_is_clamped() {
        let profile = ShapeProfile::from_height_profile(220, 100, [30, 80, 40]);
        let m = map_template(&classification(CarType::Sedan), &profile);
        assert_eq!(m.template, TemplateId::Sedan);
        assert!((m.adjustments.scale[0] - 1.0).abs() < 1e-6);
        assert!((m.adjustments.scale[1] - 1.0).abs() < 1e-6);

        let very_long = ShapeProfile::from_height_profile(900, 100, [30, 80, 40]);
        let m = map_template(&classification(CarType::Sports), &very_long);
        assert_eq!(m.adjustments.scale[0], 1.5);
        assert_eq!(m.adjustments.scale[1], 0.8);

        let very_tall = ShapeProfile::from_height_profile(100, 100, [90, 95, 92]);
        let m = map_template(&classification(CarType::Bus), &very_tall);
        assert_eq!(m.adjustments.scale[0], 0.8);
        assert_eq!(m.adjustments.scale[1], 1.3);
        assert_eq!(m.adjustments.scale[2], 1.0);
    }

    #[test]
    fn degenerate_profile_keeps_unit_scale() {
        let m = map_template(&classification(CarType::Sedan), &ShapeProfile::default());
        assert_eq!(m.template, TemplateId::Sedan);
        assert_eq!(m.adjustments.scale, [1.0; 3]);
        assert_eq!(m.adjustments.rotation, [0.0; 3]);
    }

    #[test]
    fn mapping_carries_classification_confidence() {
        let profile = ShapeProfile::from_height_profile(300, 100, [90, 60, 40]);
        let c = classify(&profile, &ClassifierThresholds::desktop());
        let m = map_template(&c, &profile);
        assert_eq!(m.template, TemplateId::Truck);
        assert_eq!(m.confidence, c.confidence);
        assert_eq!(m.spec, *spec_for(TemplateId::Truck));
        assert_eq!(m.car_type(), CarType::Truck);
    }

    #[test]
    fn template_ids_serialize_with_variant_names() {
        let json = serde_json::to_string(&TemplateId::SedanType2).unwrap();
        assert_eq!(json, "\"sedan-type2\"");
        let json = serde_json::to_string(&TemplateId::Suv).unwrap();
        assert_eq!(json, "\"suv\"");
    }
}
