use super::{ClassifierThresholds, Rule};
use crate::profile::ShapeProfile;

/// Segment heights as floats plus the derived quantities the rules share.
struct Silhouette {
    front: f32,
    middle: f32,
    rear: f32,
    tallest: f32,
    shortest: f32,
    mean: f32,
    mean_to_length: f32,
}

impl Silhouette {
    fn new(profile: &ShapeProfile) -> Self {
        let (front, middle, rear) = (profile.front(), profile.middle(), profile.rear());
        let length = profile.length as f32;
        Self {
            front,
            middle,
            rear,
            tallest: front.max(middle).max(rear),
            shortest: front.min(middle).min(rear),
            mean: profile.mean_height(),
            mean_to_length: if length > 0.0 {
                profile.mean_height() / length
            } else {
                0.0
            },
        }
    }

    /// `front / rear`; a zero rear under a non-zero front is unbounded.
    fn front_to_rear(&self) -> f32 {
        if self.rear > 0.0 {
            self.front / self.rear
        } else if self.front > 0.0 {
            f32::INFINITY
        } else {
            1.0
        }
    }

    /// `|front - rear| / middle`, unbounded when the middle is empty.
    fn end_difference(&self) -> f32 {
        if self.middle > 0.0 {
            (self.front - self.rear).abs() / self.middle
        } else {
            f32::INFINITY
        }
    }

    /// `min(front, rear) / max(front, rear)`.
    fn end_symmetry(&self) -> f32 {
        let hi = self.front.max(self.rear);
        if hi > 0.0 {
            self.front.min(self.rear) / hi
        } else {
            0.0
        }
    }

    fn middle_dominant(&self, margin: f32) -> bool {
        self.middle > self.front.max(self.rear) * (1.0 + margin)
    }
}

pub(super) fn first_match(profile: &ShapeProfile, t: &ClassifierThresholds) -> Rule {
    let s = Silhouette::new(profile);
    if is_truck(&s, t) {
        Rule::Truck
    } else if is_bus(&s, t) {
        Rule::Bus
    } else if is_sports(&s, t) {
        Rule::Sports
    } else if is_sedan(&s, t) {
        Rule::Sedan
    } else if is_suv(&s, t) {
        Rule::Suv
    } else {
        Rule::Fallback
    }
}

fn is_truck(s: &Silhouette, t: &ClassifierThresholds) -> bool {
    s.front_to_rear() >= t.truck_front_rear_ratio
}

fn is_bus(s: &Silhouette, t: &ClassifierThresholds) -> bool {
    s.end_difference() < t.bus_max_end_difference
        && s.end_symmetry() >= t.bus_min_end_symmetry
        && s.mean >= t.bus_min_mean_height
        && s.mean_to_length >= t.bus_min_height_to_length
        && !s.middle_dominant(t.sedan_middle_margin)
}

fn is_sports(s: &Silhouette, t: &ClassifierThresholds) -> bool {
    if s.tallest <= 0.0 {
        return false;
    }
    let variation = (s.tallest - s.shortest) / s.tallest;
    let ends_cap = s.middle * t.sports_max_end_to_middle;
    let low = s.mean < t.sports_max_mean_height
        || s.mean_to_length < t.sports_max_height_to_length;
    variation <= t.sports_max_variation && s.front <= ends_cap && s.rear <= ends_cap && low
}

fn is_sedan(s: &Silhouette, t: &ClassifierThresholds) -> bool {
    s.middle > s.front
        && s.middle > s.rear
        && s.end_difference() <= t.sedan_max_end_difference
        && s.rear <= s.middle * t.sedan_max_rear_to_middle
}

fn is_suv(s: &Silhouette, t: &ClassifierThresholds) -> bool {
    s.front < s.middle
        && s.rear >= s.middle * t.suv_min_rear_to_middle
        && s.rear >= s.front * t.suv_min_rear_to_front
}
