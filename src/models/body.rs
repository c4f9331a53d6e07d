//! Body metrics model
//!
//! Represents the measurement system, gender, and body measurements used
//! by the estimators. Weight and height are always stored in the currently
//! selected unit system.

use serde::{Deserialize, Serialize};

/// Measurement system for weight and height entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Pounds and inches
    Imperial,
    /// Kilograms and centimeters
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "imperial" | "us" => Some(UnitSystem::Imperial),
            "metric" | "si" => Some(UnitSystem::Metric),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial (US)",
            UnitSystem::Metric => "Metric",
        }
    }

    /// Unit label for weight entry
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }

    /// Unit label for height entry
    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "inches",
            UnitSystem::Metric => "cm",
        }
    }

    /// The other unit system
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }
}

/// Gender, used to select the body-water distribution ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Approximate body-water distribution ratio (Widmark-style constant)
    pub fn body_water_ratio(&self) -> f64 {
        match self {
            Gender::Male => 0.68,
            Gender::Female => 0.55,
        }
    }
}

/// Complete body measurements for an estimate
///
/// Weight and height are in the units given by `units`. Constructing a
/// `BodyMetrics` does not validate the values; the estimators guard against
/// non-finite or non-positive measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight: f64,
    pub height: f64,
    pub units: UnitSystem,
    pub gender: Gender,
}

impl BodyMetrics {
    pub fn new(weight: f64, height: f64, units: UnitSystem, gender: Gender) -> Self {
        Self {
            weight,
            height,
            units,
            gender,
        }
    }

    /// Whether both measurements are positive finite numbers
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite()
            && self.weight > 0.0
            && self.height.is_finite()
            && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!(UnitSystem::from_str("imperial"), Some(UnitSystem::Imperial));
        assert_eq!(UnitSystem::from_str("Metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str("stone"), None);
    }

    #[test]
    fn test_unit_system_toggled() {
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
    }

    #[test]
    fn test_gender_body_water_ratio() {
        assert_eq!(Gender::Male.body_water_ratio(), 0.68);
        assert_eq!(Gender::Female.body_water_ratio(), 0.55);
    }

    #[test]
    fn test_gender_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::from_str::<Gender>("\"female\"").unwrap(),
            Gender::Female
        );
    }

    #[test]
    fn test_metrics_validity() {
        let m = BodyMetrics::new(180.0, 70.0, UnitSystem::Imperial, Gender::Male);
        assert!(m.is_valid());

        let zero = BodyMetrics::new(0.0, 70.0, UnitSystem::Imperial, Gender::Male);
        assert!(!zero.is_valid());

        let nan = BodyMetrics::new(180.0, f64::NAN, UnitSystem::Imperial, Gender::Male);
        assert!(!nan.is_valid());
    }
}
