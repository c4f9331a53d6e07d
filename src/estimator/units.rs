//! Unit conversion constants and helpers
//!
//! Pure, stateless conversions between imperial and metric weight/height.

use crate::models::UnitSystem;

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

// ============================================================================
// Height Conversion Constants
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per centimeter
pub const INCHES_PER_CM: f64 = 0.393701;

/// The measurement being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Weight,
    Height,
}

/// Convert a value between unit systems for the given dimension
///
/// Converting to the same system returns the value unchanged. Inputs are
/// assumed already validated as positive numbers by the caller.
pub fn convert(value: f64, from: UnitSystem, to: UnitSystem, dimension: Dimension) -> f64 {
    match (from, to, dimension) {
        (UnitSystem::Imperial, UnitSystem::Metric, Dimension::Weight) => value * KG_PER_LB,
        (UnitSystem::Metric, UnitSystem::Imperial, Dimension::Weight) => value * LB_PER_KG,
        (UnitSystem::Imperial, UnitSystem::Metric, Dimension::Height) => value * CM_PER_INCH,
        (UnitSystem::Metric, UnitSystem::Imperial, Dimension::Height) => value * INCHES_PER_CM,
        _ => value,
    }
}

/// Normalize a weight in the given system to kilograms
pub fn weight_to_kg(value: f64, units: UnitSystem) -> f64 {
    convert(value, units, UnitSystem::Metric, Dimension::Weight)
}

/// Normalize a height in the given system to centimeters
pub fn height_to_cm(value: f64, units: UnitSystem) -> f64 {
    convert(value, units, UnitSystem::Metric, Dimension::Height)
}
