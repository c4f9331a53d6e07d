//! Estimation module
//!
//! Handles unit conversion and the BAC estimation formulas.

pub mod bac;
pub mod units;

pub use bac::{
    bmi_adjustment, estimate_current_bac, estimate_drinks_for_target, DrinkTargetEstimate,
    EstimateError, EstimateResult, ELIMINATION_DECREMENT,
};
pub use units::{convert, height_to_cm, weight_to_kg, Dimension};
