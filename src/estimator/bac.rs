//! BAC estimation
//!
//! Computes the current estimated blood alcohol content from consumed drinks,
//! and the number of drinks of each kind (taken alone) needed to reach a
//! target BAC. Both estimators share one body-factor computation so the
//! normalization, BMI adjustment, and gender constant cannot diverge.

use serde::Serialize;
use thiserror::Error;

use super::units::{height_to_cm, weight_to_kg};
use crate::models::{total_alcohol_units, BodyMetrics, Drink, DrinkKind};

/// Estimation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Weight, height, or target absent or not a positive finite number
    #[error("missing or invalid input: weight, height, and gender are required")]
    MissingInput,
}

/// Result type for estimation operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// BMI above which the adjustment dampens effective BAC
pub const BMI_OVERWEIGHT_THRESHOLD: f64 = 25.0;
/// BMI below which the adjustment amplifies effective BAC
pub const BMI_UNDERWEIGHT_THRESHOLD: f64 = 18.5;

/// Flat one-time elimination decrement applied to the current-BAC estimate
///
/// Carried over from the original calculator as a single fixed subtraction,
/// not scaled by elapsed time.
pub const ELIMINATION_DECREMENT: f64 = 0.015;

/// BMI adjustment factor applied to the body-water denominator
pub fn bmi_adjustment(bmi: f64) -> f64 {
    if bmi > BMI_OVERWEIGHT_THRESHOLD {
        0.85
    } else if bmi < BMI_UNDERWEIGHT_THRESHOLD {
        1.15
    } else {
        1.0
    }
}

/// Normalized body factors shared by both estimators
struct BodyFactors {
    weight_grams: f64,
    gender_constant: f64,
    bmi_adjustment: f64,
}

impl BodyFactors {
    /// The denominator of the Widmark-style formula
    fn denominator(&self) -> f64 {
        self.weight_grams * self.gender_constant * self.bmi_adjustment
    }
}

/// Normalize metrics to metric units and derive the shared factors
///
/// Non-finite or non-positive measurements are treated as missing input
/// rather than letting NaN propagate into the estimate.
fn body_factors(metrics: &BodyMetrics) -> EstimateResult<BodyFactors> {
    if !metrics.is_valid() {
        tracing::warn!(
            weight = metrics.weight,
            height = metrics.height,
            "estimate requested with invalid measurements"
        );
        return Err(EstimateError::MissingInput);
    }

    let weight_kg = weight_to_kg(metrics.weight, metrics.units);
    let height_m = height_to_cm(metrics.height, metrics.units) / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    Ok(BodyFactors {
        weight_grams: weight_kg * 1000.0,
        gender_constant: metrics.gender.body_water_ratio(),
        bmi_adjustment: bmi_adjustment(bmi),
    })
}

/// Estimate the current BAC from the entered drinks
///
/// Returns a non-negative fractional percent (e.g. 0.082). The result is
/// clamped to zero; the flat elimination decrement can otherwise push small
/// totals negative.
pub fn estimate_current_bac(metrics: &BodyMetrics, drinks: &[Drink]) -> EstimateResult<f64> {
    let factors = body_factors(metrics)?;
    let total_units = total_alcohol_units(drinks);

    let bac = (total_units * 100.0) / factors.denominator() - ELIMINATION_DECREMENT;
    Ok(bac.max(0.0))
}

/// Drink counts needed to reach a target BAC
///
/// Each count is an independent single-kind scenario, not a combined
/// recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrinkTargetEstimate {
    pub beers: u32,
    pub wines: u32,
    pub shots: u32,
}

/// Estimate how many drinks of each kind alone would reach the target BAC
pub fn estimate_drinks_for_target(
    metrics: &BodyMetrics,
    target_bac: f64,
) -> EstimateResult<DrinkTargetEstimate> {
    if !target_bac.is_finite() || target_bac <= 0.0 {
        tracing::warn!(target_bac, "estimate requested with invalid target BAC");
        return Err(EstimateError::MissingInput);
    }

    let factors = body_factors(metrics)?;
    let target_units = (target_bac * factors.denominator()) / 100.0;

    let count_for = |kind: DrinkKind| (target_units / kind.alcohol_units()).ceil() as u32;

    Ok(DrinkTargetEstimate {
        beers: count_for(DrinkKind::Beer),
        wines: count_for(DrinkKind::Wine),
        shots: count_for(DrinkKind::Shot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, UnitSystem};

    fn imperial_male() -> BodyMetrics {
        // 180 lbs / 70 in puts BMI at ~25.8, in the overweight band
        BodyMetrics::new(180.0, 70.0, UnitSystem::Imperial, Gender::Male)
    }

    fn metric_female() -> BodyMetrics {
        BodyMetrics::new(70.0, 165.0, UnitSystem::Metric, Gender::Female)
    }

    #[test]
    fn test_bmi_adjustment_bands() {
        assert_eq!(bmi_adjustment(26.0), 0.85);
        assert_eq!(bmi_adjustment(25.0), 1.0);
        assert_eq!(bmi_adjustment(22.0), 1.0);
        assert_eq!(bmi_adjustment(18.5), 1.0);
        assert_eq!(bmi_adjustment(17.0), 1.15);
    }

    #[test]
    fn test_target_scenario_imperial_male() {
        // 180 lbs -> 81.64656 kg, BMI 25.83 -> adjustment 0.85.
        // target units = (0.08 * 81646.56 * 0.68 * 0.85) / 100 = 37.7533693
        let est = estimate_drinks_for_target(&imperial_male(), 0.08).unwrap();
        assert_eq!(est.beers, 70); // ceil(37.7534 / 0.54)
        assert_eq!(est.wines, 63); // ceil(37.7534 / 0.6)
        assert_eq!(est.shots, 63);
    }

    #[test]
    fn test_target_scenario_normal_bmi() {
        // 180 lbs / 72 in gives BMI 24.4, so the adjustment stays at 1.0.
        // target units = (0.08 * 81646.56 * 0.68 * 1.0) / 100 = 44.4157286
        let metrics = BodyMetrics::new(180.0, 72.0, UnitSystem::Imperial, Gender::Male);
        let est = estimate_drinks_for_target(&metrics, 0.08).unwrap();
        assert_eq!(est.beers, 83); // ceil(44.4157 / 0.54)
        assert_eq!(est.wines, 75); // ceil(44.4157 / 0.6)
        assert_eq!(est.shots, 75);
    }

    #[test]
    fn test_wines_equal_shots_for_any_target() {
        for target in [0.02, 0.05, 0.08, 0.10, 0.15] {
            let est = estimate_drinks_for_target(&metric_female(), target).unwrap();
            assert_eq!(est.wines, est.shots);
        }
    }

    #[test]
    fn test_target_counts_non_decreasing() {
        let low = estimate_drinks_for_target(&imperial_male(), 0.08).unwrap();
        let high = estimate_drinks_for_target(&imperial_male(), 0.10).unwrap();
        assert!(high.beers >= low.beers);
        assert!(high.wines >= low.wines);
        assert!(high.shots >= low.shots);
    }

    #[test]
    fn test_current_bac_metric_female() {
        // 70 kg / 165 cm -> BMI 25.71 -> adjustment 0.85.
        // 2 beers + 1 wine = 1.68 units; the flat decrement pushes the raw
        // value negative, so the estimate clamps to zero.
        let drinks = vec![
            Drink::new(DrinkKind::Beer, 2),
            Drink::one(DrinkKind::Wine),
        ];
        let bac = estimate_current_bac(&metric_female(), &drinks).unwrap();

        let expected = ((1.68 * 100.0) / (70_000.0 * 0.55 * 0.85) - 0.015f64).max(0.0);
        assert!((bac - expected).abs() < 1e-9);
        assert_eq!(bac, 0.0);
    }

    #[test]
    fn test_current_bac_positive() {
        // 70 kg / 180 cm female, BMI 21.6 -> adjustment 1.0.
        // 12 beers = 6.48 units -> 648 / 38500 - 0.015 = 0.0018312
        let metrics = BodyMetrics::new(70.0, 180.0, UnitSystem::Metric, Gender::Female);
        let drinks = vec![Drink::new(DrinkKind::Beer, 12)];
        let bac = estimate_current_bac(&metrics, &drinks).unwrap();
        assert!((bac - (648.0 / 38_500.0 - 0.015)).abs() < 1e-9);
        assert!(bac > 0.0);
    }

    #[test]
    fn test_current_bac_never_negative() {
        let bac = estimate_current_bac(&metric_female(), &[]).unwrap();
        assert_eq!(bac, 0.0);

        let one = vec![Drink::one(DrinkKind::Shot)];
        assert!(estimate_current_bac(&metric_female(), &one).unwrap() >= 0.0);
    }

    #[test]
    fn test_current_bac_non_decreasing_in_drinks() {
        let metrics = BodyMetrics::new(70.0, 180.0, UnitSystem::Metric, Gender::Female);
        let mut drinks = Vec::new();
        let mut previous = estimate_current_bac(&metrics, &drinks).unwrap();
        for _ in 0..15 {
            drinks.push(Drink::one(DrinkKind::Beer));
            let next = estimate_current_bac(&metrics, &drinks).unwrap();
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn test_invalid_measurements_are_missing_input() {
        let zero_weight = BodyMetrics::new(0.0, 165.0, UnitSystem::Metric, Gender::Female);
        assert_eq!(
            estimate_current_bac(&zero_weight, &[]),
            Err(EstimateError::MissingInput)
        );

        let nan_height = BodyMetrics::new(70.0, f64::NAN, UnitSystem::Metric, Gender::Female);
        assert_eq!(
            estimate_drinks_for_target(&nan_height, 0.08),
            Err(EstimateError::MissingInput)
        );
    }

    #[test]
    fn test_invalid_target_is_missing_input() {
        assert_eq!(
            estimate_drinks_for_target(&metric_female(), 0.0),
            Err(EstimateError::MissingInput)
        );
        assert_eq!(
            estimate_drinks_for_target(&metric_female(), f64::NAN),
            Err(EstimateError::MissingInput)
        );
    }

    #[test]
    fn test_unit_system_does_not_change_result() {
        // The same body expressed in either system estimates the same counts.
        let imperial = imperial_male();
        let metric = BodyMetrics::new(
            180.0 * 0.453592,
            70.0 * 2.54,
            UnitSystem::Metric,
            Gender::Male,
        );
        assert_eq!(
            estimate_drinks_for_target(&imperial, 0.08).unwrap(),
            estimate_drinks_for_target(&metric, 0.08).unwrap()
        );
    }
}
