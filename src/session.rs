//! Calculator session state
//!
//! An immutable value object holding everything the user has entered for one
//! page view. Every update consumes the session and returns a replacement, so
//! the single-writer property holds without any UI-framework state primitive.
//! Nothing here is persisted; derived values are recomputed on demand.

use serde::{Deserialize, Serialize};

use crate::estimator::{
    convert, estimate_current_bac, estimate_drinks_for_target, Dimension, DrinkTargetEstimate,
};
use crate::models::{BodyMetrics, Drink, DrinkKind, Gender, UnitSystem, DEFAULT_TARGET_BAC};

/// Round to one decimal, the display precision used for entered values
fn round_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Accept only positive finite values; anything else counts as absent
fn sanitize(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// State of one calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<Gender>,
    pub units: UnitSystem,
    pub target_bac: f64,
    pub drinks: Vec<Drink>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            weight: None,
            height: None,
            gender: None,
            units: UnitSystem::Imperial,
            target_bac: DEFAULT_TARGET_BAC,
            drinks: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entered weight, in the session's current units
    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.weight = sanitize(weight);
        self
    }

    /// Replace the entered height, in the session's current units
    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = sanitize(height);
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_target(mut self, target_bac: f64) -> Self {
        self.target_bac = target_bac;
        self
    }

    /// Switch unit systems, rewriting the stored weight and height
    ///
    /// Converted values are rounded to display precision, matching what the
    /// user sees in the inputs after a toggle.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        if units == self.units {
            return self;
        }

        self.weight = self
            .weight
            .map(|w| round_display(convert(w, self.units, units, Dimension::Weight)));
        self.height = self
            .height
            .map(|h| round_display(convert(h, self.units, units, Dimension::Height)));
        self.units = units;
        self
    }

    /// Append one serving of the given kind to the drink list
    pub fn add_drink(mut self, kind: DrinkKind) -> Self {
        self.drinks.push(Drink::one(kind));
        self
    }

    /// Remove the drink at the given display position; out-of-range is a no-op
    pub fn remove_drink(mut self, index: usize) -> Self {
        if index < self.drinks.len() {
            self.drinks.remove(index);
        }
        self
    }

    /// Complete body metrics, if weight, height, and gender are all present
    pub fn metrics(&self) -> Option<BodyMetrics> {
        match (self.weight, self.height, self.gender) {
            (Some(weight), Some(height), Some(gender)) => {
                Some(BodyMetrics::new(weight, height, self.units, gender))
            }
            _ => None,
        }
    }

    /// Current estimated BAC, or None while any required input is missing
    pub fn current_bac(&self) -> Option<f64> {
        let metrics = self.metrics()?;
        estimate_current_bac(&metrics, &self.drinks).ok()
    }

    /// Drink counts for the session target, or None while inputs are missing
    pub fn drinks_for_target(&self) -> Option<DrinkTargetEstimate> {
        let metrics = self.metrics()?;
        estimate_drinks_for_target(&metrics, self.target_bac).ok()
    }
}
