//! Drink model
//!
//! Closed set of drink kinds with their simplified per-serving alcohol-unit
//! contributions. The constants are standard-drink proxies carried over from
//! the original calculator, not literal grams of ethanol.

use serde::{Deserialize, Serialize};

/// Kind of drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    Beer,
    Wine,
    Shot,
}

impl DrinkKind {
    /// All kinds, in display order
    pub const ALL: [DrinkKind; 3] = [DrinkKind::Beer, DrinkKind::Wine, DrinkKind::Shot];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkKind::Beer => "beer",
            DrinkKind::Wine => "wine",
            DrinkKind::Shot => "shot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beer" => Some(DrinkKind::Beer),
            "wine" => Some(DrinkKind::Wine),
            "shot" | "liquor" => Some(DrinkKind::Shot),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DrinkKind::Beer => "Beer",
            DrinkKind::Wine => "Wine",
            DrinkKind::Shot => "Shot",
        }
    }

    /// Serving description shown alongside estimates
    pub fn serving_label(&self) -> &'static str {
        match self {
            DrinkKind::Beer => "12oz, 4.5%",
            DrinkKind::Wine => "5oz, 12%",
            DrinkKind::Shot => "1.5oz, 40%",
        }
    }

    /// Alcohol units contributed by one serving
    ///
    /// The match is exhaustive so a new kind cannot be silently ignored in
    /// the summation.
    pub fn alcohol_units(&self) -> f64 {
        match self {
            DrinkKind::Beer => 0.54,
            DrinkKind::Wine => 0.6,
            DrinkKind::Shot => 0.6,
        }
    }
}

/// A consumed drink entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub kind: DrinkKind,
    pub count: u32,
}

impl Drink {
    /// A single serving of the given kind
    pub fn one(kind: DrinkKind) -> Self {
        Self { kind, count: 1 }
    }

    pub fn new(kind: DrinkKind, count: u32) -> Self {
        Self { kind, count }
    }

    /// Alcohol units contributed by this entry
    pub fn total_units(&self) -> f64 {
        self.kind.alcohol_units() * self.count as f64
    }
}

/// Sum alcohol units across a sequence of drinks
///
/// Order is display order only and does not affect the total.
pub fn total_alcohol_units(drinks: &[Drink]) -> f64 {
    drinks.iter().map(Drink::total_units).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alcohol_units_per_kind() {
        assert_eq!(DrinkKind::Beer.alcohol_units(), 0.54);
        assert_eq!(DrinkKind::Wine.alcohol_units(), 0.6);
        assert_eq!(DrinkKind::Shot.alcohol_units(), 0.6);
    }

    #[test]
    fn test_drink_total_units() {
        assert!((Drink::new(DrinkKind::Beer, 3).total_units() - 1.62).abs() < 1e-12);
        assert_eq!(Drink::one(DrinkKind::Wine).total_units(), 0.6);
    }

    #[test]
    fn test_total_alcohol_units() {
        // 2 beers + 1 wine = 2*0.54 + 0.6
        let drinks = vec![Drink::new(DrinkKind::Beer, 2), Drink::one(DrinkKind::Wine)];
        assert!((total_alcohol_units(&drinks) - 1.68).abs() < 1e-12);
    }

    #[test]
    fn test_total_is_order_independent() {
        let a = vec![Drink::one(DrinkKind::Shot), Drink::new(DrinkKind::Beer, 2)];
        let b = vec![Drink::new(DrinkKind::Beer, 2), Drink::one(DrinkKind::Shot)];
        assert_eq!(total_alcohol_units(&a), total_alcohol_units(&b));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(total_alcohol_units(&[]), 0.0);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(DrinkKind::from_str("beer"), Some(DrinkKind::Beer));
        assert_eq!(DrinkKind::from_str("SHOT"), Some(DrinkKind::Shot));
        assert_eq!(DrinkKind::from_str("mead"), None);
    }
}
