//! BAC level catalog
//!
//! Static reference data mapping target BAC fractions to human-readable
//! descriptions, used to populate the target selection control.

use serde::Serialize;

/// Default target BAC (legal intoxication limit)
pub const DEFAULT_TARGET_BAC: f64 = 0.08;

/// A catalog entry: a target BAC fraction and its description
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacLevel {
    pub bac: f64,
    pub description: &'static str,
}

impl BacLevel {
    /// Label for a selection control, e.g. "0.08% - Legal intoxication limit"
    pub fn label(&self) -> String {
        format!("{:.2}% - {}", self.bac, self.description)
    }
}

/// The fixed catalog, in ascending BAC order
pub const BAC_LEVELS: [BacLevel; 5] = [
    BacLevel {
        bac: 0.02,
        description: "Slight mood changes, relaxation",
    },
    BacLevel {
        bac: 0.05,
        description: "Lowered inhibitions, mild impairment",
    },
    BacLevel {
        bac: 0.08,
        description: "Legal intoxication limit - unsafe to drive",
    },
    BacLevel {
        bac: 0.10,
        description: "Significant impairment of coordination",
    },
    BacLevel {
        bac: 0.15,
        description: "DANGER: High intoxication",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ascending() {
        for pair in BAC_LEVELS.windows(2) {
            assert!(pair[0].bac < pair[1].bac);
        }
    }

    #[test]
    fn test_default_target_in_catalog() {
        assert!(BAC_LEVELS.iter().any(|l| l.bac == DEFAULT_TARGET_BAC));
    }

    #[test]
    fn test_label_format() {
        assert_eq!(
            BAC_LEVELS[0].label(),
            "0.02% - Slight mood changes, relaxation"
        );
    }
}
