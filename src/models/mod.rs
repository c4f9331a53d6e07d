//! Data models
//!
//! Rust structs representing estimator inputs and reference data.

mod body;
mod drink;
mod level;

pub use body::{BodyMetrics, Gender, UnitSystem};
pub use drink::{total_alcohol_units, Drink, DrinkKind};
pub use level::{BacLevel, BAC_LEVELS, DEFAULT_TARGET_BAC};
