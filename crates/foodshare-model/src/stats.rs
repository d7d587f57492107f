//! Aggregated counts and the comuna coordinate dataset.

use serde::{Deserialize, Serialize};

/// Events starting on a day (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount(pub String, pub u64);

/// Events per food type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodTypeCount(pub String, pub u64);

/// Images uploaded across all events of a comuna.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComunaImageCount(pub String, pub u64);

/// Events per month (`YYYY-MM`), split by the time of day they start.
///
/// The count vectors are aligned with `months`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDaypartCounts {
    pub months: Vec<String>,
    pub early: Vec<u64>,
    pub midday: Vec<u64>,
    pub evening: Vec<u64>,
}

/// Location of a comuna in the coordinate dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComunaCoordinates {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}
