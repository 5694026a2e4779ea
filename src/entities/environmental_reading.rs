use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily environmental reading for one location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub date: NaiveDate,
    pub location: String,
    /// Millimetres over the day.
    pub rainfall: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    pub flood_risk: FloodRisk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloodRisk {
    Low,
    Medium,
    High,
}
