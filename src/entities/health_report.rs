use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single case report filed by a community health worker. Immutable once
/// recorded; the dashboard only ever appends new reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub date: NaiveDate,
    pub location: String,
    pub symptom: String,
    /// Always >= 1; validated at the form boundary.
    pub case_count: u32,
    pub water_quality_observation: WaterQuality,
    pub reporter_id: String,
}

/// Field observation of local water quality, as reported alongside cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterQuality {
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for WaterQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WaterQuality::Good => "Good",
            WaterQuality::Fair => "Fair",
            WaterQuality::Poor => "Poor",
        };
        f.write_str(s)
    }
}
