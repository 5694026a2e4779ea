use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HealthReport;

/// A health report as it entered the system through the submission form:
/// the report itself plus the submission timestamp and any free-text
/// comments the worker attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: HealthReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
