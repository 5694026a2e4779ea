use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::{Alert, HealthReport, Submission, WaterQuality};
use crate::risk;
use crate::session::SharedSession;

/// How many entries the dashboard shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

const MAX_CASE_COUNT: u32 = 50;

#[derive(Deserialize)]
pub struct SubmitReportRequest {
    pub location: String,
    pub symptom: String,
    pub case_count: u32,
    pub water_quality_observation: WaterQuality,
    pub reporter_id: String,
    pub comments: Option<String>,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("case_count must be between 1 and {MAX_CASE_COUNT}")]
    CaseCountOutOfRange,
    #[error("location must not be empty")]
    EmptyLocation,
    #[error("reporter_id must not be empty")]
    EmptyReporterId,
}

impl SubmitReportRequest {
    /// Malformed reports are rejected here so the scoring core only ever
    /// sees well-formed entities.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.case_count < 1 || self.case_count > MAX_CASE_COUNT {
            return Err(ValidationError::CaseCountOutOfRange);
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyLocation);
        }
        if self.reporter_id.trim().is_empty() {
            return Err(ValidationError::EmptyReporterId);
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct SubmitReportResponse {
    pub submission: Submission,
    pub alert: Option<Alert>,
}

// POST /reports
pub async fn submit_report(
    Extension(session): Extension<SharedSession>,
    Json(payload): Json<SubmitReportRequest>,
) -> Response {
    if let Err(e) = payload.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()})),
        )
            .into_response();
    }

    let now = Utc::now();
    let report = HealthReport {
        date: now.date_naive(),
        location: payload.location,
        symptom: payload.symptom,
        case_count: payload.case_count,
        water_quality_observation: payload.water_quality_observation,
        reporter_id: payload.reporter_id,
    };

    let alert = risk::evaluate_report(&report, now);

    let submission = Submission {
        id: Uuid::new_v4(),
        submitted_at: now,
        report,
        comments: payload.comments,
    };

    {
        let mut log = session.lock().await;
        log.record_submission(submission.clone());
        if let Some(alert) = &alert {
            log.record_alert(alert.clone());
        }
    }

    crate::metrics::increment_submissions();
    if let Some(alert) = &alert {
        crate::metrics::increment_alerts(alert.priority);
        tracing::warn!(priority = alert.priority.as_str(), "{}", alert.message);
    }

    (
        StatusCode::CREATED,
        Json(SubmitReportResponse { submission, alert }),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

// GET /reports/recent
pub async fn list_recent_submissions(
    Extension(session): Extension<SharedSession>,
    Query(query): Query<RecentQuery>,
) -> impl IntoResponse {
    let log = session.lock().await;
    let recent = log
        .recent_submissions(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .to_vec();
    Json(recent)
}
