use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

use crate::entities::TestResult;
use crate::risk::{self, RiskAssessment};
use crate::sample::SampleDatasets;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub risk: RiskAssessment,
    pub overview: Overview,
}

/// The four headline figures shown at the top of the dashboard.
#[derive(Serialize)]
pub struct Overview {
    pub total_cases: u32,
    pub contaminated_water_sources: usize,
    pub high_rainfall_days: usize,
    pub active_reporters: usize,
}

// GET /dashboard
pub async fn get_dashboard(
    Extension(datasets): Extension<Arc<SampleDatasets>>,
) -> impl IntoResponse {
    // The clock is read here at the boundary; the scoring function itself
    // only ever sees the injected timestamp.
    let now = Utc::now();

    let risk = risk::assess(
        &datasets.health_reports,
        &datasets.water_tests,
        &datasets.environmental_readings,
        now,
    );

    let total_cases: u32 = datasets.health_reports.iter().map(|r| r.case_count).sum();

    let contaminated_water_sources = datasets
        .water_tests
        .iter()
        .filter(|t| t.result == TestResult::Contaminated)
        .map(|t| t.location.as_str())
        .collect::<HashSet<_>>()
        .len();

    let high_rainfall_days = datasets
        .environmental_readings
        .iter()
        .filter(|e| e.rainfall > 30.0)
        .map(|e| e.date)
        .collect::<HashSet<_>>()
        .len();

    let active_reporters = datasets
        .health_reports
        .iter()
        .map(|r| r.reporter_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    tracing::info!(
        tier = risk.tier.as_str(),
        score = risk.score,
        "computed outbreak risk"
    );

    Json(DashboardResponse {
        risk,
        overview: Overview {
            total_cases,
            contaminated_water_sources,
            high_rainfall_days,
            active_reporters,
        },
    })
}
