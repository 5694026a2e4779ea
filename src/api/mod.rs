pub mod alerts;
pub mod dashboard;
pub mod export;
pub mod reports;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::sample::SampleDatasets;
use crate::session::SharedSession;

/// Routes served to the dashboard frontend. Observability layers (tracing,
/// CORS, Prometheus) are stacked on top by the server binary.
pub fn router(datasets: Arc<SampleDatasets>, session: SharedSession) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/reports", post(reports::submit_report))
        .route("/reports/recent", get(reports::list_recent_submissions))
        .route("/alerts/recent", get(alerts::list_recent_alerts))
        .route("/export/health-data.csv", get(export::download_health_data))
        .route(
            "/export/water-quality-data.csv",
            get(export::download_water_quality_data),
        )
        .route(
            "/export/environmental-data.csv",
            get(export::download_environmental_data),
        )
        .layer(Extension(datasets))
        .layer(Extension(session))
}

async fn health_check() -> &'static str {
    "OK"
}
