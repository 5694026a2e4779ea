use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::export::{self, ExportError};
use crate::sample::SampleDatasets;

// GET /export/health-data.csv
pub async fn download_health_data(
    Extension(datasets): Extension<Arc<SampleDatasets>>,
) -> Response {
    csv_response(
        export::health_reports_csv(&datasets.health_reports),
        "health_data.csv",
    )
}

// GET /export/water-quality-data.csv
pub async fn download_water_quality_data(
    Extension(datasets): Extension<Arc<SampleDatasets>>,
) -> Response {
    csv_response(
        export::water_tests_csv(&datasets.water_tests),
        "water_quality_data.csv",
    )
}

// GET /export/environmental-data.csv
pub async fn download_environmental_data(
    Extension(datasets): Extension<Arc<SampleDatasets>>,
) -> Response {
    csv_response(
        export::environmental_readings_csv(&datasets.environmental_readings),
        "environmental_data.csv",
    )
}

fn csv_response(result: Result<String, ExportError>, filename: &str) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serialize {}: {}", filename, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate export"})),
            )
                .into_response()
        }
    }
}
