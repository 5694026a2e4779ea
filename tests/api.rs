use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use healthwatch_server::{api, sample::SampleDatasets, session::SessionLog};

fn test_app() -> Router {
    let datasets = Arc::new(SampleDatasets::generate(42, chrono::Utc::now().date_naive()));
    api::router(datasets, SessionLog::shared())
}

async fn body_json(response: axum::http::Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_report(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/reports")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn report_payload(case_count: u32, water_quality: &str) -> Value {
    json!({
        "location": "Village A",
        "symptom": "Diarrhea",
        "case_count": case_count,
        "water_quality_observation": water_quality,
        "reporter_id": "ASHA 3",
        "comments": "clustered around the east well"
    })
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn dashboard_reports_risk_and_overview() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let score = body["risk"]["score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    let tier = body["risk"]["tier"].as_str().unwrap();
    assert!(["Low", "Medium", "High"].contains(&tier));

    assert!(body["overview"]["total_cases"].as_u64().unwrap() >= 50);
    assert!(body["overview"]["active_reporters"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn submitting_a_cluster_raises_a_medium_alert() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_report(report_payload(6, "Good")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["submission"]["case_count"], 6);
    assert_eq!(body["alert"]["priority"], "Medium");
    assert_eq!(
        body["alert"]["message"],
        "Alert: 6 cases of Diarrhea reported in Village A. Water quality: Good"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/alerts/recent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let alerts = body_json(response).await;
    assert_eq!(alerts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn ten_cases_escalate_to_high() {
    let response = test_app()
        .oneshot(post_report(report_payload(10, "Fair")))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["alert"]["priority"], "High");
}

#[tokio::test]
async fn small_report_with_good_water_raises_no_alert() {
    let response = test_app()
        .oneshot(post_report(report_payload(3, "Good")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["alert"].is_null());
}

#[tokio::test]
async fn zero_cases_are_rejected_at_the_boundary() {
    let response = test_app()
        .oneshot(post_report(report_payload(0, "Good")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("case_count"));
}

#[tokio::test]
async fn recent_submissions_default_to_five() {
    let app = test_app();
    for _ in 0..6 {
        let response = app
            .clone()
            .oneshot(post_report(report_payload(2, "Fair")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/reports/recent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let submissions = body_json(response).await;
    assert_eq!(submissions.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn health_data_export_is_csv_with_header() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/export/health-data.csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "text/csv"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("health_data.csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text
        .starts_with("date,location,symptom,case_count,water_quality_observation,reporter_id"));
    assert_eq!(text.lines().count(), 51);
}
