use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use healthwatch_server::{api, metrics, sample::SampleDatasets, session::SessionLog, telemetry};

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    telemetry::init_telemetry("healthwatch-server");

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    // One seeded dataset per process; SAMPLE_SEED pins it for reproducible
    // demo sessions.
    let seed = std::env::var("SAMPLE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    tracing::info!(seed, "generating sample surveillance datasets");
    let datasets = Arc::new(SampleDatasets::generate(seed, Utc::now().date_naive()));

    metrics::init_metrics(&datasets);

    // The session log is owned here and handed to the router; one process
    // serves one dashboard session.
    let session = SessionLog::shared();

    let app = app(datasets, session, prometheus_layer, metric_handle);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}

fn app(
    datasets: Arc<SampleDatasets>,
    session: healthwatch_server::session::SharedSession,
    prometheus_layer: axum_prometheus::PrometheusMetricLayer<'static>,
    metric_handle: metrics_exporter_prometheus::PrometheusHandle,
) -> Router {
    let dashboard_origin = std::env::var("DASHBOARD_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    api::router(datasets, session)
        .layer(prometheus_layer)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched| matched.as_str());

                    // Dynamic span name: "METHOD /path" (e.g., "POST /reports")
                    let span_name = if let Some(path) = matched_path {
                        format!("{} {}", request.method(), path)
                    } else {
                        format!("{} {}", request.method(), request.uri().path())
                    };

                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        // Recorded once the response is ready
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(
                    |_request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                        // Skip the default "started processing request" event
                    },
                )
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", tracing::field::display(response.status()));
                        span.record("latency", tracing::field::debug(latency));
                        tracing::info!("request completed");
                    },
                ),
        )
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(
                    dashboard_origin
                        .parse::<axum::http::HeaderValue>()
                        .expect("DASHBOARD_ORIGIN is not a valid origin"),
                )
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .route("/metrics", get(|| async move { metric_handle.render() }))
}
