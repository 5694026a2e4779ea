use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use super::reports::{RecentQuery, DEFAULT_RECENT_LIMIT};
use crate::session::SharedSession;

// GET /alerts/recent
pub async fn list_recent_alerts(
    Extension(session): Extension<SharedSession>,
    Query(query): Query<RecentQuery>,
) -> impl IntoResponse {
    let log = session.lock().await;
    let recent = log
        .recent_alerts(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .to_vec();
    Json(recent)
}
