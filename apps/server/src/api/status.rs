use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use atlasboard_core::status::StatusReport;

use crate::main_lib::AppState;

/// Probe every dependency live; the response status mirrors overall health.
async fn get_status(State(state): State<Arc<AppState>>) -> (StatusCode, Json<StatusReport>) {
    let report = state.status_service.get_status().await;
    let code = if report.healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}
