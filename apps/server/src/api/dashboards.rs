use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{any, get},
    Json, Router,
};

use atlasboard_core::dashboards::{Dashboard, DashboardServiceTrait};
use atlasboard_core::notifications::Event;

use crate::api::dispatch_event;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = state.dashboard_service.build_dashboard(&id).await?;

    let country_key = if dashboard.country.is_empty() {
        dashboard.iso_code.clone()
    } else {
        dashboard.country.clone()
    };
    dispatch_event(&state, Event::Invoke, country_key);
    Ok(Json(dashboard))
}

/// Dashboards are computed per registration; listing the collection is not a
/// thing.
async fn list_dashboards_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Cannot list dashboards".to_string())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboards", any(list_dashboards_not_allowed))
        .route("/dashboards/{id}", get(get_dashboard))
}
