//! HTTP routing for the versioned API surface.

mod dashboards;
mod notifications;
mod registrations;
mod shared;
mod status;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub(crate) use shared::dispatch_event;

/// Assemble the full application router under the versioned base path.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(registrations::router())
        .merge(dashboards::router())
        .merge(notifications::router())
        .merge(status::router());

    Router::new()
        .nest("/dashboard/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
