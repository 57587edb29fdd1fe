use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use atlasboard_core::notifications::{
    NewNotification, Notification, NotificationCreated, NotificationServiceTrait,
};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn create_notification(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewNotification>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NotificationCreated>)> {
    let Json(new_notification) = body.map_err(ApiError::from)?;
    let notification = state.notification_service.create(new_notification).await?;
    Ok((
        StatusCode::CREATED,
        Json(NotificationCreated {
            id: notification.id,
        }),
    ))
}

async fn get_notifications(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Notification>>> {
    let notifications = state.notification_service.list().await?;
    Ok(Json(notifications))
}

async fn get_notification(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Notification>> {
    let notification = state.notification_service.get(&id).await?;
    Ok(Json(notification))
}

async fn delete_notification(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.notification_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/notifications",
            get(get_notifications).post(create_notification),
        )
        .route(
            "/notifications/{id}",
            get(get_notification).delete(delete_notification),
        )
}
