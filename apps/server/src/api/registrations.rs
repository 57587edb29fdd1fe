use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use atlasboard_core::constants::COMPACT_TIME_FORMAT;
use atlasboard_core::notifications::Event;
use atlasboard_core::registrations::{
    NewRegistration, Registration, RegistrationCreated, RegistrationPatch,
    RegistrationServiceTrait,
};

use crate::api::dispatch_event;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn create_registration(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewRegistration>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegistrationCreated>)> {
    let Json(new_registration) = body.map_err(ApiError::from)?;
    let registration = state.registration_service.create(new_registration).await?;

    let response = RegistrationCreated {
        id: registration.id.clone(),
        last_change: registration
            .last_change
            .format(COMPACT_TIME_FORMAT)
            .to_string(),
    };
    dispatch_event(&state, Event::Register, registration.country_key().to_string());
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_registrations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Registration>>> {
    let registrations = state.registration_service.list().await?;
    Ok(Json(registrations))
}

async fn get_registration(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Registration>> {
    let registration = state.registration_service.get(&id).await?;
    Ok(Json(registration))
}

async fn replace_registration(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewRegistration>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(new_registration) = body.map_err(ApiError::from)?;
    let updated = state
        .registration_service
        .replace(&id, new_registration)
        .await?;

    dispatch_event(&state, Event::Change, updated.country_key().to_string());
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_registration(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegistrationPatch>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(patch) = body.map_err(ApiError::from)?;
    // The service returns the post-mutation record, so the CHANGE key always
    // reflects the stored state even when the patch body carried no country.
    let updated = state.registration_service.patch(&id, patch).await?;

    dispatch_event(&state, Event::Change, updated.country_key().to_string());
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_registration(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state.registration_service.delete(&id).await?;

    dispatch_event(&state, Event::Delete, deleted.country_key().to_string());
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/registrations",
            get(get_registrations).post(create_registration),
        )
        .route(
            "/registrations/{id}",
            get(get_registration)
                .put(replace_registration)
                .patch(patch_registration)
                .delete(delete_registration),
        )
}
