use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::validation::params::{RegisterParams, UpdateParams};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register a new user
///
/// POST /users
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<RegisterParams>,
) -> Result<Response, ApiError> {
    let registration = params.validate().inspect_err(|e| {
        warn!(error = %e, "Rejected registration");
    })?;

    let mut store = state.store()?;
    let user = store.register(
        &registration.username,
        registration.budget,
        registration.age,
        registration.weight,
        registration.height,
        registration.health_condition,
    )?;

    Ok((StatusCode::CREATED, Json(user.clone())).into_response())
}

/// Fetch a user's profile; there is no password
///
/// GET /users/{username}
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let store = state.store()?;
    let user = store
        .login(&username)
        .ok_or_else(|| ApiError::UserNotFound(username.clone()))?;

    info!(username = %username, "User logged in");

    Ok((StatusCode::OK, Json(user.clone())).into_response())
}

/// Overwrite the supplied profile fields
///
/// PATCH /users/{username}
pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(params): Json<UpdateParams>,
) -> Result<Response, ApiError> {
    let update = params.validate()?;

    let mut store = state.store()?;
    let user = store.update(&username, &update)?;

    Ok((StatusCode::OK, Json(user.clone())).into_response())
}
