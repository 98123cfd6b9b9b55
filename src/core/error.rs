// Centralized error handling for the service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the user record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("User not found: {0}")]
    UnknownUsername(String),

    #[error("Failed to persist users: {0}")]
    Persist(#[from] anyhow::Error),
}

/// An order whose total is above the user's budget
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Order total {total} exceeds budget {budget} by {overage}")]
pub struct BudgetExceeded {
    pub total: Decimal,
    pub budget: Decimal,
    pub overage: Decimal,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter format: {0}")]
    InvalidFormat(String),

    #[error("Parameter out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown health condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown food item: {0}")]
    UnknownFoodItem(String),

    #[error("Order must contain at least one item")]
    EmptyOrder,
}

/// Errors surfaced by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(username) => ApiError::DuplicateUsername(username),
            StoreError::UnknownUsername(username) => ApiError::UserNotFound(username),
            StoreError::Persist(e) => ApiError::InternalError(format!("{:#}", e)),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUsername(_) => StatusCode::CONFLICT,
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        (
            self.status(),
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
