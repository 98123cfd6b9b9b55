use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::OrderResponse;
use crate::stores::user_store::OrderOutcome;
use crate::validation::params::OrderParams;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Place a food order against the user's budget
///
/// POST /users/{username}/orders
///
/// An accepted order returns 200. An order over budget returns 422 with the
/// overage and leaves the user's food choices untouched.
pub async fn place_order_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(params): Json<OrderParams>,
) -> Result<Response, ApiError> {
    let items = params.validate()?;

    let mut store = state.store()?;
    let outcome = store.place_order(&username, &items)?;

    let response = match outcome {
        OrderOutcome::Accepted { total, items } => {
            let budget = store
                .login(&username)
                .map(|user| user.budget)
                .unwrap_or_default();
            (
                StatusCode::OK,
                Json(OrderResponse {
                    accepted: true,
                    total,
                    budget,
                    overage: None,
                    items,
                }),
            )
        }
        OrderOutcome::Rejected {
            total,
            budget,
            overage,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(OrderResponse {
                accepted: false,
                total,
                budget,
                overage: Some(overage),
                items: Vec::new(),
            }),
        ),
    };

    Ok(response.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::users::register_handler;
    use crate::handlers::users::tests::{body_json, create_test_state, register_params};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn order(items: &[&str]) -> Json<OrderParams> {
        Json(OrderParams {
            items: items.iter().map(|item| item.to_string()).collect(),
        })
    }

    #[tokio::test]
    async fn test_order_over_budget() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);
        register_handler(State(Arc::clone(&state)), Json(register_params("kim")))
            .await
            .unwrap();

        let response = place_order_handler(
            State(Arc::clone(&state)),
            Path("kim".to_string()),
            order(&["Oatmeal", "Banana"]),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: OrderResponse = body_json(response).await;
        assert!(!body.accepted);
        assert_eq!(body.total, Decimal::new(3, 0));
        assert_eq!(body.overage, Some(Decimal::ONE));
        assert!(state.store().unwrap().login("kim").unwrap().food_choices.is_empty());
    }

    #[tokio::test]
    async fn test_order_within_budget() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);
        register_handler(State(Arc::clone(&state)), Json(register_params("lee")))
            .await
            .unwrap();

        let response = place_order_handler(
            State(Arc::clone(&state)),
            Path("lee".to_string()),
            order(&["banana", "Yogurt"]),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: OrderResponse = body_json(response).await;
        assert!(body.accepted);
        assert_eq!(body.total, Decimal::new(15, 1));
        assert_eq!(body.budget, Decimal::new(2, 0));
        assert_eq!(body.overage, None);
        assert_eq!(body.items, vec!["Banana".to_string(), "Yogurt".to_string()]);

        let store = state.store().unwrap();
        assert_eq!(store.login("lee").unwrap().food_choices, body.items);
    }

    #[tokio::test]
    async fn test_order_unknown_item() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);
        register_handler(State(Arc::clone(&state)), Json(register_params("mo")))
            .await
            .unwrap();

        let err = place_order_handler(State(state), Path("mo".to_string()), order(&["Pizza"]))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_order_unknown_user() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);

        let err = place_order_handler(State(state), Path("nobody".to_string()), order(&["Banana"]))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
