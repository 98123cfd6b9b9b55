// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::handlers::health::health_handler))

        // Catalog lookups
        .route("/conditions", get(crate::handlers::catalog::conditions_handler))
        .route("/foods", get(crate::handlers::catalog::foods_handler))
        .route("/recommendations", get(crate::handlers::catalog::recommendations_handler))

        // User records
        .route("/users", post(crate::handlers::users::register_handler))
        .route(
            "/users/{username}",
            get(crate::handlers::users::login_handler).patch(crate::handlers::users::update_handler),
        )
        .route("/users/{username}/orders", post(crate::handlers::orders::place_order_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::users::tests::{body_json, create_test_state};
    use crate::models::api::{OrderResponse, RecommendationResponse};
    use crate::models::user::UserRecord;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_order_and_login_flow() {
        let temp_dir = TempDir::new().unwrap();
        let app = build_router(create_test_state(&temp_dir));

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                serde_json::json!({
                    "username": "nina",
                    "budget": 5.0,
                    "age": 27,
                    "weight": 55.0,
                    "height": 160.0,
                    "health_condition": "immune support"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users/nina/orders",
                serde_json::json!({ "items": ["Spinach", "Garlic"] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let order: OrderResponse = body_json(response).await;
        assert!(order.accepted);

        let response = app
            .oneshot(Request::get("/users/nina").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let user: UserRecord = body_json(response).await;
        assert_eq!(user.food_choices, vec!["Spinach".to_string(), "Garlic".to_string()]);
    }

    #[tokio::test]
    async fn test_recommendations_route() {
        let temp_dir = TempDir::new().unwrap();
        let app = build_router(create_test_state(&temp_dir));

        let response = app
            .oneshot(
                Request::get("/recommendations?condition=high%20blood%20pressure")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let result: RecommendationResponse = body_json(response).await;
        assert_eq!(result.condition, "high blood pressure");
        assert_eq!(result.foods.len(), 2);
    }

    #[tokio::test]
    async fn test_patch_route() {
        let temp_dir = TempDir::new().unwrap();
        let app = build_router(create_test_state(&temp_dir));

        let response = app
            .oneshot(json_request(
                Method::PATCH,
                "/users/nobody",
                serde_json::json!({ "age": 3 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let temp_dir = TempDir::new().unwrap();
        let app = build_router(create_test_state(&temp_dir));

        let response = app
            .oneshot(Request::get("/announce").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
