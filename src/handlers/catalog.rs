use crate::catalog::conditions::HealthCondition;
use crate::catalog::foods;
use crate::catalog::recommend::recommend_for_label;
use crate::models::api::{
    ConditionListResponse, FoodListResponse, FoodResponse, RecommendationQuery,
    RecommendationResponse,
};
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::debug;

/// List every health condition label
///
/// GET /conditions
pub async fn conditions_handler() -> impl IntoResponse {
    let conditions = HealthCondition::ALL
        .iter()
        .map(|condition| condition.label().to_string())
        .collect();

    (StatusCode::OK, Json(ConditionListResponse { conditions }))
}

/// List the full food catalog
///
/// GET /foods
pub async fn foods_handler() -> impl IntoResponse {
    let foods = foods::all().iter().map(FoodResponse::from).collect();

    (StatusCode::OK, Json(FoodListResponse { foods }))
}

/// Foods recommended for a condition
///
/// GET /recommendations?condition=<label>
///
/// An unknown label is not an error; it simply has no recommendations.
pub async fn recommendations_handler(Query(params): Query<RecommendationQuery>) -> impl IntoResponse {
    let foods: Vec<FoodResponse> = recommend_for_label(&params.condition)
        .into_iter()
        .map(FoodResponse::from)
        .collect();

    debug!(
        condition = %params.condition,
        matches = foods.len(),
        "Recommendations looked up"
    );

    (
        StatusCode::OK,
        Json(RecommendationResponse {
            condition: params.condition,
            foods,
        }),
    )
}
