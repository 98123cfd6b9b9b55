use crate::models::food::FoodItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub condition: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodResponse {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub recipe: String,
}

impl From<&FoodItem> for FoodResponse {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.to_string(),
            price: item.price(),
            category: item.category.to_string(),
            recipe: item.recipe.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodListResponse {
    pub foods: Vec<FoodResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub condition: String,
    pub foods: Vec<FoodResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionListResponse {
    pub conditions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub accepted: bool,
    pub total: Decimal,
    pub budget: Decimal,
    /// Amount over budget, present only on rejection
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub overage: Option<Decimal>,
    /// Names appended to the user's food choices
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
