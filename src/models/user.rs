use crate::catalog::conditions::HealthCondition;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored profile of a registered user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique key of the record
    pub username: String,
    /// Spending limit for a single order
    pub budget: Decimal,
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    pub health_condition: HealthCondition,
    /// Names of ordered items, oldest first
    #[serde(default)]
    pub food_choices: Vec<String>,
    #[serde(default)]
    pub meals_logged: Vec<serde_json::Value>,
}

impl UserRecord {
    pub fn new(
        username: String,
        budget: Decimal,
        age: u32,
        weight: f64,
        height: f64,
        health_condition: HealthCondition,
    ) -> Self {
        Self {
            username,
            budget,
            age,
            weight,
            height,
            health_condition,
            food_choices: Vec::new(),
            meals_logged: Vec::new(),
        }
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(budget) = update.budget {
            self.budget = budget;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(condition) = update.health_condition {
            self.health_condition = condition;
        }
    }
}

/// Partial profile change; `None` fields are left as they are
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub budget: Option<Decimal>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub health_condition: Option<HealthCondition>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.health_condition.is_none()
    }
}
