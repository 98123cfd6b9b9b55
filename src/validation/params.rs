use crate::catalog::conditions::HealthCondition;
use crate::catalog::foods;
use crate::core::error::ValidationError;
use crate::models::food::FoodItem;
use crate::models::user::ProfileUpdate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Body of a registration request
#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub username: String,

    /// Spending limit, non-negative
    pub budget: Decimal,

    pub age: u32,

    /// Kilograms, non-negative
    pub weight: f64,

    /// Centimetres, non-negative
    pub height: f64,

    /// One of the health condition labels, any case
    pub health_condition: String,
}

#[derive(Debug, PartialEq)]
pub struct ValidatedRegistration {
    pub username: String,
    pub budget: Decimal,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub health_condition: HealthCondition,
}

/// Body of a profile update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateParams {
    pub budget: Option<Decimal>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub health_condition: Option<String>,
}

/// Body of an order request
#[derive(Debug, Deserialize)]
pub struct OrderParams {
    /// Catalog item names in selection order; repeats are allowed
    pub items: Vec<String>,
}

impl RegisterParams {
    pub fn validate(self) -> Result<ValidatedRegistration, ValidationError> {
        let username = validate_username(&self.username)?;
        let budget = validate_budget(self.budget)?;
        let weight = validate_measure("weight", self.weight)?;
        let height = validate_measure("height", self.height)?;
        let health_condition = parse_condition(&self.health_condition)?;

        Ok(ValidatedRegistration {
            username,
            budget,
            age: self.age,
            weight,
            height,
            health_condition,
        })
    }
}

impl UpdateParams {
    pub fn validate(self) -> Result<ProfileUpdate, ValidationError> {
        let update = ProfileUpdate {
            budget: self.budget.map(validate_budget).transpose()?,
            age: self.age,
            weight: self.weight.map(|w| validate_measure("weight", w)).transpose()?,
            height: self.height.map(|h| validate_measure("height", h)).transpose()?,
            health_condition: self.health_condition.as_deref().map(parse_condition).transpose()?,
        };

        if update.is_empty() {
            return Err(ValidationError::MissingParameter(
                "at least one of budget, age, weight, height, health_condition".to_string(),
            ));
        }

        Ok(update)
    }
}

impl OrderParams {
    /// Resolve item names against the catalog, keeping selection order
    pub fn validate(&self) -> Result<Vec<&'static FoodItem>, ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyOrder);
        }

        self.items
            .iter()
            .map(|name| foods::find(name).ok_or_else(|| ValidationError::UnknownFoodItem(name.clone())))
            .collect()
    }
}

pub fn parse_condition(label: &str) -> Result<HealthCondition, ValidationError> {
    label
        .parse::<HealthCondition>()
        .map_err(|e| ValidationError::UnknownCondition(e.0))
}

fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::MissingParameter("username".to_string()));
    }
    if username.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat(
            "username must not contain control characters".to_string(),
        ));
    }
    Ok(username.to_string())
}

fn validate_budget(budget: Decimal) -> Result<Decimal, ValidationError> {
    if budget < Decimal::ZERO {
        return Err(ValidationError::OutOfRange(format!(
            "budget must be non-negative, got {}",
            budget
        )));
    }
    Ok(budget)
}

fn validate_measure(name: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat(format!("{} must be a finite number", name)));
    }
    if value < 0.0 {
        return Err(ValidationError::OutOfRange(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(value)
}
