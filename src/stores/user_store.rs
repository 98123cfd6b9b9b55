use crate::catalog::conditions::HealthCondition;
use crate::core::error::StoreError;
use crate::models::food::FoodItem;
use crate::models::user::{ProfileUpdate, UserRecord};
use crate::orders::budget::{check_budget, order_total};
use crate::storage::users_file::{LoadIssue, UsersFile};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;

/// Result of placing an order
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// The order fit the budget and was appended to the user's food choices
    Accepted {
        total: Decimal,
        items: Vec<String>,
    },
    /// The order was over budget; nothing was recorded
    Rejected {
        total: Decimal,
        budget: Decimal,
        overage: Decimal,
    },
}

/// User profiles keyed by username, backed by the users file
///
/// Every mutation is staged on a copy of the map and written out in full
/// before it replaces the in-memory state, so a failed write changes nothing.
pub struct UserStore {
    users: BTreeMap<String, UserRecord>,
    file: UsersFile,
}

impl UserStore {
    /// Load the store from `file`
    ///
    /// Returns the store along with any entries that were skipped while loading.
    pub fn open(file: UsersFile) -> Result<(Self, Vec<LoadIssue>)> {
        let report = file.load()?;
        let store = Self {
            users: report.users,
            file,
        };
        Ok((store, report.issues))
    }

    /// Register a new user with empty food logs and persist the store
    pub fn register(
        &mut self,
        username: &str,
        budget: Decimal,
        age: u32,
        weight: f64,
        height: f64,
        health_condition: HealthCondition,
    ) -> Result<&UserRecord, StoreError> {
        if self.users.contains_key(username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let user = UserRecord::new(username.to_string(), budget, age, weight, height, health_condition);
        self.commit(|users| {
            users.insert(username.to_string(), user);
            Ok(())
        })?;

        info!(
            username = %username,
            health_condition = %health_condition,
            users = self.users.len(),
            "User registered"
        );

        self.login(username)
            .ok_or_else(|| StoreError::UnknownUsername(username.to_string()))
    }

    /// Look up a user by name; there is no password
    pub fn login(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Overwrite the supplied profile fields and persist the store
    pub fn update(&mut self, username: &str, update: &ProfileUpdate) -> Result<&UserRecord, StoreError> {
        self.commit(|users| {
            let user = users
                .get_mut(username)
                .ok_or_else(|| StoreError::UnknownUsername(username.to_string()))?;
            user.apply(update);
            Ok(())
        })?;

        info!(username = %username, "User profile updated");

        self.login(username)
            .ok_or_else(|| StoreError::UnknownUsername(username.to_string()))
    }

    /// Place an order for `items`
    ///
    /// An order above the user's budget is rejected without touching the store.
    /// Otherwise the item names are appended to the user's food choices in
    /// selection order. The budget is not drawn down.
    pub fn place_order(&mut self, username: &str, items: &[&FoodItem]) -> Result<OrderOutcome, StoreError> {
        let user = self
            .login(username)
            .ok_or_else(|| StoreError::UnknownUsername(username.to_string()))?;

        let total = order_total(items);
        if let Err(exceeded) = check_budget(total, user.budget) {
            info!(
                username = %username,
                total = %exceeded.total,
                budget = %exceeded.budget,
                overage = %exceeded.overage,
                "Order rejected, over budget"
            );
            return Ok(OrderOutcome::Rejected {
                total: exceeded.total,
                budget: exceeded.budget,
                overage: exceeded.overage,
            });
        }

        let names: Vec<String> = items.iter().map(|item| item.name.to_string()).collect();
        self.commit(|users| {
            let user = users
                .get_mut(username)
                .ok_or_else(|| StoreError::UnknownUsername(username.to_string()))?;
            user.food_choices.extend(names.iter().cloned());
            Ok(())
        })?;

        info!(
            username = %username,
            total = %total,
            items = names.len(),
            "Order placed"
        );

        Ok(OrderOutcome::Accepted { total, items: names })
    }

    /// Usernames in sorted order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Apply `change` to a copy of the users, write it out, then swap it in
    fn commit<F>(&mut self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, UserRecord>) -> Result<(), StoreError>,
    {
        let mut staged = self.users.clone();
        change(&mut staged)?;
        self.file.save(&staged)?;
        self.users = staged;
        Ok(())
    }
}
