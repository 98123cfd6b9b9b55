use crate::core::error::BudgetExceeded;
use crate::models::food::FoodItem;
use rust_decimal::Decimal;
use tracing::debug;

/// Sum of the prices of `items`
pub fn order_total(items: &[&FoodItem]) -> Decimal {
    items.iter().map(|item| item.price()).sum()
}

/// Check that an order total fits within a budget
///
/// A total equal to the budget is accepted.
pub fn check_budget(total: Decimal, budget: Decimal) -> Result<(), BudgetExceeded> {
    if total > budget {
        let overage = total - budget;

        debug!(
            total = %total,
            budget = %budget,
            overage = %overage,
            "Order exceeds budget"
        );

        return Err(BudgetExceeded {
            total,
            budget,
            overage,
        });
    }

    Ok(())
}
