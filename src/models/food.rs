use rust_decimal::Decimal;

/// Entry of the fixed food catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodItem {
    pub name: &'static str,
    /// Price in cents
    pub price_cents: i64,
    pub category: &'static str,
    pub recipe: &'static str,
}

impl FoodItem {
    pub const fn new(
        name: &'static str,
        price_cents: i64,
        category: &'static str,
        recipe: &'static str,
    ) -> Self {
        Self {
            name,
            price_cents,
            category,
            recipe,
        }
    }

    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_cents() {
        let item = FoodItem::new("Garlic", 30, "Herb", "Chop and add to dishes.");
        assert_eq!(item.price(), Decimal::new(3, 1));
    }

    #[test]
    fn test_is_named_ignores_case_and_padding() {
        let item = FoodItem::new("Whole Grains", 200, "Grain", "Use in bread or cereals.");
        assert!(item.is_named("whole grains"));
        assert!(item.is_named("  WHOLE GRAINS "));
        assert!(!item.is_named("grains"));
    }
}
