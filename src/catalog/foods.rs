use crate::models::food::FoodItem;

/// The fixed food catalog, in display order
pub static CATALOG: [FoodItem; 10] = [
    FoodItem::new("Oatmeal", 250, "Breakfast", "Mix oats with water or milk, cook until soft."),
    FoodItem::new("Banana", 50, "Fruit", "Peel and eat."),
    FoodItem::new("Salmon", 600, "Protein", "Grill or bake with seasoning."),
    FoodItem::new("Spinach", 150, "Vegetable", "Sauté with garlic."),
    FoodItem::new("Almonds", 300, "Snacks", "Eat raw or roasted."),
    FoodItem::new("Yogurt", 100, "Dairy", "Enjoy plain or with fruits."),
    FoodItem::new("Garlic", 30, "Herb", "Chop and add to dishes."),
    FoodItem::new("Beets", 120, "Vegetable", "Roast or boil."),
    FoodItem::new("Berries", 350, "Fruit", "Eat fresh or add to smoothies."),
    FoodItem::new("Whole Grains", 200, "Grain", "Use in bread or cereals."),
];

pub fn all() -> &'static [FoodItem] {
    &CATALOG
}

/// Find a catalog item by name, ignoring case
pub fn find(name: &str) -> Option<&'static FoodItem> {
    CATALOG.iter().find(|item| item.is_named(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<String> = all().iter().map(|item| item.name.to_lowercase()).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_find_case_insensitive() {
        let item = find("bAnAnA").expect("banana should be in the catalog");
        assert_eq!(item.name, "Banana");
        assert_eq!(item.price(), Decimal::new(5, 1));
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("pizza").is_none());
    }
}
