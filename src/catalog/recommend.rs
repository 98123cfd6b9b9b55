use crate::catalog::conditions::HealthCondition;
use crate::catalog::foods;
use crate::models::food::FoodItem;

/// Catalog items recommended for `condition`, in catalog order
pub fn recommend(condition: HealthCondition) -> Vec<&'static FoodItem> {
    let wanted = condition.recommended_foods();

    foods::all()
        .iter()
        .filter(|item| wanted.iter().any(|name| item.is_named(name)))
        .collect()
}

/// Same as [`recommend`] but keyed by label; an unknown label yields no items
pub fn recommend_for_label(label: &str) -> Vec<&'static FoodItem> {
    match label.parse::<HealthCondition>() {
        Ok(condition) => recommend(condition),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&FoodItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_diabetes_keeps_catalog_order() {
        let items = recommend(HealthCondition::Diabetes);
        assert_eq!(names(&items), vec!["Berries", "Whole Grains"]);
    }

    #[test]
    fn test_label_lookup() {
        let items = recommend_for_label("DIABETES");
        assert_eq!(names(&items), vec!["Berries", "Whole Grains"]);
    }

    #[test]
    fn test_unknown_label_is_empty() {
        assert!(recommend_for_label("not a condition").is_empty());
    }

    #[test]
    fn test_condition_with_no_catalog_match() {
        // none of the hydration foods are stocked
        assert!(recommend(HealthCondition::Hydration).is_empty());
    }

    #[test]
    fn test_multiple_matches() {
        let items = recommend(HealthCondition::ImmuneSupport);
        assert_eq!(names(&items), vec!["Spinach", "Almonds", "Yogurt", "Garlic"]);

        let items = recommend(HealthCondition::HighBloodPressure);
        assert_eq!(names(&items), vec!["Garlic", "Beets"]);
    }
}
