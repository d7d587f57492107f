use foodshare_model::ReferenceData;

use super::CheckResult;
use crate::issue::Issue;

/// The food type must be one of the reference food types.
pub fn check_food_type(food_type: &str, reference: &ReferenceData) -> CheckResult {
    if food_type.is_empty() {
        return Err(Issue::FoodTypeMissing);
    }
    if !reference.is_food_type(food_type) {
        return Err(Issue::FoodTypeUnknown {
            food_type: food_type.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_type_membership() {
        let data = ReferenceData {
            food_types: vec!["Vegana".into(), "Mariscos".into()],
            ..ReferenceData::default()
        };
        assert_eq!(check_food_type("", &data), Err(Issue::FoodTypeMissing));
        assert!(check_food_type("Sushi", &data).is_err());
        assert!(check_food_type("Vegana", &data).is_ok());
    }
}
