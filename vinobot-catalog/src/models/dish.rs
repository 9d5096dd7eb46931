//! Dish model: category, fat/protein levels, cooking time, recipe.
//!
//! Maps to the `dishes` table; validation happens in [`Dish::new`].

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Dish category used for coarse pairing heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishCategory {
    Meat,
    Fish,
    Vegetable,
    Cheese,
    Dessert,
}

impl DishCategory {
    /// Stable string form used in the `dishes.category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            DishCategory::Meat => "Meat",
            DishCategory::Fish => "Fish",
            DishCategory::Vegetable => "Vegetable",
            DishCategory::Cheese => "Cheese",
            DishCategory::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DishCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meat" => Ok(DishCategory::Meat),
            "fish" => Ok(DishCategory::Fish),
            "vegetable" => Ok(DishCategory::Vegetable),
            "cheese" => Ok(DishCategory::Cheese),
            "dessert" => Ok(DishCategory::Dessert),
            other => Err(CatalogError::Invalid(format!(
                "Unknown dish category: {}",
                other
            ))),
        }
    }
}

/// A dish with its pairing-relevant profile. Levels are 1-5, cooking time >= 0 minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub category: DishCategory,
    pub fat_level: i64,
    pub protein_level: i64,
    pub cooking_time_minutes: i64,
    pub ingredients: Option<String>,
    pub recipe: Option<String>,
}

impl Dish {
    /// Creates a dish with the required fields, validating bounds.
    /// `id` is 0 until the catalog assigns one on insert.
    pub fn new(
        name: impl Into<String>,
        category: DishCategory,
        fat_level: i64,
        protein_level: i64,
        cooking_time_minutes: i64,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::Invalid("Dish name must not be empty".into()));
        }
        validate_level("fat_level", fat_level)?;
        validate_level("protein_level", protein_level)?;
        if cooking_time_minutes < 0 {
            return Err(CatalogError::Invalid(format!(
                "Cooking time must not be negative, got {}",
                cooking_time_minutes
            )));
        }
        Ok(Self {
            id: 0,
            name,
            category,
            fat_level,
            protein_level,
            cooking_time_minutes,
            ingredients: None,
            recipe: None,
        })
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = Some(recipe.into());
        self
    }

    /// Cooking time as "2 h 30 min" / "45 min"; "not specified" when zero.
    pub fn cooking_time_formatted(&self) -> String {
        if self.cooking_time_minutes == 0 {
            return "not specified".to_string();
        }
        let hours = self.cooking_time_minutes / 60;
        let minutes = self.cooking_time_minutes % 60;
        if hours > 0 {
            format!("{} h {} min", hours, minutes)
        } else {
            format!("{} min", minutes)
        }
    }
}

impl std::fmt::Display for Dish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "*{}* ({})\n⏱ Cooking time: {}\n🔹 Fat: {}/5\n🔹 Protein: {}/5",
            self.name,
            self.category,
            self.cooking_time_formatted(),
            self.fat_level,
            self.protein_level,
        )
    }
}

fn validate_level(field: &str, value: i64) -> Result<(), CatalogError> {
    if !(1..=5).contains(&value) {
        return Err(CatalogError::Invalid(format!(
            "{} must be between 1 and 5, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_dish() {
        let dish = Dish::new("Duck", DishCategory::Meat, 4, 5, 90).unwrap();
        assert_eq!(dish.cooking_time_formatted(), "1 h 30 min");
    }

    #[test]
    fn test_cooking_time_short_and_zero() {
        let dish = Dish::new("Salad", DishCategory::Vegetable, 1, 1, 15).unwrap();
        assert_eq!(dish.cooking_time_formatted(), "15 min");
        let dish = Dish::new("Cheese plate", DishCategory::Cheese, 4, 3, 0).unwrap();
        assert_eq!(dish.cooking_time_formatted(), "not specified");
    }

    #[test]
    fn test_rejects_invalid_fields() {
        assert!(Dish::new("", DishCategory::Meat, 3, 3, 10).is_err());
        assert!(Dish::new("A", DishCategory::Meat, 0, 3, 10).is_err());
        assert!(Dish::new("A", DishCategory::Meat, 3, 3, -1).is_err());
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!("cheese".parse::<DishCategory>().unwrap(), DishCategory::Cheese);
        assert!("soup".parse::<DishCategory>().is_err());
    }
}
