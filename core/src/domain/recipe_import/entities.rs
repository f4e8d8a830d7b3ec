use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::{Difficulty, RecipeCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FoodType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

/// Ingredient line as returned by the upstream catalogue; units are free-form
/// provider strings, not our measurement enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportedIngredient {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe reshaped from the external catalogue into our structure. It is
/// not persisted; callers decide what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportedRecipe {
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub cuisine: String,
    pub serves: u32,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub food_type: FoodType,
    pub image_url: Option<String>,
    pub ingredients: Vec<ImportedIngredient>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}
