use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::{
    Difficulty, IngredientRequirement, RecipeCategory, SubstitutionRule,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeInput {
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub cuisine: String,
    pub ingredients: Vec<IngredientRequirement>,
    pub steps: Vec<String>,
    pub serves: u32,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub possible_substitutes: Vec<SubstitutionRule>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<RecipeCategory>,
    pub cuisine: Option<String>,
    pub ingredients: Option<Vec<IngredientRequirement>>,
    pub steps: Option<Vec<String>>,
    pub serves: Option<u32>,
    pub preparation_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub possible_substitutes: Option<Vec<SubstitutionRule>>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub category: Option<RecipeCategory>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Free-text search over name, description and tags.
    pub search: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>, // e.g., "-created_at" or "name"
}
