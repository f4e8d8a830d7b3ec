use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::units::MeasurementUnit;
use crate::domain::recipe::entities::{IngredientRequirement, Recipe, SubstituteOption};

/// An ingredient whose current stock caps the recipe at zero servings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LimitingIngredient {
    pub ingredient: String,
    pub required: f64,
    pub available: f64,
    pub unit: MeasurementUnit,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientServing {
    pub ingredient: String,
    pub serves_possible: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServingResult {
    pub max_serving: u32,
    pub can_make: bool,
    /// Populated only when `max_serving` is zero.
    pub limiting_ingredients: Vec<LimitingIngredient>,
    pub details: Vec<IngredientServing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubstitutionSuggestion {
    pub missing_ingredient: String,
    pub required_quantity: f64,
    pub unit: MeasurementUnit,
    /// Stocked substitutes when any exist, otherwise the full candidate list
    /// (informational only).
    pub available_substitutes: Vec<SubstituteOption>,
    pub has_available_substitute: bool,
    pub is_generic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubstituteResult {
    pub missing_ingredients: Vec<IngredientRequirement>,
    pub substitution_suggestions: Vec<SubstitutionSuggestion>,
    pub can_make_with_substitutes: bool,
    pub total_missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeServing {
    pub recipe: Recipe,
    pub serving_info: ServingResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub serving_info: ServingResult,
    pub substitute_info: SubstituteResult,
}

/// Priority buckets; every input recipe lands in exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorizedRecipes {
    pub can_make_now: Vec<RecipeMatch>,
    pub can_make_with_substitutes: Vec<RecipeMatch>,
    pub missing_one_or_two: Vec<RecipeMatch>,
    pub cannot_make: Vec<RecipeMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    pub recipe: Recipe,
    pub matching_ingredients: Vec<String>,
    pub match_count: usize,
}
