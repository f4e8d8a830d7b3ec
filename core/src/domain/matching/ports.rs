use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    matching::entities::{CategorizedRecipes, IngredientMatch, RecipeServing, SubstituteResult},
};

pub trait MatchingService: Send + Sync {
    /// Serving capacity for every recipe against the current inventory,
    /// best first.
    fn serving_overview(&self) -> impl Future<Output = Result<Vec<RecipeServing>, CoreError>> + Send;

    /// All recipes partitioned into the four priority buckets.
    fn categorize(&self) -> impl Future<Output = Result<CategorizedRecipes, CoreError>> + Send;

    /// Substitution suggestions for one recipe's missing ingredients.
    fn substitutes_for(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<SubstituteResult, CoreError>> + Send;

    /// Recipes that use any of the named ingredients.
    fn find_by_ingredients(
        &self,
        ingredient_names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<IngredientMatch>, CoreError>> + Send;
}
