use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_all(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn list_recipes(
        &self,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
