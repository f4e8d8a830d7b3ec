use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryRepository,
    iot::ports::SensorReadingRepository,
    recipe::{
        entities::{Recipe, RecipeConfig},
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
    recipe_import::ports::RecipeProvider,
};

impl<I, R, S, H, P> RecipeService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<Recipe, CoreError> {
        let recipe = Recipe::new(RecipeConfig {
            name: input.name,
            description: input.description,
            category: input.category,
            cuisine: input.cuisine,
            ingredients: input.ingredients,
            steps: input.steps,
            serves: input.serves,
            preparation_time: input.preparation_time,
            difficulty: input.difficulty,
            possible_substitutes: input.possible_substitutes,
            image_url: input.image_url,
            tags: input.tags,
        });

        self.recipe_repository.create(recipe).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        self.recipe_repository.get_by_id(recipe_id).await
    }

    async fn list_recipes(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.get_all(filter).await
    }

    async fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        recipe.update(
            input.name,
            input.description,
            input.category,
            input.cuisine,
            input.ingredients,
            input.steps,
            input.serves,
            input.preparation_time,
            input.difficulty,
            input.possible_substitutes,
            input.image_url,
            input.tags,
        );

        self.recipe_repository.update(recipe).await
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.recipe_repository.delete(recipe_id).await
    }
}
