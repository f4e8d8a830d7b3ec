use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::{ports::InventoryRepository, value_objects::GetInventoryFilter},
    iot::ports::SensorReadingRepository,
    matching::{
        entities::{CategorizedRecipes, IngredientMatch, RecipeServing, SubstituteResult},
        helpers::{
            categorize_recipes, find_recipes_by_ingredients, rank_recipes_by_serving,
            resolve_substitutes,
        },
        ports::MatchingService,
    },
    recipe::{ports::RecipeRepository, value_objects::GetRecipesFilter},
    recipe_import::ports::RecipeProvider,
};

impl<I, R, S, H, P> MatchingService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn serving_overview(&self) -> Result<Vec<RecipeServing>, CoreError> {
        let recipes = self
            .recipe_repository
            .get_all(GetRecipesFilter::default())
            .await?;
        let inventory = self
            .inventory_repository
            .get_all(GetInventoryFilter::default())
            .await?;

        rank_recipes_by_serving(&recipes, &inventory)
    }

    async fn categorize(&self) -> Result<CategorizedRecipes, CoreError> {
        let recipes = self
            .recipe_repository
            .get_all(GetRecipesFilter::default())
            .await?;
        let inventory = self
            .inventory_repository
            .get_all(GetInventoryFilter::default())
            .await?;

        categorize_recipes(&recipes, &inventory)
    }

    async fn substitutes_for(&self, recipe_id: Uuid) -> Result<SubstituteResult, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let inventory = self
            .inventory_repository
            .get_all(GetInventoryFilter::default())
            .await?;

        Ok(resolve_substitutes(&recipe, &inventory))
    }

    async fn find_by_ingredients(
        &self,
        ingredient_names: Vec<String>,
    ) -> Result<Vec<IngredientMatch>, CoreError> {
        let recipes = self
            .recipe_repository
            .get_all(GetRecipesFilter::default())
            .await?;

        Ok(find_recipes_by_ingredients(&recipes, &ingredient_names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::units::MeasurementUnit,
        health::ports::MockHealthCheckRepository,
        inventory::{
            entities::{InventoryItem, InventoryItemConfig, ItemCategory},
            ports::MockInventoryRepository,
        },
        iot::ports::MockSensorReadingRepository,
        recipe::{
            entities::{Difficulty, IngredientRequirement, Recipe, RecipeCategory, RecipeConfig},
            ports::MockRecipeRepository,
        },
        recipe_import::ports::MockRecipeProvider,
    };

    fn service(
        inventory_repository: MockInventoryRepository,
        recipe_repository: MockRecipeRepository,
    ) -> Service<
        MockInventoryRepository,
        MockRecipeRepository,
        MockSensorReadingRepository,
        MockHealthCheckRepository,
        MockRecipeProvider,
    > {
        Service::new(
            inventory_repository,
            recipe_repository,
            MockSensorReadingRepository::new(),
            MockHealthCheckRepository::new(),
            MockRecipeProvider::new(),
        )
    }

    fn sample_recipe() -> Recipe {
        Recipe::new(RecipeConfig {
            name: "Jeera Rice".to_string(),
            description: String::new(),
            category: RecipeCategory::Rice,
            cuisine: "Indian".to_string(),
            ingredients: vec![IngredientRequirement {
                ingredient_name: "Rice".to_string(),
                quantity: 100.0,
                unit: MeasurementUnit::G,
            }],
            steps: vec!["Cook".to_string()],
            serves: 2,
            preparation_time: 20,
            difficulty: Difficulty::Easy,
            possible_substitutes: Vec::new(),
            image_url: None,
            tags: Vec::new(),
        })
    }

    fn sample_stock() -> InventoryItem {
        InventoryItem::new(InventoryItemConfig {
            name: "Rice".to_string(),
            category: ItemCategory::Grains,
            current_quantity: 1000.0,
            unit: MeasurementUnit::G,
            threshold: 200.0,
            perishable: false,
        })
    }

    #[tokio::test]
    async fn substitutes_for_unknown_recipe_is_not_found() {
        let mut recipe_repository = MockRecipeRepository::new();
        recipe_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(MockInventoryRepository::new(), recipe_repository);

        let result = service.substitutes_for(Uuid::new_v4()).await;
        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn categorize_loads_recipes_and_inventory_once() {
        let mut recipe_repository = MockRecipeRepository::new();
        recipe_repository
            .expect_get_all()
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![sample_recipe()]) }));

        let mut inventory_repository = MockInventoryRepository::new();
        inventory_repository
            .expect_get_all()
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![sample_stock()]) }));

        let service = service(inventory_repository, recipe_repository);

        let results = service.categorize().await.unwrap();
        assert_eq!(results.can_make_now.len(), 1);
        assert_eq!(results.can_make_now[0].serving_info.max_serving, 10);
    }
}
