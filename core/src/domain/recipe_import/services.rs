use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryRepository,
    iot::ports::SensorReadingRepository,
    recipe::{entities::RecipeCategory, ports::RecipeRepository},
    recipe_import::{
        entities::{ImportedIngredient, ImportedRecipe},
        helpers::{classify_food_type, difficulty_from_prep_time, strip_html_tags},
        ports::{RecipeImportService, RecipeProvider},
        value_objects::{ImportRecipesInput, ProviderRecipe},
    },
};

impl<I, R, S, H, P> RecipeImportService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn import_recipes(
        &self,
        input: ImportRecipesInput,
    ) -> Result<Vec<ImportedRecipe>, CoreError> {
        let provider_recipes = self
            .recipe_provider
            .search_recipes(input.cuisine.clone(), input.diet)
            .await?;

        Ok(provider_recipes
            .into_iter()
            .map(|recipe| reshape_recipe(recipe, input.cuisine.as_deref()))
            .collect())
    }
}

fn reshape_recipe(recipe: ProviderRecipe, requested_cuisine: Option<&str>) -> ImportedRecipe {
    let ingredient_names: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| i.name.clone())
        .collect();
    let food_type = classify_food_type(recipe.vegetarian, &ingredient_names);

    let cuisine = requested_cuisine
        .map(str::to_string)
        .or_else(|| recipe.cuisines.first().cloned())
        .unwrap_or_else(|| "General".to_string());

    ImportedRecipe {
        name: recipe.title,
        description: recipe
            .summary
            .as_deref()
            .map(strip_html_tags)
            .unwrap_or_default(),
        category: RecipeCategory::MainCourse,
        cuisine,
        serves: recipe.servings,
        preparation_time: recipe.ready_in_minutes,
        difficulty: difficulty_from_prep_time(recipe.ready_in_minutes),
        image_url: recipe.image,
        ingredients: recipe
            .ingredients
            .into_iter()
            .map(|i| ImportedIngredient {
                ingredient_name: i.name,
                quantity: i.amount.unwrap_or(1.0),
                unit: i.unit.unwrap_or_else(|| "unit".to_string()),
            })
            .collect(),
        steps: recipe.steps,
        tags: vec![food_type.as_str().to_string()],
        food_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::Difficulty;
    use crate::domain::recipe_import::{
        entities::FoodType, value_objects::ProviderIngredient,
    };

    fn provider_recipe() -> ProviderRecipe {
        ProviderRecipe {
            title: "Paneer Tikka".to_string(),
            summary: Some("A <b>grilled</b> classic".to_string()),
            cuisines: vec!["Indian".to_string()],
            servings: 4,
            ready_in_minutes: 30,
            image: None,
            vegetarian: true,
            ingredients: vec![ProviderIngredient {
                name: "paneer".to_string(),
                amount: None,
                unit: None,
            }],
            steps: vec!["Grill the paneer".to_string()],
        }
    }

    #[test]
    fn reshapes_provider_fields() {
        let imported = reshape_recipe(provider_recipe(), None);
        assert_eq!(imported.name, "Paneer Tikka");
        assert_eq!(imported.description, "A grilled classic");
        assert_eq!(imported.cuisine, "Indian");
        assert_eq!(imported.difficulty, Difficulty::Medium);
        assert_eq!(imported.food_type, FoodType::Vegetarian);
        assert_eq!(imported.tags, vec!["Vegetarian".to_string()]);
        assert_eq!(imported.ingredients[0].quantity, 1.0);
        assert_eq!(imported.ingredients[0].unit, "unit");
    }

    #[test]
    fn requested_cuisine_overrides_provider_cuisine() {
        let imported = reshape_recipe(provider_recipe(), Some("North Indian"));
        assert_eq!(imported.cuisine, "North Indian");
    }

    #[test]
    fn keyword_in_ingredients_vetoes_vegetarian_flag() {
        let mut recipe = provider_recipe();
        recipe.ingredients.push(ProviderIngredient {
            name: "chicken stock".to_string(),
            amount: Some(200.0),
            unit: Some("ml".to_string()),
        });

        let imported = reshape_recipe(recipe, None);
        assert_eq!(imported.food_type, FoodType::NonVegetarian);
        assert_eq!(imported.tags, vec!["Non-Vegetarian".to_string()]);
    }
}
