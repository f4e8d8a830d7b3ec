use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_import::{
        ports::RecipeProvider,
        value_objects::{ProviderIngredient, ProviderRecipe},
    },
};

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<SpoonacularRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpoonacularRecipe {
    title: String,
    summary: Option<String>,
    #[serde(default)]
    cuisines: Vec<String>,
    #[serde(default = "default_servings")]
    servings: u32,
    #[serde(default)]
    ready_in_minutes: u32,
    image: Option<String>,
    #[serde(default)]
    vegetarian: bool,
    #[serde(default)]
    extended_ingredients: Vec<SpoonacularIngredient>,
    #[serde(default)]
    analyzed_instructions: Vec<SpoonacularInstructions>,
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct SpoonacularIngredient {
    name: String,
    amount: Option<f64>,
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpoonacularInstructions {
    #[serde(default)]
    steps: Vec<SpoonacularStep>,
}

#[derive(Debug, Deserialize)]
struct SpoonacularStep {
    step: String,
}

impl From<SpoonacularRecipe> for ProviderRecipe {
    fn from(recipe: SpoonacularRecipe) -> Self {
        let steps = recipe
            .analyzed_instructions
            .first()
            .map(|instructions| instructions.steps.iter().map(|s| s.step.clone()).collect())
            .unwrap_or_default();

        Self {
            title: recipe.title,
            summary: recipe.summary,
            cuisines: recipe.cuisines,
            servings: recipe.servings,
            ready_in_minutes: recipe.ready_in_minutes,
            image: recipe.image,
            vegetarian: recipe.vegetarian,
            ingredients: recipe
                .extended_ingredients
                .into_iter()
                .map(|i| ProviderIngredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                })
                .collect(),
            steps,
        }
    }
}

impl SpoonacularClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: Client::new(),
        }
    }
}

impl RecipeProvider for SpoonacularClient {
    async fn search_recipes(
        &self,
        cuisine: Option<String>,
        diet: Option<String>,
    ) -> Result<Vec<ProviderRecipe>, CoreError> {
        let url = format!("{}/recipes/complexSearch", self.base_url);

        let mut request = self.client.get(&url).query(&[
            ("apiKey", self.api_key.as_str()),
            ("addRecipeInformation", "true"),
            ("number", "20"),
        ]);

        if let Some(cuisine) = cuisine {
            request = request.query(&[("cuisine", cuisine)]);
        }
        if let Some(diet) = diet {
            request = request.query(&[("diet", diet)]);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Spoonacular request failed: {}", e);
            CoreError::ExternalServiceError(format!("recipe API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Spoonacular API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "recipe API returned error: {}",
                status
            )));
        }

        let search: ComplexSearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Spoonacular response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse recipe API response: {}", e))
        })?;

        Ok(search.results.into_iter().map(ProviderRecipe::from).collect())
    }
}
