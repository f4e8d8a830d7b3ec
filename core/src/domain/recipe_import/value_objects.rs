use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct ImportRecipesInput {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
}

/// Provider-neutral shape of one upstream recipe, produced by the
/// `RecipeProvider` adapter before domain reshaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRecipe {
    pub title: String,
    pub summary: Option<String>,
    pub cuisines: Vec<String>,
    pub servings: u32,
    pub ready_in_minutes: u32,
    pub image: Option<String>,
    pub vegetarian: bool,
    pub ingredients: Vec<ProviderIngredient>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderIngredient {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}
