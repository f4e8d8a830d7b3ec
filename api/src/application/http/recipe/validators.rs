use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use rasoi_core::domain::recipe::entities::{
    Difficulty, IngredientRequirement, RecipeCategory, SubstitutionRule,
};

fn validate_ingredients(ingredients: &Vec<IngredientRequirement>) -> Result<(), ValidationError> {
    for ingredient in ingredients {
        if ingredient.ingredient_name.trim().is_empty() {
            let mut error = ValidationError::new("ingredient_name");
            error.message = Some("ingredient names must not be empty".into());
            return Err(error);
        }
        if ingredient.quantity <= 0.0 {
            let mut error = ValidationError::new("quantity");
            error.message = Some("ingredient quantities must be positive".into());
            return Err(error);
        }
    }
    Ok(())
}

fn validate_substitutes(rules: &Vec<SubstitutionRule>) -> Result<(), ValidationError> {
    for rule in rules {
        for substitute in &rule.substitutes {
            if substitute.ratio <= 0.0 {
                let mut error = ValidationError::new("ratio");
                error.message = Some("substitute ratios must be positive".into());
                return Err(error);
            }
        }
    }
    Ok(())
}

fn default_cuisine() -> String {
    "Indian".to_string()
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub category: RecipeCategory,

    #[serde(default = "default_cuisine")]
    pub cuisine: String,

    #[validate(
        length(min = 1, message = "at least one ingredient is required"),
        custom(function = validate_ingredients)
    )]
    pub ingredients: Vec<IngredientRequirement>,

    #[validate(length(min = 1, message = "at least one step is required"))]
    pub steps: Vec<String>,

    #[validate(range(min = 1, message = "serves must be positive"))]
    pub serves: u32,

    #[validate(range(min = 1, message = "preparation_time must be positive"))]
    pub preparation_time: u32,

    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,

    #[serde(default)]
    #[validate(custom(function = validate_substitutes))]
    pub possible_substitutes: Vec<SubstitutionRule>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<RecipeCategory>,

    #[serde(default)]
    pub cuisine: Option<String>,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "at least one ingredient is required"),
        custom(function = validate_ingredients)
    )]
    pub ingredients: Option<Vec<IngredientRequirement>>,

    #[serde(default)]
    #[validate(length(min = 1, message = "at least one step is required"))]
    pub steps: Option<Vec<String>>,

    #[serde(default)]
    #[validate(range(min = 1, message = "serves must be positive"))]
    pub serves: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "preparation_time must be positive"))]
    pub preparation_time: Option<u32>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    #[validate(custom(function = validate_substitutes))]
    pub possible_substitutes: Option<Vec<SubstitutionRule>>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
