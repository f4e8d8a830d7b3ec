use serde_json::json;

use crate::{
    domain::recipe::entities::{Difficulty, Recipe, RecipeCategory},
    entity::recipes,
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            category: model.category.parse().unwrap_or(RecipeCategory::MainCourse),
            cuisine: model.cuisine.clone(),
            ingredients: serde_json::from_value(model.ingredients.clone()).unwrap_or_default(),
            steps: serde_json::from_value(model.steps.clone()).unwrap_or_default(),
            serves: model.serves.max(0) as u32,
            preparation_time: model.preparation_time.max(0) as u32,
            difficulty: model.difficulty.parse().unwrap_or(Difficulty::Medium),
            possible_substitutes: serde_json::from_value(model.possible_substitutes.clone())
                .unwrap_or_default(),
            image_url: model.image_url.clone(),
            tags: serde_json::from_value(model.tags.clone()).unwrap_or_default(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

pub fn to_active_model(recipe: &Recipe) -> recipes::ActiveModel {
    use sea_orm::ActiveValue::Set;

    recipes::ActiveModel {
        id: Set(recipe.id),
        name: Set(recipe.name.clone()),
        description: Set(recipe.description.clone()),
        category: Set(recipe.category.to_string()),
        cuisine: Set(recipe.cuisine.clone()),
        ingredients: Set(json!(recipe.ingredients)),
        steps: Set(json!(recipe.steps)),
        serves: Set(recipe.serves as i32),
        preparation_time: Set(recipe.preparation_time as i32),
        difficulty: Set(recipe.difficulty.to_string()),
        possible_substitutes: Set(json!(recipe.possible_substitutes)),
        image_url: Set(recipe.image_url.clone()),
        tags: Set(json!(recipe.tags)),
        created_at: Set(recipe.created_at.fixed_offset()),
        updated_at: Set(recipe.updated_at.fixed_offset()),
    }
}
