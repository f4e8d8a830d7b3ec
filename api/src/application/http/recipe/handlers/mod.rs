pub mod create_recipe;
pub mod delete_recipe;
pub mod find_by_ingredients;
pub mod get_recipe;
pub mod get_recipe_matches;
pub mod get_recipes;
pub mod get_serving_overview;
pub mod get_substitutes;
pub mod update_recipe;
