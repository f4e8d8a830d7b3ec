pub mod import_recipes;
