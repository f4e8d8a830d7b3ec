use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_import::{
        entities::ImportedRecipe,
        value_objects::{ImportRecipesInput, ProviderRecipe},
    },
};

/// Port to the external recipe catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeProvider: Send + Sync {
    fn search_recipes(
        &self,
        cuisine: Option<String>,
        diet: Option<String>,
    ) -> impl Future<Output = Result<Vec<ProviderRecipe>, CoreError>> + Send;
}

pub trait RecipeImportService: Send + Sync {
    fn import_recipes(
        &self,
        input: ImportRecipesInput,
    ) -> impl Future<Output = Result<Vec<ImportedRecipe>, CoreError>> + Send;
}
