use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository, value_objects::GetRecipesFilter},
    },
    entity::recipes::{Column, Entity},
    infrastructure::recipe::mappers::to_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_error(e: sea_orm::DbErr, context: &str) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::Validation("a recipe with this name already exists".to_string());
    }
    error!("{}: {}", context, e);
    CoreError::InternalServerError
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = Entity::insert(to_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to create recipe"))?;

        Ok(Recipe::from(created))
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(Recipe::from))
    }

    async fn get_all(&self, filter: GetRecipesFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut query = Entity::find();

        let mut condition = Condition::all();

        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category.to_string()));
        }

        if let Some(ref cuisine) = filter.cuisine {
            condition = condition.add(Column::Cuisine.eq(cuisine.clone()));
        }

        if let Some(difficulty) = filter.difficulty {
            condition = condition.add(Column::Difficulty.eq(difficulty.to_string()));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search);
            condition = condition.add(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::Description.contains(search))
                    .add(Expr::cust_with_values(
                        "recipes.tags::text LIKE ?",
                        [pattern],
                    )),
            );
        }

        query = query.filter(condition);

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "name" => query = query.order_by(Column::Name, order),
                    "preparation_time" => query = query.order_by(Column::PreparationTime, order),
                    "serves" => query = query.order_by(Column::Serves, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            // Default sort: newest first
            query = query.order_by_desc(Column::CreatedAt);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let recipes = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get recipes: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(recipes.iter().map(Recipe::from).collect())
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let updated = Entity::update(to_active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to update recipe"))?;

        Ok(Recipe::from(updated))
    }

    async fn delete(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
