use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{
            entities::InventoryItem, ports::InventoryRepository,
            value_objects::GetInventoryFilter,
        },
    },
    entity::inventory_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(item: &InventoryItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        category: Set(item.category.to_string()),
        current_quantity: Set(item.current_quantity),
        unit: Set(item.unit.to_string()),
        threshold: Set(item.threshold),
        perishable: Set(item.perishable),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let created = Entity::insert(to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(InventoryItem::from(created))
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<InventoryItem>, CoreError> {
        let item = Entity::find()
            .filter(Column::Id.eq(item_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item.map(InventoryItem::from))
    }

    async fn get_all(&self, filter: GetInventoryFilter) -> Result<Vec<InventoryItem>, CoreError> {
        let mut query = Entity::find();

        let mut condition = Condition::all();

        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category.to_string()));
        }

        if let Some(perishable) = filter.perishable {
            condition = condition.add(Column::Perishable.eq(perishable));
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
                    "category" => query = query.order_by(Column::Category, order),
                    "current_quantity" => query = query.order_by(Column::CurrentQuantity, order),
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

        let items = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get inventory items: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(items.iter().map(InventoryItem::from).collect())
    }

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let updated = Entity::update(to_active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(InventoryItem::from(updated))
    }

    async fn delete(&self, item_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
