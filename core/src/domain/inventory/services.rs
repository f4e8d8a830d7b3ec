use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::{
        entities::{InventoryItem, InventoryItemConfig},
        ports::{InventoryRepository, InventoryService},
        value_objects::{CreateInventoryItemInput, GetInventoryFilter, UpdateInventoryItemInput},
        waste::{WasteFlag, estimate_waste_risk},
    },
    iot::ports::SensorReadingRepository,
    recipe::ports::RecipeRepository,
    recipe_import::ports::RecipeProvider,
};

impl<I, R, S, H, P> InventoryService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn create_item(&self, input: CreateInventoryItemInput) -> Result<InventoryItem, CoreError> {
        let item = InventoryItem::new(InventoryItemConfig {
            name: input.name,
            category: input.category,
            current_quantity: input.current_quantity,
            unit: input.unit,
            threshold: input.threshold,
            perishable: input.perishable,
        });

        self.inventory_repository.create(item).await
    }

    async fn get_item(&self, item_id: Uuid) -> Result<Option<InventoryItem>, CoreError> {
        self.inventory_repository.get_by_id(item_id).await
    }

    async fn list_items(&self, filter: GetInventoryFilter) -> Result<Vec<InventoryItem>, CoreError> {
        self.inventory_repository.get_all(filter).await
    }

    async fn update_item(
        &self,
        item_id: Uuid,
        input: UpdateInventoryItemInput,
    ) -> Result<InventoryItem, CoreError> {
        let mut item = self
            .inventory_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        item.update(
            input.name,
            input.category,
            input.current_quantity,
            input.unit,
            input.threshold,
            input.perishable,
        );

        self.inventory_repository.update(item).await
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        self.inventory_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.inventory_repository.delete(item_id).await
    }

    async fn waste_prediction(&self) -> Result<Vec<WasteFlag>, CoreError> {
        let inventory = self
            .inventory_repository
            .get_all(GetInventoryFilter::default())
            .await?;

        Ok(estimate_waste_risk(&inventory))
    }
}
