use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::InventoryItem,
        value_objects::{CreateInventoryItemInput, GetInventoryFilter, UpdateInventoryItemInput},
        waste::WasteFlag,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    fn create(
        &self,
        item: InventoryItem,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;

    fn get_all(
        &self,
        filter: GetInventoryFilter,
    ) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;

    fn update(
        &self,
        item: InventoryItem,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn delete(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait InventoryService: Send + Sync {
    fn create_item(
        &self,
        input: CreateInventoryItemInput,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn get_item(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;

    fn list_items(
        &self,
        filter: GetInventoryFilter,
    ) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;

    fn update_item(
        &self,
        item_id: Uuid,
        input: UpdateInventoryItemInput,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn waste_prediction(&self) -> impl Future<Output = Result<Vec<WasteFlag>, CoreError>> + Send;
}
