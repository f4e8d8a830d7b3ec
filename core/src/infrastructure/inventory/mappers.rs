use crate::{
    domain::{
        common::entities::units::MeasurementUnit,
        inventory::entities::{InventoryItem, ItemCategory},
    },
    entity::inventory_items,
};

impl From<&inventory_items::Model> for InventoryItem {
    fn from(model: &inventory_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.parse().unwrap_or(ItemCategory::Other),
            current_quantity: model.current_quantity,
            unit: model.unit.parse().unwrap_or(MeasurementUnit::Pieces),
            threshold: model.threshold,
            perishable: model.perishable,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<inventory_items::Model> for InventoryItem {
    fn from(model: inventory_items::Model) -> Self {
        Self::from(&model)
    }
}
