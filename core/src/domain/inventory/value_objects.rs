use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::units::MeasurementUnit;
use crate::domain::inventory::entities::ItemCategory;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInventoryItemInput {
    pub name: String,
    pub category: ItemCategory,
    pub current_quantity: f64,
    pub unit: MeasurementUnit,
    pub threshold: f64,
    pub perishable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateInventoryItemInput {
    pub name: Option<String>,
    pub category: Option<ItemCategory>,
    pub current_quantity: Option<f64>,
    pub unit: Option<MeasurementUnit>,
    pub threshold: Option<f64>,
    pub perishable: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct GetInventoryFilter {
    pub category: Option<ItemCategory>,
    pub perishable: Option<bool>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>, // e.g., "-created_at" or "name"
}
