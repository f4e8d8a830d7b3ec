use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rasoi_core::domain::common::entities::units::MeasurementUnit;
use rasoi_core::domain::inventory::entities::ItemCategory;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub category: ItemCategory,

    #[validate(range(min = 0.0, message = "current_quantity must be non-negative"))]
    pub current_quantity: f64,

    pub unit: MeasurementUnit,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "threshold must be non-negative"))]
    pub threshold: f64,

    #[serde(default)]
    pub perishable: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItemValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<ItemCategory>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "current_quantity must be non-negative"))]
    pub current_quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<MeasurementUnit>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "threshold must be non-negative"))]
    pub threshold: Option<f64>,

    #[serde(default)]
    pub perishable: Option<bool>,
}
