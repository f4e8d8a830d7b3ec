use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::units::MeasurementUnit, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ItemCategory {
    Grains,
    Spices,
    Dairy,
    Vegetables,
    Fruits,
    Lentils,
    Oils,
    Other,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Grains => "Grains",
            ItemCategory::Spices => "Spices",
            ItemCategory::Dairy => "Dairy",
            ItemCategory::Vegetables => "Vegetables",
            ItemCategory::Fruits => "Fruits",
            ItemCategory::Lentils => "Lentils",
            ItemCategory::Oils => "Oils",
            ItemCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grains" => Ok(ItemCategory::Grains),
            "Spices" => Ok(ItemCategory::Spices),
            "Dairy" => Ok(ItemCategory::Dairy),
            "Vegetables" => Ok(ItemCategory::Vegetables),
            "Fruits" => Ok(ItemCategory::Fruits),
            "Lentils" => Ok(ItemCategory::Lentils),
            "Oils" => Ok(ItemCategory::Oils),
            "Other" => Ok(ItemCategory::Other),
            other => Err(format!("unknown item category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub current_quantity: f64,
    pub unit: MeasurementUnit,
    pub threshold: f64,
    pub perishable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InventoryItemConfig {
    pub name: String,
    pub category: ItemCategory,
    pub current_quantity: f64,
    pub unit: MeasurementUnit,
    pub threshold: f64,
    pub perishable: bool,
}

impl InventoryItem {
    pub fn new(config: InventoryItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            category: config.category,
            current_quantity: config.current_quantity,
            unit: config.unit,
            threshold: config.threshold,
            perishable: config.perishable,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        category: Option<ItemCategory>,
        current_quantity: Option<f64>,
        unit: Option<MeasurementUnit>,
        threshold: Option<f64>,
        perishable: Option<bool>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(c) = category {
            self.category = c;
        }
        if let Some(q) = current_quantity {
            self.current_quantity = q;
        }
        if let Some(u) = unit {
            self.unit = u;
        }
        if let Some(t) = threshold {
            self.threshold = t;
        }
        if let Some(p) = perishable {
            self.perishable = p;
        }
        self.updated_at = now;
    }
}
