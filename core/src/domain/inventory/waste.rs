use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::units::MeasurementUnit;
use crate::domain::inventory::entities::{InventoryItem, ItemCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WasteRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WasteFlag {
    pub id: Uuid,
    pub name: String,
    pub category: ItemCategory,
    pub current_quantity: f64,
    pub unit: MeasurementUnit,
    pub threshold: f64,
    pub perishable: bool,
    pub waste_risk: WasteRisk,
    pub reasons: Vec<String>,
    pub usage_percentage: i64,
}

/// Categories treated as perishable regardless of the item's explicit flag.
pub const PERISHABLE_CATEGORIES: [ItemCategory; 3] = [
    ItemCategory::Dairy,
    ItemCategory::Vegetables,
    ItemCategory::Fruits,
];

pub const NON_PERISHABLE_CATEGORIES: [ItemCategory; 4] = [
    ItemCategory::Grains,
    ItemCategory::Spices,
    ItemCategory::Lentils,
    ItemCategory::Oils,
];

/// Flag over/under-stocked items against their threshold. Items without a
/// threshold carry no usage ratio and are never flagged.
pub fn estimate_waste_risk(inventory: &[InventoryItem]) -> Vec<WasteFlag> {
    inventory.iter().filter_map(flag_item).collect()
}

fn flag_item(item: &InventoryItem) -> Option<WasteFlag> {
    if item.threshold == 0.0 {
        return None;
    }

    let usage_ratio = item.current_quantity / item.threshold;
    let is_perishable = PERISHABLE_CATEGORIES.contains(&item.category) || item.perishable;

    let mut waste_risk = WasteRisk::Medium;
    let mut reasons = Vec::new();

    if is_perishable {
        if usage_ratio < 0.3 {
            waste_risk = WasteRisk::High;
            reasons.push("Low usage - might spoil before use".to_string());
        }
        if usage_ratio > 2.0 {
            waste_risk = WasteRisk::High;
            reasons.push("Excess quantity - might not get used before spoiling".to_string());
        }
    } else if NON_PERISHABLE_CATEGORIES.contains(&item.category) {
        // Evaluation order is load-bearing: the excess rule's risk level wins
        // when both fire.
        if usage_ratio < 0.1 {
            waste_risk = WasteRisk::Low;
            reasons.push("Very low usage - consider if you need this item".to_string());
        }
        if usage_ratio > 5.0 {
            waste_risk = WasteRisk::Medium;
            reasons.push("Large quantity - might expire before use".to_string());
        }
    }

    if reasons.is_empty() {
        return None;
    }

    Some(WasteFlag {
        id: item.id,
        name: item.name.clone(),
        category: item.category,
        current_quantity: item.current_quantity,
        unit: item.unit,
        threshold: item.threshold,
        perishable: is_perishable,
        waste_risk,
        reasons,
        usage_percentage: (usage_ratio * 100.0).round() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::entities::InventoryItemConfig;

    fn item(
        name: &str,
        category: ItemCategory,
        current_quantity: f64,
        threshold: f64,
        perishable: bool,
    ) -> InventoryItem {
        InventoryItem::new(InventoryItemConfig {
            name: name.to_string(),
            category,
            current_quantity,
            unit: MeasurementUnit::G,
            threshold,
            perishable,
        })
    }

    #[test]
    fn skips_items_without_threshold() {
        let inventory = vec![item("Salt", ItemCategory::Other, 0.0, 0.0, false)];
        assert!(estimate_waste_risk(&inventory).is_empty());
    }

    #[test]
    fn non_perishable_boundary_is_exclusive() {
        // usage ratio exactly 0.1 must not be flagged
        let inventory = vec![item("Rice", ItemCategory::Grains, 50.0, 500.0, false)];
        assert!(estimate_waste_risk(&inventory).is_empty());
    }

    #[test]
    fn non_perishable_low_usage_flags_low_risk() {
        let inventory = vec![item("Rice", ItemCategory::Grains, 49.0, 500.0, false)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].waste_risk, WasteRisk::Low);
        assert_eq!(
            flags[0].reasons,
            vec!["Very low usage - consider if you need this item".to_string()]
        );
        assert!(!flags[0].perishable);
    }

    #[test]
    fn non_perishable_excess_flags_medium_risk() {
        let inventory = vec![item("Toor Dal", ItemCategory::Lentils, 2600.0, 500.0, false)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].waste_risk, WasteRisk::Medium);
        assert_eq!(flags[0].usage_percentage, 520);
    }

    #[test]
    fn perishable_low_usage_flags_high_risk() {
        let inventory = vec![item("Milk", ItemCategory::Dairy, 50.0, 200.0, false)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].waste_risk, WasteRisk::High);
        assert_eq!(
            flags[0].reasons,
            vec!["Low usage - might spoil before use".to_string()]
        );
    }

    #[test]
    fn perishable_excess_flags_high_risk() {
        let inventory = vec![item("Tomato", ItemCategory::Vegetables, 500.0, 100.0, false)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].waste_risk, WasteRisk::High);
        assert_eq!(
            flags[0].reasons,
            vec!["Excess quantity - might not get used before spoiling".to_string()]
        );
    }

    #[test]
    fn explicit_flag_makes_other_category_perishable() {
        let inventory = vec![item("Fresh Paste", ItemCategory::Other, 20.0, 100.0, true)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].waste_risk, WasteRisk::High);
        assert!(flags[0].perishable);
    }

    #[test]
    fn unflagged_other_category_is_never_flagged() {
        let inventory = vec![item("Baking Soda", ItemCategory::Other, 1.0, 100.0, false)];
        assert!(estimate_waste_risk(&inventory).is_empty());
    }

    #[test]
    fn usage_percentage_is_rounded() {
        // 1/7 of the threshold -> 14.28%, rounds to 14
        let inventory = vec![item("Ghee", ItemCategory::Dairy, 1.0, 7.0, false)];
        let flags = estimate_waste_risk(&inventory);
        assert_eq!(flags[0].usage_percentage, 14);
    }
}
