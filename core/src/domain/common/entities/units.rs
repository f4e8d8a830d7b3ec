use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Measurement units accepted on inventory items and recipe ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    G,
    Kg,
    Pieces,
    Ml,
    L,
    Tsp,
    Tbsp,
    Cup,
    Pinch,
}

impl MeasurementUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::G => "g",
            MeasurementUnit::Kg => "kg",
            MeasurementUnit::Pieces => "pieces",
            MeasurementUnit::Ml => "ml",
            MeasurementUnit::L => "l",
            MeasurementUnit::Tsp => "tsp",
            MeasurementUnit::Tbsp => "tbsp",
            MeasurementUnit::Cup => "cup",
            MeasurementUnit::Pinch => "pinch",
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(MeasurementUnit::G),
            "kg" => Ok(MeasurementUnit::Kg),
            "pieces" => Ok(MeasurementUnit::Pieces),
            "ml" => Ok(MeasurementUnit::Ml),
            "l" => Ok(MeasurementUnit::L),
            "tsp" => Ok(MeasurementUnit::Tsp),
            "tbsp" => Ok(MeasurementUnit::Tbsp),
            "cup" => Ok(MeasurementUnit::Cup),
            "pinch" => Ok(MeasurementUnit::Pinch),
            other => Err(format!("unknown measurement unit: {}", other)),
        }
    }
}
