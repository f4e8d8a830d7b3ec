use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::units::MeasurementUnit, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RecipeCategory {
    #[serde(rename = "Main Course")]
    MainCourse,
    Appetizer,
    Dessert,
    Bread,
    Rice,
    Curry,
    Snack,
    Breakfast,
    Beverage,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::MainCourse => "Main Course",
            RecipeCategory::Appetizer => "Appetizer",
            RecipeCategory::Dessert => "Dessert",
            RecipeCategory::Bread => "Bread",
            RecipeCategory::Rice => "Rice",
            RecipeCategory::Curry => "Curry",
            RecipeCategory::Snack => "Snack",
            RecipeCategory::Breakfast => "Breakfast",
            RecipeCategory::Beverage => "Beverage",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Main Course" => Ok(RecipeCategory::MainCourse),
            "Appetizer" => Ok(RecipeCategory::Appetizer),
            "Dessert" => Ok(RecipeCategory::Dessert),
            "Bread" => Ok(RecipeCategory::Bread),
            "Rice" => Ok(RecipeCategory::Rice),
            "Curry" => Ok(RecipeCategory::Curry),
            "Snack" => Ok(RecipeCategory::Snack),
            "Breakfast" => Ok(RecipeCategory::Breakfast),
            "Beverage" => Ok(RecipeCategory::Beverage),
            other => Err(format!("unknown recipe category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// One required ingredient line of a recipe; quantity is per the recipe's
/// nominal `serves`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRequirement {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: MeasurementUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubstituteOption {
    pub name: String,
    pub ratio: f64,
    pub notes: Option<String>,
}

/// Recipe-defined substitutes for one original ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubstitutionRule {
    pub original: String,
    pub substitutes: Vec<SubstituteOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub cuisine: String,
    pub ingredients: Vec<IngredientRequirement>,
    pub steps: Vec<String>,
    pub serves: u32,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub possible_substitutes: Vec<SubstitutionRule>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub cuisine: String,
    pub ingredients: Vec<IngredientRequirement>,
    pub steps: Vec<String>,
    pub serves: u32,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub possible_substitutes: Vec<SubstitutionRule>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            description: config.description,
            category: config.category,
            cuisine: config.cuisine,
            ingredients: config.ingredients,
            steps: config.steps,
            serves: config.serves,
            preparation_time: config.preparation_time,
            difficulty: config.difficulty,
            possible_substitutes: config.possible_substitutes,
            image_url: config.image_url,
            tags: config.tags,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        category: Option<RecipeCategory>,
        cuisine: Option<String>,
        ingredients: Option<Vec<IngredientRequirement>>,
        steps: Option<Vec<String>>,
        serves: Option<u32>,
        preparation_time: Option<u32>,
        difficulty: Option<Difficulty>,
        possible_substitutes: Option<Vec<SubstitutionRule>>,
        image_url: Option<String>,
        tags: Option<Vec<String>>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(d) = description {
            self.description = d;
        }
        if let Some(c) = category {
            self.category = c;
        }
        if let Some(c) = cuisine {
            self.cuisine = c;
        }
        if let Some(i) = ingredients {
            self.ingredients = i;
        }
        if let Some(s) = steps {
            self.steps = s;
        }
        if let Some(s) = serves {
            self.serves = s;
        }
        if let Some(p) = preparation_time {
            self.preparation_time = p;
        }
        if let Some(d) = difficulty {
            self.difficulty = d;
        }
        if let Some(p) = possible_substitutes {
            self.possible_substitutes = p;
        }
        if let Some(i) = image_url {
            self.image_url = Some(i);
        }
        if let Some(t) = tags {
            self.tags = t;
        }
        self.updated_at = now;
    }
}
