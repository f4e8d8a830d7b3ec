//! Seed the database with sample Indian pantry items and recipes.

use anyhow::bail;
use clap::Parser;
use sea_orm::{EntityTrait, PaginatorTrait};

use rasoi_core::domain::common::entities::units::MeasurementUnit;
use rasoi_core::domain::inventory::entities::{InventoryItem, InventoryItemConfig, ItemCategory};
use rasoi_core::domain::inventory::ports::InventoryRepository;
use rasoi_core::domain::recipe::entities::{
    Difficulty, IngredientRequirement, Recipe, RecipeCategory, RecipeConfig, SubstituteOption,
    SubstitutionRule,
};
use rasoi_core::domain::recipe::ports::RecipeRepository;
use rasoi_core::entity::{inventory_items, recipes};
use rasoi_core::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    inventory::PostgresInventoryRepository,
    recipe::PostgresRecipeRepository,
};

#[derive(Debug, Parser)]
#[command(name = "seed-demo-data", about = "Load demo inventory and recipes")]
struct Args {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    db_host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    db_port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    db_user: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    db_password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "rasoi")]
    db_name: String,

    /// Delete existing inventory and recipes before seeding
    #[arg(long)]
    force: bool,
}

fn item(
    name: &str,
    category: ItemCategory,
    quantity: f64,
    unit: MeasurementUnit,
    threshold: f64,
) -> InventoryItem {
    InventoryItem::new(InventoryItemConfig {
        name: name.to_string(),
        category,
        current_quantity: quantity,
        unit,
        threshold,
        perishable: false,
    })
}

fn requires(name: &str, quantity: f64, unit: MeasurementUnit) -> IngredientRequirement {
    IngredientRequirement {
        ingredient_name: name.to_string(),
        quantity,
        unit,
    }
}

fn sample_inventory() -> Vec<InventoryItem> {
    use ItemCategory::*;
    use MeasurementUnit::*;

    vec![
        item("Basmati Rice", Grains, 2000.0, G, 500.0),
        item("Rice Flour", Grains, 1000.0, G, 300.0),
        item("Wheat Flour (Atta)", Grains, 5000.0, G, 1000.0),
        item("Urad Dal", Lentils, 800.0, G, 200.0),
        item("Toor Dal", Lentils, 800.0, G, 200.0),
        item("Turmeric Powder", Spices, 100.0, G, 20.0),
        item("Cumin Seeds", Spices, 50.0, G, 10.0),
        item("Mustard Seeds", Spices, 30.0, G, 5.0),
        item("Fenugreek Seeds", Spices, 20.0, G, 5.0),
        item("Onion", Vegetables, 10.0, Pieces, 3.0),
        item("Tomato", Vegetables, 8.0, Pieces, 2.0),
        item("Potato", Vegetables, 6.0, Pieces, 2.0),
        item("Green Chili", Vegetables, 15.0, Pieces, 5.0),
        item("Ginger", Vegetables, 200.0, G, 50.0),
        item("Paneer", Dairy, 400.0, G, 100.0),
        item("Milk", Dairy, 1000.0, Ml, 200.0),
        item("Vegetable Oil", Oils, 500.0, Ml, 100.0),
        item("Salt", Other, 200.0, G, 30.0),
        item("Sugar", Other, 300.0, G, 50.0),
    ]
}

fn sample_recipes() -> Vec<Recipe> {
    use MeasurementUnit::*;

    vec![
        Recipe::new(RecipeConfig {
            name: "Masala Dosa".to_string(),
            description: "Crispy fermented crepe filled with spiced potato filling".to_string(),
            category: RecipeCategory::Breakfast,
            cuisine: "South Indian".to_string(),
            ingredients: vec![
                requires("Rice Flour", 200.0, G),
                requires("Urad Dal", 50.0, G),
                requires("Fenugreek Seeds", 0.5, Tsp),
                requires("Potato", 4.0, Pieces),
                requires("Onion", 2.0, Pieces),
                requires("Mustard Seeds", 1.0, Tsp),
                requires("Turmeric Powder", 0.5, Tsp),
                requires("Green Chili", 2.0, Pieces),
                requires("Ginger", 10.0, G),
                requires("Salt", 1.0, Tsp),
                requires("Vegetable Oil", 3.0, Tbsp),
            ],
            steps: vec![
                "Soak rice and urad dal separately for 6 hours".to_string(),
                "Grind to make smooth batter, add salt and ferment overnight".to_string(),
                "Boil and mash potatoes for filling".to_string(),
                "Heat oil, add mustard seeds and green chilies".to_string(),
                "Add onions and saute until golden, add turmeric".to_string(),
                "Add mashed potatoes and mix well, keep filling aside".to_string(),
                "Heat dosa tawa, pour batter and spread thinly".to_string(),
                "Cook until crispy, add potato filling and fold".to_string(),
            ],
            serves: 4,
            preparation_time: 120,
            difficulty: Difficulty::Medium,
            possible_substitutes: vec![SubstitutionRule {
                original: "Urad Dal".to_string(),
                substitutes: vec![SubstituteOption {
                    name: "Chana Dal".to_string(),
                    ratio: 1.0,
                    notes: Some("Slightly different texture".to_string()),
                }],
            }],
            image_url: None,
            tags: vec![
                "breakfast".to_string(),
                "fermented".to_string(),
                "south indian".to_string(),
            ],
        }),
        Recipe::new(RecipeConfig {
            name: "Kadai Paneer".to_string(),
            description: "Paneer cubes in spicy gravy with capsicum".to_string(),
            category: RecipeCategory::MainCourse,
            cuisine: "North Indian".to_string(),
            ingredients: vec![
                requires("Paneer", 400.0, G),
                requires("Onion", 2.0, Pieces),
                requires("Tomato", 4.0, Pieces),
                requires("Ginger", 10.0, G),
                requires("Cumin Seeds", 1.0, Tsp),
                requires("Salt", 1.0, Tsp),
                requires("Vegetable Oil", 2.0, Tbsp),
            ],
            steps: vec![
                "Saute onions and ginger until golden".to_string(),
                "Add tomatoes and cook until soft".to_string(),
                "Add spices and cook until oil separates".to_string(),
                "Add paneer cubes and simmer for 5 minutes".to_string(),
                "Garnish and serve hot".to_string(),
            ],
            serves: 4,
            preparation_time: 45,
            difficulty: Difficulty::Medium,
            possible_substitutes: Vec::new(),
            image_url: None,
            tags: vec!["restaurant style".to_string(), "punjabi".to_string()],
        }),
        Recipe::new(RecipeConfig {
            name: "Masala Chai".to_string(),
            description: "Traditional Indian spiced tea".to_string(),
            category: RecipeCategory::Beverage,
            cuisine: "Indian".to_string(),
            ingredients: vec![
                requires("Milk", 1.0, Cup),
                requires("Tea Leaves", 2.0, Tsp),
                requires("Sugar", 2.0, Tsp),
                requires("Ginger", 5.0, G),
            ],
            steps: vec![
                "Boil water with crushed ginger".to_string(),
                "Add tea leaves and boil for 1 minute".to_string(),
                "Add milk and sugar, bring to boil".to_string(),
                "Simmer for 2 minutes, strain and serve hot".to_string(),
            ],
            serves: 2,
            preparation_time: 15,
            difficulty: Difficulty::Easy,
            possible_substitutes: Vec::new(),
            image_url: None,
            tags: vec!["beverage".to_string(), "breakfast".to_string()],
        }),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let args = Args::parse();

    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        args.db_user, args.db_password, args.db_host, args.db_port, args.db_name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let inventory_count = inventory_items::Entity::find().count(&db).await?;
    let recipe_count = recipes::Entity::find().count(&db).await?;

    if (inventory_count > 0 || recipe_count > 0) && !args.force {
        bail!(
            "database already contains data ({} items, {} recipes); re-run with --force to replace it",
            inventory_count,
            recipe_count
        );
    }

    inventory_items::Entity::delete_many().exec(&db).await?;
    recipes::Entity::delete_many().exec(&db).await?;

    let inventory_repository = PostgresInventoryRepository::new(db.clone());
    let recipe_repository = PostgresRecipeRepository::new(db);

    let inventory = sample_inventory();
    for item in &inventory {
        inventory_repository.create(item.clone()).await?;
    }
    tracing::info!("seeded {} inventory items", inventory.len());

    let sample = sample_recipes();
    for recipe in &sample {
        recipe_repository.create(recipe.clone()).await?;
    }
    tracing::info!("seeded {} recipes", sample.len());

    Ok(())
}
