use sea_orm::entity::prelude::*;

/// Recipes are stored as a single row; the ordered sub-documents
/// (ingredients, steps, substitutes, tags) live in JSON columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub ingredients: Json,
    pub steps: Json,
    pub serves: i32,
    pub preparation_time: i32,
    pub difficulty: String,
    pub possible_substitutes: Json,
    pub image_url: Option<String>,
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
