use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub artisan_id: Uuid,
    pub name: String,
    pub category: String,
    pub image: String,
    pub material: Option<String>,
    pub size: Option<String>,
    pub notes: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub cultural_story: Option<String>,
    pub price: i64,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub generated_data: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub artisan_edits: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
