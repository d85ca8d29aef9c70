//! Document-store adapter for Product records: keyed CRUD plus the two
//! filtered multi-gets (owner dashboard and public marketplace), both ordered
//! newest-updated first. Updates are last-write-wins; every write bumps
//! `updated_at`.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductRow},
    error::{AppError, AppResult},
    models::{ArtisanEdits, GeneratedData, Product, ProductStatus},
};

/// Everything needed to assemble a fresh record. The store assigns the id
/// and both timestamps.
#[derive(Debug, Clone)]
pub struct NewProduct {
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
    pub status: ProductStatus,
    pub generated_data: Option<GeneratedData>,
    pub artisan_edits: Option<ArtisanEdits>,
}

/// Partial update over the mutable fields; present fields replace stored
/// ones, `updated_at` is always bumped.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<i64>,
    pub status: Option<ProductStatus>,
    pub generated_data: Option<GeneratedData>,
    pub artisan_edits: Option<ArtisanEdits>,
}

pub async fn create(conn: &OrmConn, new: NewProduct) -> AppResult<Product> {
    if new.artisan_id.is_nil() {
        return Err(AppError::Validation("artisan_id is required".into()));
    }
    if new.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if new.category.trim().is_empty() {
        return Err(AppError::Validation("category is required".into()));
    }

    let now = Utc::now();
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        artisan_id: Set(new.artisan_id),
        name: Set(new.name),
        category: Set(new.category),
        image: Set(new.image),
        material: Set(new.material),
        size: Set(new.size),
        notes: Set(new.notes),
        title: Set(new.title),
        description: Set(new.description),
        keywords: Set(new.keywords),
        cultural_story: Set(new.cultural_story),
        price: Set(new.price),
        status: Set(new.status.as_str().to_string()),
        generated_data: Set(new.generated_data.as_ref().map(to_json).transpose()?),
        artisan_edits: Set(new.artisan_edits.as_ref().map(to_json).transpose()?),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    let row = active.insert(conn).await?;
    product_from_row(row)
}

pub async fn get_by_id(conn: &OrmConn, id: Uuid) -> AppResult<Option<Product>> {
    let row = Products::find_by_id(id).one(conn).await?;
    row.map(product_from_row).transpose()
}

/// Owner dashboard query: all of one artisan's products, optionally filtered
/// by status, newest-updated first. Returns the page plus the total count.
pub async fn query_by_owner(
    conn: &OrmConn,
    artisan_id: Uuid,
    status: Option<ProductStatus>,
    limit: i64,
    offset: i64,
) -> AppResult<(Vec<Product>, i64)> {
    let mut condition = Condition::all().add(Column::ArtisanId.eq(artisan_id));
    if let Some(status) = status {
        condition = condition.add(Column::Status.eq(status.as_str()));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_desc(Column::UpdatedAt);

    let total = finder.clone().count(conn).await? as i64;

    let rows = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(conn)
        .await?;

    let products = rows
        .into_iter()
        .map(product_from_row)
        .collect::<AppResult<Vec<_>>>()?;
    Ok((products, total))
}

/// Public marketplace query: active products only, optional exact category
/// filter, newest-updated first, truncated to `limit`.
pub async fn query_public(
    conn: &OrmConn,
    category: Option<&str>,
    limit: i64,
) -> AppResult<Vec<Product>> {
    let mut condition = Condition::all().add(Column::Status.eq(ProductStatus::Active.as_str()));
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        condition = condition.add(Column::Category.eq(category));
    }

    let rows = Products::find()
        .filter(condition)
        .order_by_desc(Column::UpdatedAt)
        .limit(limit as u64)
        .all(conn)
        .await?;

    rows.into_iter().map(product_from_row).collect()
}

pub async fn update(conn: &OrmConn, id: Uuid, patch: ProductPatch) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(conn).await?;
    let existing = match existing {
        Some(row) => row,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(price) = patch.price {
        active.price = Set(price);
    }
    if let Some(status) = patch.status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(generated) = patch.generated_data {
        active.generated_data = Set(Some(to_json(&generated)?));
    }
    if let Some(edits) = patch.artisan_edits {
        active.artisan_edits = Set(Some(to_json(&edits)?));
    }
    active.updated_at = Set(Utc::now().into());

    let row = active.update(conn).await?;
    product_from_row(row)
}

pub async fn delete(conn: &OrmConn, id: Uuid) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<sea_orm::entity::prelude::Json> {
    serde_json::to_value(value).map_err(|err| AppError::Internal(err.into()))
}

fn product_from_row(row: ProductRow) -> AppResult<Product> {
    let status = ProductStatus::from_str(&row.status).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("unknown product status {:?}", row.status))
    })?;
    let generated_data = row
        .generated_data
        .map(serde_json::from_value::<GeneratedData>)
        .transpose()
        .map_err(|err| AppError::Internal(err.into()))?;
    let artisan_edits = row
        .artisan_edits
        .map(serde_json::from_value::<ArtisanEdits>)
        .transpose()
        .map_err(|err| AppError::Internal(err.into()))?;

    Ok(Product {
        id: row.id,
        artisan_id: row.artisan_id,
        name: row.name,
        category: row.category,
        image: row.image,
        material: row.material,
        size: row.size,
        notes: row.notes,
        title: row.title,
        description: row.description,
        keywords: row.keywords,
        cultural_story: row.cultural_story,
        price: row.price,
        status,
        generated_data,
        artisan_edits,
        created_at: row.created_at.with_timezone(&Utc),
        updated_at: row.updated_at.with_timezone(&Utc),
    })
}
