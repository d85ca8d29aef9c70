use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::display::ResolvedDisplay;
use crate::models::{GeneratedData, Product, ProductStatus};

/// Create payload: the artisan-authored base attributes, plus any subset of
/// pre-generated sub-results the client already holds.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub image: String,
    pub material: Option<String>,
    pub size: Option<String>,
    pub notes: Option<String>,
    pub generated: Option<GeneratedData>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: ProductStatus,
}

/// A product next to its resolved display record, the shape the detail page
/// and the owner dashboard consume.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductWithDisplay {
    pub product: Product,
    pub display: ResolvedDisplay,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductWithDisplay>)]
    pub items: Vec<ProductWithDisplay>,
}

/// Public marketplace projection: the base facts a storefront card needs
/// plus the resolved display. Artisan notes and raw overrides stay private.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarketplaceItem {
    pub id: Uuid,
    pub artisan_id: Uuid,
    pub category: String,
    pub image: String,
    pub material: Option<String>,
    pub size: Option<String>,
    pub display: ResolvedDisplay,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct MarketplaceList {
    #[schema(value_type = Vec<MarketplaceItem>)]
    pub items: Vec<MarketplaceItem>,
}
