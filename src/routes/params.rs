use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::ProductStatus;

/// Owner dashboard listing: paged, optionally narrowed to one status.
/// Pagination fields live inline; serde_urlencoded cannot parse numbers
/// through `#[serde(flatten)]`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OwnerListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<ProductStatus>,
}

impl OwnerListQuery {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

/// Public marketplace listing: optional exact category match, capped count.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MarketplaceQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

impl MarketplaceQuery {
    pub fn normalize_limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 200)
    }
}
