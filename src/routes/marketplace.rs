use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::products::MarketplaceList,
    error::AppResult,
    response::ApiResponse,
    routes::params::MarketplaceQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_marketplace))
}

#[utoipa::path(
    get,
    path = "/api/marketplace",
    params(
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("limit" = Option<i64>, Query, description = "Max results, default 50"),
    ),
    responses(
        (status = 200, description = "Active products, newest first", body = ApiResponse<MarketplaceList>),
    ),
    tag = "Marketplace"
)]
pub async fn list_marketplace(
    State(state): State<AppState>,
    Query(query): Query<MarketplaceQuery>,
) -> AppResult<Json<ApiResponse<MarketplaceList>>> {
    let response = product_service::list_marketplace(&state, query).await?;
    Ok(Json(response))
}
