use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use uuid::Uuid;

use crate::{
    dto::generate::{PricingGenerateRequest, StoryGenerateRequest},
    dto::products::ProductWithDisplay,
    error::AppResult,
    middleware::auth::AuthArtisan,
    response::ApiResponse,
    services::generation_service,
    state::AppState,
};

// Nested under /products alongside the CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/generate/catalog", post(generate_catalog))
        .route("/{id}/generate/story", post(generate_story))
        .route("/{id}/generate/pricing", post(generate_pricing))
        .route("/{id}/generate/marketing", post(generate_marketing))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/generate/catalog",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Catalog content regenerated", body = ApiResponse<ProductWithDisplay>),
        (status = 403, description = "Requester does not own this product"),
        (status = 502, description = "Generation service failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Generation"
)]
pub async fn generate_catalog(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response = generation_service::regenerate_catalog(&state, artisan.artisan_id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/generate/story",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = StoryGenerateRequest,
    responses(
        (status = 200, description = "Cultural story regenerated", body = ApiResponse<ProductWithDisplay>),
        (status = 403, description = "Requester does not own this product"),
        (status = 502, description = "Generation service failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Generation"
)]
pub async fn generate_story(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
    Json(payload): Json<StoryGenerateRequest>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response =
        generation_service::regenerate_story(&state, artisan.artisan_id, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/generate/pricing",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = PricingGenerateRequest,
    responses(
        (status = 200, description = "Pricing suggestion regenerated; stored price is untouched", body = ApiResponse<ProductWithDisplay>),
        (status = 403, description = "Requester does not own this product"),
        (status = 502, description = "Generation service failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Generation"
)]
pub async fn generate_pricing(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
    Json(payload): Json<PricingGenerateRequest>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response =
        generation_service::regenerate_pricing(&state, artisan.artisan_id, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/generate/marketing",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Marketing copy regenerated", body = ApiResponse<ProductWithDisplay>),
        (status = 403, description = "Requester does not own this product"),
        (status = 502, description = "Generation service failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Generation"
)]
pub async fn generate_marketing(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response = generation_service::regenerate_marketing(&state, artisan.artisan_id, id).await?;
    Ok(Json(response))
}
