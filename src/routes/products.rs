use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, ProductWithDisplay, SetStatusRequest},
    error::AppResult,
    middleware::auth::AuthArtisan,
    models::ArtisanEditsPatch,
    response::ApiResponse,
    routes::params::OwnerListQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/mine", get(list_my_products))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/{id}/edits", patch(apply_edits))
        .route("/{id}/status", patch(set_status))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created as draft", body = ApiResponse<ProductWithDisplay>),
        (status = 400, description = "Missing name or category"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response = product_service::create_product(&state, artisan.artisan_id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/products/mine",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter: draft | active | archived"),
    ),
    responses(
        (status = 200, description = "The requester's products, newest first", body = ApiResponse<ProductList>),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn list_my_products(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Query(query): Query<OwnerListQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let response = product_service::list_my_products(&state, artisan.artisan_id, query).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with resolved display", body = ApiResponse<ProductWithDisplay>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response = product_service::get_product(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}/edits",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ArtisanEditsPatch,
    responses(
        (status = 200, description = "Edits merged", body = ApiResponse<ProductWithDisplay>),
        (status = 400, description = "Negative customPrice"),
        (status = 403, description = "Requester does not own this product"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn apply_edits(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArtisanEditsPatch>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response =
        product_service::apply_artisan_edits(&state, artisan.artisan_id, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ProductWithDisplay>),
        (status = 403, description = "Requester does not own this product"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn set_status(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<ApiResponse<ProductWithDisplay>>> {
    let response =
        product_service::set_status(&state, artisan.artisan_id, id, payload.status).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Requester does not own this product"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    artisan: AuthArtisan,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let response = product_service::delete_product(&state, artisan.artisan_id, id).await?;
    Ok(Json(response))
}
