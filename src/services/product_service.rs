use uuid::Uuid;

use crate::{
    audit::log_audit,
    display::resolve_display,
    dto::products::{
        CreateProductRequest, MarketplaceItem, MarketplaceList, ProductList, ProductWithDisplay,
    },
    error::{AppError, AppResult},
    generation,
    models::{ArtisanEdits, ArtisanEditsPatch, Product, ProductStatus},
    response::{ApiResponse, Meta},
    routes::params::{MarketplaceQuery, OwnerListQuery},
    state::AppState,
    store::{self, NewProduct, ProductPatch},
};

pub async fn create_product(
    state: &AppState,
    requester_id: Uuid,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let generated = payload.generated;
    let price = generation::initial_price(generated.as_ref().and_then(|g| g.pricing.as_ref()));

    let new = NewProduct {
        artisan_id: requester_id,
        name: payload.name,
        category: payload.category,
        image: payload.image,
        material: payload.material,
        size: payload.size,
        notes: payload.notes,
        title: None,
        description: None,
        keywords: None,
        cultural_story: None,
        price,
        status: ProductStatus::Draft,
        generated_data: generated,
        artisan_edits: Some(ArtisanEdits::default()),
    };

    let product = store::create(&state.orm, new).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(requester_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product created",
        with_display(product),
        Some(Meta::empty()),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let product = store::get_by_id(&state.orm, id).await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "OK",
        with_display(product),
        Some(Meta::empty()),
    ))
}

pub async fn list_my_products(
    state: &AppState,
    requester_id: Uuid,
    query: OwnerListQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, per_page, offset) = query.normalize();
    let (products, total) =
        store::query_by_owner(&state.orm, requester_id, query.status, per_page, offset).await?;

    let items = products.into_iter().map(with_display).collect();
    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success("Ok", ProductList { items }, Some(meta)))
}

pub async fn list_marketplace(
    state: &AppState,
    query: MarketplaceQuery,
) -> AppResult<ApiResponse<MarketplaceList>> {
    let limit = query.normalize_limit();
    let products = store::query_public(&state.orm, query.category.as_deref(), limit).await?;

    let items: Vec<MarketplaceItem> = products.into_iter().map(marketplace_item).collect();
    let meta = Meta::total_only(items.len() as i64);
    Ok(ApiResponse::success(
        "Ok",
        MarketplaceList { items },
        Some(meta),
    ))
}

pub async fn apply_artisan_edits(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
    patch: ArtisanEditsPatch,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    if let Some(price) = patch.custom_price {
        if price < 0 {
            return Err(AppError::Validation(
                "customPrice must not be negative".into(),
            ));
        }
    }

    let product = load_owned(state, id, requester_id).await?;

    let mut edits = product.artisan_edits.clone().unwrap_or_default();
    let price_override = patch.custom_price;
    edits.merge(patch);

    // A new customPrice also becomes the authoritative stored price.
    let store_patch = ProductPatch {
        price: price_override,
        artisan_edits: Some(edits),
        ..Default::default()
    };
    let product = store::update(&state.orm, id, store_patch).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(requester_id),
        "product_edits",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Edits applied",
        with_display(product),
        Some(Meta::empty()),
    ))
}

pub async fn set_status(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
    new_status: ProductStatus,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let existing = load_owned(state, id, requester_id).await?;

    // Any status may move to any other; publish, unpublish, archive and
    // restore are all spellings of this one call.
    let patch = ProductPatch {
        status: Some(new_status),
        ..Default::default()
    };
    let product = store::update(&state.orm, id, patch).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(requester_id),
        "product_status",
        Some("products"),
        Some(serde_json::json!({
            "product_id": product.id,
            "from": existing.status.as_str(),
            "to": new_status.as_str(),
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Status updated",
        with_display(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    load_owned(state, id, requester_id).await?;
    store::delete(&state.orm, id).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(requester_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Fetch a product and check the requester owns it. `NotFound` is checked
/// before ownership, so a missing id never reads as a permission problem.
pub(crate) async fn load_owned(
    state: &AppState,
    id: Uuid,
    requester_id: Uuid,
) -> AppResult<Product> {
    let product = store::get_by_id(&state.orm, id).await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    if product.artisan_id != requester_id {
        return Err(AppError::Unauthorized);
    }
    Ok(product)
}

pub(crate) fn with_display(product: Product) -> ProductWithDisplay {
    let display = resolve_display(&product);
    ProductWithDisplay { product, display }
}

fn marketplace_item(product: Product) -> MarketplaceItem {
    let display = resolve_display(&product);
    MarketplaceItem {
        id: product.id,
        artisan_id: product.artisan_id,
        category: product.category,
        image: product.image,
        material: product.material,
        size: product.size,
        display,
    }
}
