use uuid::Uuid;

use crate::{
    audit::log_audit,
    display::resolve_display,
    dto::generate::{PricingGenerateRequest, StoryGenerateRequest},
    dto::products::ProductWithDisplay,
    error::AppResult,
    generation::{CatalogInput, MarketingInput, PricingInput, StoryInput},
    models::{GeneratedPart, Product},
    response::{ApiResponse, Meta},
    services::product_service::{load_owned, with_display},
    state::AppState,
    store::{self, ProductPatch},
};

pub async fn regenerate_catalog(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let product = load_owned(state, id, requester_id).await?;

    let input = CatalogInput {
        name: product.name.clone(),
        category: product.category.clone(),
        notes: product.notes.clone(),
        image: product.image.clone(),
    };
    let catalog = state.generation.catalog(&input).await?;

    store_part(state, product, requester_id, GeneratedPart::Catalog(catalog)).await
}

pub async fn regenerate_story(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
    payload: StoryGenerateRequest,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let product = load_owned(state, id, requester_id).await?;

    let input = StoryInput {
        name: product.name.clone(),
        category: product.category.clone(),
        artisan_name: payload.artisan_name,
        region: payload.region,
        notes: payload.notes.or_else(|| product.notes.clone()),
    };
    let story = state.generation.story(&input).await?;

    store_part(state, product, requester_id, GeneratedPart::Story(story)).await
}

pub async fn regenerate_pricing(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
    payload: PricingGenerateRequest,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let product = load_owned(state, id, requester_id).await?;

    let input = PricingInput {
        category: product.category.clone(),
        material: product.material.clone(),
        size: product.size.clone(),
        effort_hours: payload.effort_hours,
    };
    let pricing = state.generation.pricing(&input).await?;

    // The stored price stays as-is; only the suggestion text is refreshed.
    store_part(state, product, requester_id, GeneratedPart::Pricing(pricing)).await
}

pub async fn regenerate_marketing(
    state: &AppState,
    requester_id: Uuid,
    id: Uuid,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let product = load_owned(state, id, requester_id).await?;

    // Marketing copy is written against what buyers actually see, so the
    // description comes from the resolved display, not the raw record.
    let display = resolve_display(&product);
    let input = MarketingInput {
        name: product.name.clone(),
        description: display.description,
    };
    let marketing = state.generation.marketing(&input).await?;

    store_part(
        state,
        product,
        requester_id,
        GeneratedPart::Marketing(marketing),
    )
    .await
}

/// Merge one regenerated sub-result into `generated_data` and persist.
/// Other sub-keys survive untouched; a failed generation call never gets
/// this far, so nothing previously saved is lost.
async fn store_part(
    state: &AppState,
    product: Product,
    requester_id: Uuid,
    part: GeneratedPart,
) -> AppResult<ApiResponse<ProductWithDisplay>> {
    let kind = part.kind();

    let mut generated = product.generated_data.clone().unwrap_or_default();
    generated.apply(part);

    let patch = ProductPatch {
        generated_data: Some(generated),
        ..Default::default()
    };
    let updated = store::update(&state.orm, product.id, patch).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(requester_id),
        &format!("generate_{kind}"),
        Some("products"),
        Some(serde_json::json!({ "product_id": updated.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Generation stored",
        with_display(updated),
        Some(Meta::empty()),
    ))
}
