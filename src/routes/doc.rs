use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    display::ResolvedDisplay,
    dto::{
        generate::{PricingGenerateRequest, StoryGenerateRequest},
        products::{
            CreateProductRequest, MarketplaceItem, MarketplaceList, ProductList,
            ProductWithDisplay, SetStatusRequest,
        },
    },
    models::{
        ArtisanEdits, ArtisanEditsPatch, CatalogContent, DisplayPreferences,
        DisplayPreferencesPatch, GeneratedData, Language, PricingSuggestion, Product,
        ProductStatus, StoryContent, Translations,
    },
    response::{ApiResponse, Meta},
    routes::{generate, health, marketplace, params, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::create_product,
        products::list_my_products,
        products::get_product,
        products::apply_edits,
        products::set_status,
        products::delete_product,
        generate::generate_catalog,
        generate::generate_story,
        generate::generate_pricing,
        generate::generate_marketing,
        marketplace::list_marketplace,
    ),
    components(
        schemas(
            Product,
            ProductStatus,
            Language,
            Translations,
            CatalogContent,
            PricingSuggestion,
            StoryContent,
            GeneratedData,
            DisplayPreferences,
            DisplayPreferencesPatch,
            ArtisanEdits,
            ArtisanEditsPatch,
            ResolvedDisplay,
            CreateProductRequest,
            SetStatusRequest,
            ProductWithDisplay,
            ProductList,
            MarketplaceItem,
            MarketplaceList,
            StoryGenerateRequest,
            PricingGenerateRequest,
            params::OwnerListQuery,
            params::MarketplaceQuery,
            Meta,
            ApiResponse<ProductWithDisplay>,
            ApiResponse<ProductList>,
            ApiResponse<MarketplaceList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Artisan product lifecycle"),
        (name = "Generation", description = "AI content regeneration"),
        (name = "Marketplace", description = "Public storefront listing"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
