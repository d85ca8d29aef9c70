use serde::Deserialize;
use utoipa::ToSchema;

/// Extras for the cultural-story generation call; everything else is taken
/// from the product record.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StoryGenerateRequest {
    pub artisan_name: Option<String>,
    pub region: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PricingGenerateRequest {
    pub effort_hours: Option<i32>,
}
