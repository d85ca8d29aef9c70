//! Display resolution: merges AI-generated content, artisan overrides and
//! display preferences into the single record the storefront renders.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{DisplayPreferences, Language, Product};

/// The authoritative "what the customer sees" record for one product.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResolvedDisplay {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub keywords: Option<String>,
    pub cultural_story: Option<String>,
    pub language: Language,
}

/// Compute the resolved display for a product. Pure: no I/O, the product is
/// never mutated, and equal inputs give equal outputs.
///
/// Precedence, per field:
/// - title: non-empty `customTitle` > generated catalog title > stored title > `name`
/// - description: non-empty `customDescription` > generated description when
///   `showAIDescription` is on > stored description otherwise
/// - price: `customPrice` when set > stored price
/// - keywords: non-empty `customKeywords` (joined `", "`) > generated keywords > stored keywords
/// - cultural story: hidden entirely unless `showCulturalStory`; stored story
///   beats the generated one
/// - language: `preferredLanguage`, defaulting to english
pub fn resolve_display(product: &Product) -> ResolvedDisplay {
    let edits = product.artisan_edits.as_ref();
    let catalog = product
        .generated_data
        .as_ref()
        .and_then(|g| g.catalog.as_ref());
    let story = product.generated_data.as_ref().and_then(|g| g.story.as_ref());

    let default_prefs = DisplayPreferences::default();
    let prefs = edits
        .map(|e| &e.display_preferences)
        .unwrap_or(&default_prefs);

    let title = edits
        .and_then(|e| non_empty(e.custom_title.as_deref()))
        .or_else(|| catalog.and_then(|c| c.title.as_deref()))
        .or(product.title.as_deref())
        .unwrap_or(&product.name)
        .to_string();

    let description = match edits.and_then(|e| non_empty(e.custom_description.as_deref())) {
        Some(custom) => Some(custom.to_string()),
        None if prefs.show_ai_description => catalog.and_then(|c| c.description.clone()),
        None => product.description.clone(),
    };

    let price = edits.and_then(|e| e.custom_price).unwrap_or(product.price);

    let keywords = edits
        .and_then(|e| e.custom_keywords.as_ref())
        .filter(|list| !list.is_empty())
        .map(|list| list.join(", "))
        .or_else(|| catalog.and_then(|c| c.keywords.clone()))
        .or_else(|| product.keywords.clone());

    let cultural_story = if prefs.show_cultural_story {
        product
            .cultural_story
            .clone()
            .or_else(|| story.and_then(|s| s.cultural_story.clone()))
    } else {
        None
    };

    ResolvedDisplay {
        title,
        description,
        price,
        keywords,
        cultural_story,
        language: prefs.preferred_language,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
