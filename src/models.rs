use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Active,
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Gujarati,
}

/// Catalog translations keyed by supported language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Translations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gujarati: Option<String>,
}

/// Accept keywords either as a comma-joined string or as an array of strings;
/// the stored form is always the comma-joined string.
fn keywords_as_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    let raw = Option::<Raw>::deserialize(de)?;
    Ok(raw.map(|r| match r {
        Raw::Joined(s) => s,
        Raw::List(items) => items.join(", "),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "keywords_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Translations>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingSuggestion {
    #[serde(
        rename = "suggestedPriceRangeINR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub suggested_price_range_inr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_story: Option<String>,
}

/// AI-generated baseline content, written by ingestion. Sub-keys are
/// add/replace only: regenerating one never removes the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<StoryContent>,
    /// Captions/status/ad script per language; opaque to resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub marketing: Option<serde_json::Value>,
}

/// One regenerated sub-result, as accepted by ingestion.
#[derive(Debug, Clone)]
pub enum GeneratedPart {
    Catalog(CatalogContent),
    Pricing(PricingSuggestion),
    Story(StoryContent),
    Marketing(serde_json::Value),
}

impl GeneratedPart {
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratedPart::Catalog(_) => "catalog",
            GeneratedPart::Pricing(_) => "pricing",
            GeneratedPart::Story(_) => "story",
            GeneratedPart::Marketing(_) => "marketing",
        }
    }
}

impl GeneratedData {
    /// Replace a single sub-key, leaving the other sub-results untouched.
    pub fn apply(&mut self, part: GeneratedPart) {
        match part {
            GeneratedPart::Catalog(c) => self.catalog = Some(c),
            GeneratedPart::Pricing(p) => self.pricing = Some(p),
            GeneratedPart::Story(s) => self.story = Some(s),
            GeneratedPart::Marketing(m) => self.marketing = Some(m),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayPreferences {
    #[serde(rename = "showCulturalStory", default = "default_true")]
    pub show_cultural_story: bool,
    #[serde(rename = "showAIDescription", default = "default_true")]
    pub show_ai_description: bool,
    #[serde(rename = "preferredLanguage", default)]
    pub preferred_language: Language,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_cultural_story: true,
            show_ai_description: true,
            preferred_language: Language::English,
        }
    }
}

/// Artisan-authored overrides. An empty `customTitle`/`customDescription`
/// counts as cleared: resolution falls through to the generated/base value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanEdits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub display_preferences: DisplayPreferences,
}

/// Partial edits: a present field replaces the stored one, absent fields are
/// left alone. `displayPreferences` merges key-by-key rather than wholesale.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanEditsPatch {
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub custom_price: Option<i64>,
    pub custom_keywords: Option<Vec<String>>,
    pub display_preferences: Option<DisplayPreferencesPatch>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DisplayPreferencesPatch {
    #[serde(rename = "showCulturalStory")]
    pub show_cultural_story: Option<bool>,
    #[serde(rename = "showAIDescription")]
    pub show_ai_description: Option<bool>,
    #[serde(rename = "preferredLanguage")]
    pub preferred_language: Option<Language>,
}

impl ArtisanEdits {
    pub fn merge(&mut self, patch: ArtisanEditsPatch) {
        if let Some(title) = patch.custom_title {
            self.custom_title = Some(title);
        }
        if let Some(description) = patch.custom_description {
            self.custom_description = Some(description);
        }
        if let Some(price) = patch.custom_price {
            self.custom_price = Some(price);
        }
        if let Some(keywords) = patch.custom_keywords {
            self.custom_keywords = Some(keywords);
        }
        if let Some(prefs) = patch.display_preferences {
            self.display_preferences.merge(prefs);
        }
    }
}

impl DisplayPreferences {
    pub fn merge(&mut self, patch: DisplayPreferencesPatch) {
        if let Some(show) = patch.show_cultural_story {
            self.show_cultural_story = show;
        }
        if let Some(show) = patch.show_ai_description {
            self.show_ai_description = show;
        }
        if let Some(language) = patch.preferred_language {
            self.preferred_language = language;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub artisan_id: Uuid,
    pub name: String,
    pub category: String,
    pub image: String,
    pub material: Option<String>,
    pub size: Option<String>,
    pub notes: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub cultural_story: Option<String>,
    pub price: i64,
    pub status: ProductStatus,
    pub generated_data: Option<GeneratedData>,
    pub artisan_edits: Option<ArtisanEdits>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

