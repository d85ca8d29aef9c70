//! Contract with the external text-generation service.
//!
//! Four independent operations (catalog, story, pricing, marketing), each an
//! isolated request/response pair. Failures are surfaced as
//! `GenerationFailed` and are never retried here; the caller may re-invoke
//! the same generation step.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, AppResult};
use crate::models::{CatalogContent, PricingSuggestion, StoryContent};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInput {
    pub name: String,
    pub category: String,
    pub notes: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInput {
    pub name: String,
    pub category: String,
    pub artisan_name: Option<String>,
    pub region: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub category: String,
    pub material: Option<String>,
    pub size: Option<String>,
    pub effort_hours: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingInput {
    pub name: String,
    pub description: Option<String>,
}

/// HTTP client for the generation service. One method per generation kind;
/// no retry, no cross-call ordering.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub async fn catalog(&self, input: &CatalogInput) -> AppResult<CatalogContent> {
        self.post_json("generate/catalog", input).await
    }

    pub async fn story(&self, input: &StoryInput) -> AppResult<StoryContent> {
        self.post_json("generate/story", input).await
    }

    pub async fn pricing(&self, input: &PricingInput) -> AppResult<PricingSuggestion> {
        self.post_json("generate/pricing", input).await
    }

    pub async fn marketing(&self, input: &MarketingInput) -> AppResult<serde_json::Value> {
        self.post_json("generate/marketing", input).await
    }

    async fn post_json<I, O>(&self, path: &str, input: &I) -> AppResult<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.http.post(&url).json(input);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            AppError::GenerationFailed(format!("generation service unreachable: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(AppError::GenerationFailed(format!(
                "generation service returned {status}: {snippet}"
            )));
        }

        response.json::<O>().await.map_err(|err| {
            AppError::GenerationFailed(format!("unparseable generation result: {err}"))
        })
    }
}

static PRICE_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the first numeric group from a free-text price range such as
/// "₹1,200 - ₹1,800", with thousands separators stripped. Input without
/// digits (or past i64 range) parses to 0.
pub fn parse_price_range(text: &str) -> i64 {
    let re = PRICE_RE.get_or_init(|| Regex::new(r"\d[\d,]*").expect("price regex"));
    re.find(text)
        .map(|m| m.as_str().replace(',', ""))
        .and_then(|digits| digits.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Initial price for a freshly created product: parsed from the generated
/// pricing suggestion, 0 when absent or unparseable.
pub fn initial_price(pricing: Option<&PricingSuggestion>) -> i64 {
    pricing
        .and_then(|p| p.suggested_price_range_inr.as_deref())
        .map(parse_price_range)
        .unwrap_or(0)
}
