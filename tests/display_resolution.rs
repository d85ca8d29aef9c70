use artisan_market_api::{
    display::resolve_display,
    models::{
        ArtisanEdits, CatalogContent, DisplayPreferences, GeneratedData, Language, Product,
        ProductStatus, StoryContent,
    },
};
use chrono::Utc;
use uuid::Uuid;

fn base_product() -> Product {
    Product {
        id: Uuid::new_v4(),
        artisan_id: Uuid::new_v4(),
        name: "Blue Vase".into(),
        category: "pottery".into(),
        image: "https://img.example.com/vase.jpg".into(),
        material: None,
        size: None,
        notes: None,
        title: None,
        description: None,
        keywords: None,
        cultural_story: None,
        price: 500,
        status: ProductStatus::Draft,
        generated_data: None,
        artisan_edits: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn with_catalog(title: Option<&str>, description: Option<&str>, keywords: Option<&str>) -> GeneratedData {
    GeneratedData {
        catalog: Some(CatalogContent {
            title: title.map(String::from),
            description: description.map(String::from),
            keywords: keywords.map(String::from),
            translations: None,
        }),
        ..Default::default()
    }
}

#[test]
fn bare_product_resolves_from_base_fields() {
    let product = base_product();
    let display = resolve_display(&product);

    assert_eq!(display.title, "Blue Vase");
    assert_eq!(display.description, None);
    assert_eq!(display.price, 500);
    assert_eq!(display.keywords, None);
    assert_eq!(display.cultural_story, None);
    assert_eq!(display.language, Language::English);
}

#[test]
fn title_prefers_custom_over_generated_over_name() {
    let mut product = base_product();
    product.generated_data = Some(with_catalog(Some("Handcrafted Cobalt Vase"), None, None));

    let display = resolve_display(&product);
    assert_eq!(display.title, "Handcrafted Cobalt Vase");

    product.artisan_edits = Some(ArtisanEdits {
        custom_title: Some("Cobalt Vase".into()),
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.title, "Cobalt Vase");
}

#[test]
fn empty_custom_title_counts_as_cleared() {
    let mut product = base_product();
    product.generated_data = Some(with_catalog(Some("Handcrafted Cobalt Vase"), None, None));
    product.artisan_edits = Some(ArtisanEdits {
        custom_title: Some(String::new()),
        ..Default::default()
    });

    let display = resolve_display(&product);
    assert_eq!(display.title, "Handcrafted Cobalt Vase");
}

#[test]
fn stored_title_beats_name_only() {
    let mut product = base_product();
    product.title = Some("Imported Vase".into());

    let display = resolve_display(&product);
    assert_eq!(display.title, "Imported Vase");

    product.generated_data = Some(with_catalog(Some("Handcrafted Cobalt Vase"), None, None));
    let display = resolve_display(&product);
    assert_eq!(display.title, "Handcrafted Cobalt Vase");
}

#[test]
fn custom_price_overrides_stored_price() {
    let mut product = base_product();
    product.artisan_edits = Some(ArtisanEdits {
        custom_price: Some(950),
        ..Default::default()
    });

    let display = resolve_display(&product);
    assert_eq!(display.price, 950);

    product.artisan_edits = None;
    let display = resolve_display(&product);
    assert_eq!(display.price, 500);
}

#[test]
fn keywords_chain_custom_generated_stored() {
    let mut product = base_product();
    product.keywords = Some("old, tags".into());
    product.generated_data = Some(with_catalog(None, None, Some("pottery, blue, handmade")));

    let display = resolve_display(&product);
    assert_eq!(display.keywords.as_deref(), Some("pottery, blue, handmade"));

    product.artisan_edits = Some(ArtisanEdits {
        custom_keywords: Some(vec!["cobalt".into(), "vase".into()]),
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.keywords.as_deref(), Some("cobalt, vase"));

    // An empty custom list is treated as unset.
    product.artisan_edits = Some(ArtisanEdits {
        custom_keywords: Some(vec![]),
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.keywords.as_deref(), Some("pottery, blue, handmade"));

    product.generated_data = None;
    let display = resolve_display(&product);
    assert_eq!(display.keywords.as_deref(), Some("old, tags"));
}

#[test]
fn cultural_story_hidden_when_toggled_off() {
    let mut product = base_product();
    product.cultural_story = Some("Passed down four generations.".into());
    product.generated_data = Some(GeneratedData {
        story: Some(StoryContent {
            cultural_story: Some("Generated story.".into()),
        }),
        ..Default::default()
    });

    // Default preferences show the story; the stored one wins.
    let display = resolve_display(&product);
    assert_eq!(
        display.cultural_story.as_deref(),
        Some("Passed down four generations.")
    );

    product.cultural_story = None;
    let display = resolve_display(&product);
    assert_eq!(display.cultural_story.as_deref(), Some("Generated story."));

    product.artisan_edits = Some(ArtisanEdits {
        display_preferences: DisplayPreferences {
            show_cultural_story: false,
            ..Default::default()
        },
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.cultural_story, None);
}

#[test]
fn description_respects_ai_toggle() {
    let mut product = base_product();
    product.description = Some("Stored description.".into());
    product.generated_data = Some(with_catalog(None, Some("AI description."), None));

    // Toggle on (default): generated wins.
    let display = resolve_display(&product);
    assert_eq!(display.description.as_deref(), Some("AI description."));

    // Toggle off: stored description.
    product.artisan_edits = Some(ArtisanEdits {
        display_preferences: DisplayPreferences {
            show_ai_description: false,
            ..Default::default()
        },
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.description.as_deref(), Some("Stored description."));

    // Custom text beats both, whatever the toggle says.
    product.artisan_edits = Some(ArtisanEdits {
        custom_description: Some("My own words.".into()),
        ..Default::default()
    });
    let display = resolve_display(&product);
    assert_eq!(display.description.as_deref(), Some("My own words."));
}

#[test]
fn language_follows_preference() {
    let mut product = base_product();
    product.artisan_edits = Some(ArtisanEdits {
        display_preferences: DisplayPreferences {
            preferred_language: Language::Hindi,
            ..Default::default()
        },
        ..Default::default()
    });

    let display = resolve_display(&product);
    assert_eq!(display.language, Language::Hindi);
}

#[test]
fn resolution_is_deterministic_and_read_only() {
    let mut product = base_product();
    product.generated_data = Some(with_catalog(
        Some("Handcrafted Cobalt Vase"),
        Some("AI description."),
        Some("pottery, blue"),
    ));
    product.artisan_edits = Some(ArtisanEdits {
        custom_price: Some(950),
        ..Default::default()
    });

    let before = serde_json::to_value(&product).unwrap();
    let first = resolve_display(&product);
    let second = resolve_display(&product);
    let after = serde_json::to_value(&product).unwrap();

    assert_eq!(first, second);
    assert_eq!(before, after);
}
