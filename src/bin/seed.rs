use artisan_market_api::{config::AppConfig, db::create_pool};
use serde_json::{Value, json};
use uuid::Uuid;

struct SeedProduct {
    id: &'static str,
    artisan_id: Uuid,
    name: &'static str,
    category: &'static str,
    image: &'static str,
    material: Option<&'static str>,
    size: Option<&'static str>,
    notes: Option<&'static str>,
    price: i64,
    status: &'static str,
    generated_data: Option<Value>,
    artisan_edits: Option<Value>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let meera = Uuid::parse_str("5b2a67c6-6dc2-4d0d-bb69-0b3c2a16f631")?;
    let ravi = Uuid::parse_str("e0f1a6a8-1dd0-45a3-94ea-4bdbd57a9d3f")?;

    let products = vec![
        SeedProduct {
            id: "31d9a0d4-8a1f-4a06-9c8d-52b1f6e0a911",
            artisan_id: meera,
            name: "Terracotta Vase",
            category: "pottery",
            image: "https://img.example.com/terracotta-vase.jpg",
            material: Some("terracotta clay"),
            size: Some("30cm tall"),
            notes: Some("Hand-thrown, fired in a traditional wood kiln"),
            price: 1200,
            status: "active",
            generated_data: Some(json!({
                "catalog": {
                    "title": "Handcrafted Terracotta Vase",
                    "description": "A hand-thrown terracotta vase with a warm earthen finish, shaped on the wheel and fired in a wood kiln.",
                    "keywords": "terracotta, vase, pottery, handmade, home decor",
                    "translations": {
                        "hindi": "हाथ से बना टेराकोटा फूलदान"
                    }
                },
                "pricing": {
                    "suggestedPriceRangeINR": "₹1,200 - ₹1,800",
                    "reasoning": "Comparable hand-thrown terracotta pieces of this size sell in this range."
                },
                "story": {
                    "culturalStory": "Terracotta work in this region goes back generations; each vase is shaped on a kick wheel and fired over two days."
                }
            })),
            artisan_edits: None,
        },
        SeedProduct {
            id: "7c6e7f0b-4f0e-4f6d-8a9e-3d0f8f2b1c22",
            artisan_id: meera,
            name: "Blue Pottery Bowl",
            category: "pottery",
            image: "https://img.example.com/blue-pottery-bowl.jpg",
            material: Some("quartz ceramic"),
            size: Some("18cm diameter"),
            notes: Some("Jaipur blue pottery, cobalt glaze"),
            // customPrice below is authoritative, the stored price mirrors it
            price: 950,
            status: "active",
            generated_data: Some(json!({
                "catalog": {
                    "title": "Jaipur Blue Pottery Bowl",
                    "description": "A quartz-ceramic bowl glazed in the classic Jaipur cobalt blue.",
                    "keywords": "blue pottery, jaipur, bowl, ceramic"
                },
                "pricing": {
                    "suggestedPriceRangeINR": "₹800 - ₹1,100",
                    "reasoning": "Mid-size blue pottery bowls typically list between these points."
                }
            })),
            artisan_edits: Some(json!({
                "customTitle": "Midnight Blue Bowl",
                "customPrice": 950,
                "displayPreferences": {
                    "showCulturalStory": true,
                    "showAIDescription": true,
                    "preferredLanguage": "english"
                }
            })),
        },
        SeedProduct {
            id: "9f2b3c44-6a5d-4e1f-b7c8-d90a1e2f3b55",
            artisan_id: ravi,
            name: "Bandhani Dupatta",
            category: "textiles",
            image: "https://img.example.com/bandhani-dupatta.jpg",
            material: Some("cotton silk"),
            size: Some("2.2m x 0.9m"),
            notes: Some("Tie-dyed by hand, natural dyes"),
            price: 0,
            status: "draft",
            generated_data: None,
            artisan_edits: None,
        },
    ];

    for product in products {
        upsert_product(&pool, product).await?;
    }

    println!("Seed completed. Artisans: {meera}, {ravi}");
    Ok(())
}

async fn upsert_product(pool: &sqlx::PgPool, product: SeedProduct) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO products (
            id, artisan_id, name, category, image, material, size, notes,
            price, status, generated_data, artisan_edits
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(Uuid::parse_str(product.id)?)
    .bind(product.artisan_id)
    .bind(product.name)
    .bind(product.category)
    .bind(product.image)
    .bind(product.material)
    .bind(product.size)
    .bind(product.notes)
    .bind(product.price)
    .bind(product.status)
    .bind(product.generated_data)
    .bind(product.artisan_edits)
    .execute(pool)
    .await?;

    println!("Ensured product {}", product.name);
    Ok(())
}
