use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub generation_url: String,
    pub generation_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let generation_url = env::var("GENERATION_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8089".to_string());
        let generation_api_key = env::var("GENERATION_API_KEY").ok();
        Ok(Self {
            port,
            database_url,
            host,
            generation_url,
            generation_api_key,
        })
    }
}
