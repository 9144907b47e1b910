use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gateway_url: String,
    /// May be empty: the server still boots, and the insight endpoints report
    /// a configuration error until the key is provided.
    pub gateway_api_key: String,
    pub gateway_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            gateway_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".to_string()),
            gateway_api_key: std::env::var("AI_GATEWAY_API_KEY").unwrap_or_default(),
            gateway_model: std::env::var("AI_GATEWAY_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash".to_string()),
        })
    }
}
