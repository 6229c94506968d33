use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // AI provider
    pub openai_api_key: String,
    pub openai_model: String,

    // Web search
    pub search_api_key: String,
    pub search_engine_id: String,

    // News feed
    pub news_feed_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials default to empty strings rather than panicking: a missing
    /// key makes the respective outbound call fail with an auth error, which
    /// the orchestrator absorbs into that component's fallback value.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            search_api_key: env::var("SEARCH_API_KEY").unwrap_or_default(),
            search_engine_id: env::var("SEARCH_ENGINE_ID").unwrap_or_default(),
            news_feed_url: env::var("NEWS_FEED_URL")
                .unwrap_or_else(|_| "https://itmo.ru/rss".to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}
