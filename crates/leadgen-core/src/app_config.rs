use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub places_base_url: String,
    pub places_language_code: String,
    pub places_region_code: String,
    pub places_request_timeout_secs: u64,
    pub places_max_retries: u32,
    pub places_retry_backoff_base_ms: u64,
    pub scraper_request_timeout_secs: u64,
    pub scraper_max_body_bytes: usize,
    pub scraper_user_agent: String,
    pub scraper_post_delay_ms: u64,
    pub enrich_inter_place_delay_ms: u64,
    pub enrich_default_limit: usize,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("places_base_url", &self.places_base_url)
            .field("places_language_code", &self.places_language_code)
            .field("places_region_code", &self.places_region_code)
            .field(
                "places_request_timeout_secs",
                &self.places_request_timeout_secs,
            )
            .field("places_max_retries", &self.places_max_retries)
            .field(
                "places_retry_backoff_base_ms",
                &self.places_retry_backoff_base_ms,
            )
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_max_body_bytes", &self.scraper_max_body_bytes)
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field("scraper_post_delay_ms", &self.scraper_post_delay_ms)
            .field(
                "enrich_inter_place_delay_ms",
                &self.enrich_inter_place_delay_ms,
            )
            .field("enrich_default_limit", &self.enrich_default_limit)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
