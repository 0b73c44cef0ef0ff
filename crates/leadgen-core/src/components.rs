//! Per-component configuration objects.
//!
//! Each client is constructed from one of these rather than reading the
//! environment itself. Binaries derive them from [`AppConfig`]; tests build
//! them directly and usually zero out the pacing delays.

use crate::app_config::AppConfig;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";
pub const DEFAULT_SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (LeadBot/1.0)";
pub const DEFAULT_MAX_BODY_BYTES: usize = 300_000;
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Settings for the upstream places provider client.
#[derive(Clone)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: String,
    pub language_code: String,
    pub region_code: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl PlacesConfig {
    /// Production defaults around the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            language_code: "es".to_string(),
            region_code: "MX".to_string(),
            request_timeout_secs: 30,
            max_retries: 0,
            retry_backoff_base_ms: 500,
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.places_api_key.clone(),
            base_url: config.places_base_url.clone(),
            language_code: config.places_language_code.clone(),
            region_code: config.places_region_code.clone(),
            request_timeout_secs: config.places_request_timeout_secs,
            max_retries: config.places_max_retries,
            retry_backoff_base_ms: config.places_retry_backoff_base_ms,
        }
    }
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("language_code", &self.language_code)
            .field("region_code", &self.region_code)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}

/// Settings for the website email scraper.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 12,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            user_agent: DEFAULT_SCRAPER_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            request_timeout_secs: config.scraper_request_timeout_secs,
            max_body_bytes: config.scraper_max_body_bytes,
            user_agent: config.scraper_user_agent.clone(),
        }
    }
}

/// Pacing and limit settings for the enrichment pipeline.
#[derive(Debug, Clone, Copy)]
pub struct EnrichConfig {
    /// Pause between consecutive detail fetches in one enrichment run.
    pub inter_place_delay_ms: u64,
    /// Pause after each website scrape.
    pub post_scrape_delay_ms: u64,
    /// Applied when the caller gives no limit (or zero).
    pub default_limit: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            inter_place_delay_ms: 300,
            post_scrape_delay_ms: 250,
            default_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl EnrichConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            inter_place_delay_ms: config.enrich_inter_place_delay_ms,
            post_scrape_delay_ms: config.scraper_post_delay_ms,
            default_limit: config.enrich_default_limit,
        }
    }

    /// Resolves a caller-supplied limit: `None` and `Some(0)` fall back to
    /// [`EnrichConfig::default_limit`].
    #[must_use]
    pub fn resolve_limit(&self, limit: Option<usize>) -> usize {
        match limit {
            Some(n) if n > 0 => n,
            _ => self.default_limit,
        }
    }
}
