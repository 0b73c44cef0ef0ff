use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// This is the only place `.env` is loaded; binaries call it before reading any env var.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment
/// so tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let places_api_key = require("PLACES_API_KEY")?;

    let env = parse_environment(&or_default("LEADGEN_ENV", "development"))?;
    let bind_addr: SocketAddr = parse_as(
        "LEADGEN_BIND_ADDR",
        &or_default("LEADGEN_BIND_ADDR", "0.0.0.0:5174"),
    )?;
    let log_level = or_default("LEADGEN_LOG_LEVEL", "info");

    let places_base_url = or_default(
        "LEADGEN_PLACES_BASE_URL",
        "https://places.googleapis.com/v1",
    );
    let places_language_code = or_default("LEADGEN_PLACES_LANGUAGE_CODE", "es");
    let places_region_code = or_default("LEADGEN_PLACES_REGION_CODE", "MX");
    let places_request_timeout_secs: u64 = parse_as(
        "LEADGEN_PLACES_REQUEST_TIMEOUT_SECS",
        &or_default("LEADGEN_PLACES_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let places_max_retries: u32 = parse_as(
        "LEADGEN_PLACES_MAX_RETRIES",
        &or_default("LEADGEN_PLACES_MAX_RETRIES", "0"),
    )?;
    let places_retry_backoff_base_ms: u64 = parse_as(
        "LEADGEN_PLACES_RETRY_BACKOFF_BASE_MS",
        &or_default("LEADGEN_PLACES_RETRY_BACKOFF_BASE_MS", "500"),
    )?;

    let scraper_request_timeout_secs: u64 = parse_as(
        "LEADGEN_SCRAPER_REQUEST_TIMEOUT_SECS",
        &or_default("LEADGEN_SCRAPER_REQUEST_TIMEOUT_SECS", "12"),
    )?;
    let scraper_max_body_bytes: usize = parse_as(
        "LEADGEN_SCRAPER_MAX_BODY_BYTES",
        &or_default("LEADGEN_SCRAPER_MAX_BODY_BYTES", "300000"),
    )?;
    let scraper_user_agent =
        or_default("LEADGEN_SCRAPER_USER_AGENT", "Mozilla/5.0 (LeadBot/1.0)");
    if scraper_user_agent.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_SCRAPER_USER_AGENT".to_string(),
            reason: "user agent must not be empty".to_string(),
        });
    }
    let scraper_post_delay_ms: u64 = parse_as(
        "LEADGEN_SCRAPER_POST_DELAY_MS",
        &or_default("LEADGEN_SCRAPER_POST_DELAY_MS", "250"),
    )?;

    let enrich_inter_place_delay_ms: u64 = parse_as(
        "LEADGEN_ENRICH_INTER_PLACE_DELAY_MS",
        &or_default("LEADGEN_ENRICH_INTER_PLACE_DELAY_MS", "300"),
    )?;
    let enrich_default_limit: usize = parse_as(
        "LEADGEN_ENRICH_DEFAULT_LIMIT",
        &or_default("LEADGEN_ENRICH_DEFAULT_LIMIT", "20"),
    )?;
    if enrich_default_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_ENRICH_DEFAULT_LIMIT".to_string(),
            reason: "default limit must be at least 1".to_string(),
        });
    }

    let rate_limit_per_minute: usize = parse_as(
        "LEADGEN_RATE_LIMIT_PER_MINUTE",
        &or_default("LEADGEN_RATE_LIMIT_PER_MINUTE", "60"),
    )?;

    Ok(AppConfig {
        places_api_key,
        env,
        bind_addr,
        log_level,
        places_base_url,
        places_language_code,
        places_region_code,
        places_request_timeout_secs,
        places_max_retries,
        places_retry_backoff_base_ms,
        scraper_request_timeout_secs,
        scraper_max_body_bytes,
        scraper_user_agent,
        scraper_post_delay_ms,
        enrich_inter_place_delay_ms,
        enrich_default_limit,
        rate_limit_per_minute,
    })
}

/// Parse a trimmed env-var value, mapping failures to [`ConfigError::InvalidEnvVar`].
fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
