//! HTTP client for the Places API v1 `searchText` and place-detail endpoints.

mod details;
mod search;

use std::time::Duration;

use leadgen_core::PlacesConfig;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::types::ApiErrorEnvelope;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Field mask for multi-result text search: exactly the five summary fields.
pub const SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName.text,places.formattedAddress,places.rating,places.userRatingCount";

/// Field mask for best-match lookup: identifier only.
pub const FIND_FIELD_MASK: &str = "places.id";

/// Field mask for the detail endpoint: the nine fields a lead needs.
pub const DETAIL_FIELD_MASK: &str = "id,displayName.text,formattedAddress,internationalPhoneNumber,nationalPhoneNumber,websiteUri,rating,userRatingCount,businessStatus";

/// Client for the upstream places provider.
///
/// Holds the single shared API key plus the locale bias applied to every
/// request. Use [`PlacesClient::new`] with a [`PlacesConfig`] whose
/// `base_url` points at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language_code: String,
    region_code: String,
    /// Additional attempts after the first failure for transient errors.
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PlacesClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `config.base_url` is not an absolute hierarchical URL.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("leadgen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = parse_base_url(&config.base_url)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
            language_code: config.language_code.clone(),
            region_code: config.region_code.clone(),
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PlacesError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, PlacesError> {
    let url = Url::parse(raw.trim()).map_err(|e| PlacesError::InvalidBaseUrl {
        base_url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(PlacesError::InvalidBaseUrl {
            base_url: raw.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    Ok(url)
}

/// Reads the body, maps non-2xx statuses to [`PlacesError::Api`], and parses
/// 2xx bodies as JSON.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: String,
) -> Result<T, PlacesError> {
    let status = response.status();
    let retry_after_secs = parse_retry_after(response.headers());
    let body = response.text().await?;

    if !status.is_success() {
        return Err(PlacesError::Api {
            status: status.as_u16(),
            message: api_error_message(&body, status),
            retry_after_secs,
        });
    }

    serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize { context, source: e })
}

/// `Retry-After` in delta-seconds form; HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Pulls `error.message` out of a provider error body, falling back to the
/// status reason phrase.
fn api_error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message.or(envelope.error.status))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
