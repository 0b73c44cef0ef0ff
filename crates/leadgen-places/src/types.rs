//! Places API v1 request and response types.
//!
//! ## Observed shape
//!
//! ### Field masks
//! The provider only returns the fields named in `X-Goog-FieldMask`; every
//! other field is omitted entirely (not `null`). Every response field is
//! therefore modeled as `Option` with `#[serde(default)]`.
//!
//! ### `places`
//! A text search with zero hits returns `{}` rather than `{"places": []}`.
//!
//! ### `displayName`
//! Nested object `{ "text": "...", "languageCode": "es" }`. Only `text` is
//! requested.
//!
//! ### Phone numbers
//! `internationalPhoneNumber` (e.g. `"+52 477 123 4567"`) and
//! `nationalPhoneNumber` (e.g. `"477 123 4567"`) are independent and either
//! may be missing.

use serde::{Deserialize, Serialize};

/// JSON body for `POST /places:searchText`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub language_code: &'a str,
    pub region_code: &'a str,
}

/// Top-level response from `POST /places:searchText`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A localized string such as `displayName`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// One place as returned by either search or detail endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Opaque provider identifier (e.g. `"ChIJ..."`).
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<LocalizedText>,

    #[serde(default)]
    pub formatted_address: Option<String>,

    #[serde(default)]
    pub international_phone_number: Option<String>,

    #[serde(default)]
    pub national_phone_number: Option<String>,

    #[serde(default)]
    pub website_uri: Option<String>,

    /// Average rating on the provider's 1.0–5.0 scale.
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub user_rating_count: Option<u32>,

    /// `OPERATIONAL`, `CLOSED_TEMPORARILY`, or `CLOSED_PERMANENTLY`.
    #[serde(default)]
    pub business_status: Option<String>,
}

/// Error envelope returned with non-2xx responses:
/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
