//! Client for the upstream places provider (Places API v1 wire format).
//!
//! Exposes text search, best-match lookup, and per-place detail retrieval.
//! Responses are mapped into `leadgen-core` domain types by [`normalize`].

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

mod retry;

pub use client::{PlacesClient, DETAIL_FIELD_MASK, FIND_FIELD_MASK, SEARCH_FIELD_MASK};
pub use error::PlacesError;
pub use types::{LocalizedText, Place, SearchTextRequest, SearchTextResponse};
