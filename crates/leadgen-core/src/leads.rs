//! Lead records produced by the enrichment pipeline.

use serde::{Deserialize, Serialize};

/// Summary fields for one text-search hit, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
}

/// Full details for one place, including any scraped emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub phone_link: Option<String>,
    pub maps_link: String,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub status: Option<String>,
    pub emails: Vec<String>,
}

/// Outcome of fetching one place's details.
///
/// Provider failures are carried as [`DetailOutcome::Failed`] so a bulk run
/// always produces one outcome per input place.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(PlaceDetails),
    Failed {
        place_id: String,
        error_message: String,
    },
}

impl DetailOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, DetailOutcome::Failed { .. })
    }
}

/// One flattened, export-ready lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub query: String,
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub phone_link: Option<String>,
    pub maps_link: Option<String>,
    pub website: Option<String>,
    pub emails: Vec<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

impl Lead {
    /// Flattens a detail outcome into a lead tagged with the originating query.
    ///
    /// A failed outcome keeps only the place id and the error message.
    #[must_use]
    pub fn from_outcome(query: &str, outcome: DetailOutcome) -> Self {
        match outcome {
            DetailOutcome::Found(details) => Self {
                query: query.to_string(),
                place_id: Some(details.place_id),
                name: details.name,
                address: details.address,
                phone: details.phone,
                phone_link: details.phone_link,
                maps_link: Some(details.maps_link),
                website: details.website,
                emails: details.emails,
                rating: details.rating,
                review_count: details.review_count,
                status: details.status,
                error_message: None,
            },
            DetailOutcome::Failed {
                place_id,
                error_message,
            } => Self {
                query: query.to_string(),
                place_id: Some(place_id),
                name: None,
                address: None,
                phone: None,
                phone_link: None,
                maps_link: None,
                website: None,
                emails: Vec::new(),
                rating: None,
                review_count: None,
                status: None,
                error_message: Some(error_message),
            },
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}
