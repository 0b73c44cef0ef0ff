//! Lead enrichment: search, per-place details, website email scraping, and
//! the paced sequential orchestrator that ties them together.

mod details;
mod enrich;
pub mod error;
pub mod links;
mod search;

use leadgen_core::{AppConfig, EnrichConfig, PlacesConfig, ScraperConfig};
use leadgen_places::PlacesClient;
use leadgen_scraper::EmailScraper;

pub use error::PipelineError;
pub use links::{maps_link, phone_link};

/// Entry point for every lead operation.
///
/// Owns one provider client and one scraper; both hold pooled HTTP clients,
/// so a single pipeline is shared across requests behind an `Arc`.
pub struct LeadPipeline {
    places: PlacesClient,
    scraper: EmailScraper,
    config: EnrichConfig,
}

impl LeadPipeline {
    #[must_use]
    pub fn new(places: PlacesClient, scraper: EmailScraper, config: EnrichConfig) -> Self {
        Self {
            places,
            scraper,
            config,
        }
    }

    /// Builds the provider client, scraper, and pacing settings from the
    /// application config.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Places`] if the provider base URL is invalid
    /// or its HTTP client cannot be built, and [`PipelineError::ScraperSetup`]
    /// if the scraper's HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let places = PlacesClient::new(&PlacesConfig::from_app_config(config))?;
        let scraper = EmailScraper::new(&ScraperConfig::from_app_config(config))?;
        Ok(Self::new(
            places,
            scraper,
            EnrichConfig::from_app_config(config),
        ))
    }
}

/// Rejects blank input. Callers keep using their own string unchanged.
fn require_param(name: &'static str, value: &str) -> Result<(), PipelineError> {
    if value.trim().is_empty() {
        Err(PipelineError::MissingParameter(name))
    } else {
        Ok(())
    }
}
