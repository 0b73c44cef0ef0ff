use leadgen_places::PlacesError;
use leadgen_scraper::ScraperError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Places(#[from] PlacesError),

    #[error("scraper setup failed: {0}")]
    ScraperSetup(#[from] ScraperError),
}

impl PipelineError {
    /// `true` for errors caused by caller input rather than the provider.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::MissingParameter(_))
    }
}
