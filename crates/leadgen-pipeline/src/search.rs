use leadgen_core::PlaceSummary;

use crate::{require_param, LeadPipeline, PipelineError};

impl LeadPipeline {
    /// Text search returning at most `limit` summaries in provider order.
    ///
    /// A `limit` of `None` or `0` falls back to the configured default (20).
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingParameter`] if `query` is blank; no request
    ///   is sent.
    /// - [`PipelineError::Places`] if the provider call fails.
    pub async fn search_text(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PlaceSummary>, PipelineError> {
        require_param("query", query)?;
        let limit = self.config.resolve_limit(limit);

        let mut places = self.places.search_text(query).await?;
        places.truncate(limit);
        Ok(places)
    }

    /// Identifier of the best-matching place, or `None` with no hits.
    ///
    /// # Errors
    ///
    /// Same as [`LeadPipeline::search_text`].
    pub async fn find_place(&self, query: &str) -> Result<Option<String>, PipelineError> {
        require_param("query", query)?;
        Ok(self.places.find_place_id(query).await?)
    }
}
