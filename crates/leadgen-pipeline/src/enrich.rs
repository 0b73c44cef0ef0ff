use std::time::Duration;

use leadgen_core::Lead;

use crate::{require_param, LeadPipeline, PipelineError};

impl LeadPipeline {
    /// Searches for `query` and enriches each hit with details and emails.
    ///
    /// Detail fetches run strictly one at a time, in search order, with
    /// `inter_place_delay_ms` between consecutive fetches. Summaries without
    /// an id are skipped. A per-place failure becomes an error-bearing
    /// [`Lead`] and the run continues.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingParameter`] if `query` is blank.
    /// - [`PipelineError::Places`] if the initial search fails; no detail
    ///   fetches are attempted.
    pub async fn enrich(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Lead>, PipelineError> {
        require_param("query", query)?;
        let limit = self.config.resolve_limit(limit);
        tracing::info!(query, limit, "starting lead enrichment");

        let summaries = self.search_text(query, Some(limit)).await?;

        let mut leads = Vec::with_capacity(summaries.len());
        let mut is_first = true;
        for summary in summaries {
            let Some(place_id) = summary.place_id else {
                tracing::debug!(name = ?summary.name, "skipping search hit without place id");
                continue;
            };

            if !is_first && self.config.inter_place_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.inter_place_delay_ms)).await;
            }
            is_first = false;

            let outcome = self.fetch_details(&place_id).await?;
            leads.push(Lead::from_outcome(query, outcome));
        }

        let failed = leads.iter().filter(|lead| lead.is_error()).count();
        tracing::info!(query, leads = leads.len(), failed, "lead enrichment complete");
        Ok(leads)
    }
}
