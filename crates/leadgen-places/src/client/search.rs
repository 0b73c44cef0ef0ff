//! Text search and best-match lookup.

use leadgen_core::PlaceSummary;

use crate::error::PlacesError;
use crate::normalize::{non_empty, summary_from_place};
use crate::retry::retry_with_backoff;
use crate::types::{SearchTextRequest, SearchTextResponse};

use super::{
    read_json, PlacesClient, API_KEY_HEADER, FIELD_MASK_HEADER, FIND_FIELD_MASK, SEARCH_FIELD_MASK,
};

impl PlacesClient {
    /// Runs a text search and maps every hit into a [`PlaceSummary`], in
    /// provider order. No truncation happens here.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider returns a non-2xx status.
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_text(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let response = self.post_search_text(query, SEARCH_FIELD_MASK).await?;
        tracing::debug!(query, hits = response.places.len(), "places text search completed");
        Ok(response
            .places
            .into_iter()
            .map(summary_from_place)
            .collect())
    }

    /// Returns the identifier of the best-matching place, or `None` when the
    /// search has no hits.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::search_text`].
    pub async fn find_place_id(&self, query: &str) -> Result<Option<String>, PlacesError> {
        let response = self.post_search_text(query, FIND_FIELD_MASK).await?;
        Ok(response
            .places
            .into_iter()
            .next()
            .and_then(|place| non_empty(place.id)))
    }

    async fn post_search_text(
        &self,
        query: &str,
        field_mask: &'static str,
    ) -> Result<SearchTextResponse, PlacesError> {
        let url = self.endpoint(&["places:searchText"])?;

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let body = SearchTextRequest {
                    text_query: query,
                    language_code: &self.language_code,
                    region_code: &self.region_code,
                };
                let response = self
                    .client
                    .post(url)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(FIELD_MASK_HEADER, field_mask)
                    .json(&body)
                    .send()
                    .await?;
                read_json(response, format!("searchText(query={query})")).await
            }
        })
        .await
    }
}
