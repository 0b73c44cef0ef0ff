//! Per-place detail retrieval.

use crate::error::PlacesError;
use crate::retry::retry_with_backoff;
use crate::types::Place;

use super::{read_json, PlacesClient, API_KEY_HEADER, DETAIL_FIELD_MASK, FIELD_MASK_HEADER};

impl PlacesClient {
    /// Fetches the nine detail fields for one place.
    ///
    /// The identifier is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider returns a non-2xx status
    ///   (unknown id, bad key, quota).
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_place(&self, place_id: &str) -> Result<Place, PlacesError> {
        let mut url = self.endpoint(&["places", place_id])?;
        url.query_pairs_mut()
            .append_pair("languageCode", &self.language_code)
            .append_pair("regionCode", &self.region_code);

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(FIELD_MASK_HEADER, DETAIL_FIELD_MASK)
                    .send()
                    .await?;
                read_json(response, format!("getPlace(id={place_id})")).await
            }
        })
        .await
    }
}
