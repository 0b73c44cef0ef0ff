use std::time::Duration;

use leadgen_core::{DetailOutcome, PlaceDetails};
use leadgen_places::normalize::non_empty;
use leadgen_places::Place;

use crate::links::{maps_link, phone_link};
use crate::{require_param, LeadPipeline, PipelineError};

impl LeadPipeline {
    /// Fetches one place's details and scrapes its website for emails.
    ///
    /// Provider failures do not surface as `Err`: they come back as
    /// [`DetailOutcome::Failed`] so bulk callers can keep going. When a
    /// website was scraped, the call pauses `post_scrape_delay_ms` before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingParameter`] if `place_id` is blank; no
    /// request is sent.
    pub async fn fetch_details(&self, place_id: &str) -> Result<DetailOutcome, PipelineError> {
        require_param("place_id", place_id)?;

        let place = match self.places.get_place(place_id).await {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!(place_id, error = %e, "place detail fetch failed");
                return Ok(DetailOutcome::Failed {
                    place_id: place_id.to_string(),
                    error_message: e.to_string(),
                });
            }
        };

        let mut details = details_from_place(place, place_id);

        if let Some(website) = details.website.as_deref() {
            details.emails = self.scraper.extract_emails(website).await;
            if self.config.post_scrape_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.post_scrape_delay_ms)).await;
            }
        }

        tracing::debug!(
            place_id = %details.place_id,
            emails = details.emails.len(),
            "place details fetched"
        );
        Ok(DetailOutcome::Found(details))
    }
}

/// Maps a provider detail record into [`PlaceDetails`] with derived links.
///
/// The provider id wins; `requested_id` is used when the provider omits it.
fn details_from_place(place: Place, requested_id: &str) -> PlaceDetails {
    let name = place.name();
    let phone = place.phone();
    let place_id = non_empty(place.id).unwrap_or_else(|| requested_id.to_string());

    PlaceDetails {
        maps_link: maps_link(&place_id),
        phone_link: phone.as_deref().map(phone_link),
        place_id,
        name,
        address: non_empty(place.formatted_address),
        phone,
        website: non_empty(place.website_uri),
        rating: place.rating,
        review_count: place.user_rating_count,
        status: non_empty(place.business_status),
        emails: Vec::new(),
    }
}
