//! Mapping from provider wire types into `leadgen-core` domain types.

use leadgen_core::PlaceSummary;

use crate::types::Place;

/// Treats empty or whitespace-only strings as absent.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Place {
    /// The display name text, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        non_empty(self.display_name.as_ref().and_then(|d| d.text.clone()))
    }

    /// Preferred phone number: international format first, national second.
    #[must_use]
    pub fn phone(&self) -> Option<String> {
        non_empty(self.international_phone_number.clone())
            .or_else(|| non_empty(self.national_phone_number.clone()))
    }
}

/// Maps one search hit into a [`PlaceSummary`].
#[must_use]
pub fn summary_from_place(place: Place) -> PlaceSummary {
    PlaceSummary {
        name: place.name(),
        place_id: non_empty(place.id),
        address: non_empty(place.formatted_address),
        rating: place.rating,
        review_count: place.user_rating_count,
    }
}
