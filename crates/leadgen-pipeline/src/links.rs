//! Derived contact links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped when encoding a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=Google&query_place_id=";

/// Map-search URL that opens the given place.
#[must_use]
pub fn maps_link(place_id: &str) -> String {
    format!(
        "{MAPS_SEARCH_URL}{}",
        utf8_percent_encode(place_id, URI_COMPONENT)
    )
}

/// `tel:` URI with all whitespace removed from the phone number.
#[must_use]
pub fn phone_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
