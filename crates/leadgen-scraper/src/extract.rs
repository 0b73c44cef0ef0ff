//! Pure email extraction from page text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// ASCII-only case folding: with Unicode on, `[A-Z]` would also match `ſ`
// (U+017F) and the Kelvin sign (U+212A).
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("valid email regex")
});

/// Substrings marking addresses that belong to hosting, CMS, or marketing
/// vendors rather than the business itself.
pub const NOISE_TOKENS: [&str; 9] = [
    "google",
    "cloudflare",
    "shopify",
    "wix",
    "wordpress",
    "mailchimp",
    "hubspot",
    "zendesk",
    "zoho",
];

/// Maximum number of addresses returned per page.
pub const MAX_EMAILS: usize = 10;

/// Extracts candidate contact emails from raw page text.
///
/// Matches are trimmed and lower-cased, deduplicated in first-seen order,
/// filtered against [`NOISE_TOKENS`], and capped at [`MAX_EMAILS`].
#[must_use]
pub fn extract_emails_from_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|email| seen.insert(email.clone()))
        .filter(|email| !is_noise(email))
        .take(MAX_EMAILS)
        .collect()
}

fn is_noise(email: &str) -> bool {
    NOISE_TOKENS.iter().any(|token| email.contains(token))
}
