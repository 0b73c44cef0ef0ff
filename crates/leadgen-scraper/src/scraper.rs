//! Best-effort email scraping from a business website.

use std::time::Duration;

use leadgen_core::ScraperConfig;
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::extract::extract_emails_from_text;

/// Fetches a single page and extracts contact emails from it.
///
/// One GET per call, no retries, and any HTTP status is accepted: error
/// pages frequently still carry a footer with contact details.
pub struct EmailScraper {
    client: Client,
    max_body_bytes: usize,
}

impl EmailScraper {
    /// Creates a scraper with the configured timeout, body cap, and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Returns up to ten contact emails found on the page at `url`.
    ///
    /// Never fails: transport errors, oversize bodies, and malformed URLs are
    /// logged at `debug` and yield an empty list.
    pub async fn extract_emails(&self, url: &str) -> Vec<String> {
        match self.fetch_body(url).await {
            Ok(body) => {
                let emails = extract_emails_from_text(&body);
                tracing::debug!(url, count = emails.len(), "scraped website for emails");
                emails
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "website scrape failed");
                Vec::new()
            }
        }
    }

    async fn fetch_body(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = Url::parse(url.trim()).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScraperError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
            });
        }

        let mut response = self.client.get(parsed).send().await?;

        let limit = self.max_body_bytes;
        if response
            .content_length()
            .is_some_and(|len| len > limit as u64)
        {
            return Err(ScraperError::BodyTooLarge { limit });
        }

        // Content-Length may be absent or wrong; enforce the cap while streaming.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(ScraperError::BodyTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
