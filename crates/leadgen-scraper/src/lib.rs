pub mod error;
pub mod extract;
pub mod scraper;

pub use error::ScraperError;
pub use extract::{extract_emails_from_text, MAX_EMAILS, NOISE_TOKENS};
pub use scraper::EmailScraper;
