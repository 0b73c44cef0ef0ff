//! Shared domain types and configuration for the lead enrichment workspace.

pub mod app_config;
pub mod components;
pub mod config;
pub mod leads;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use components::{EnrichConfig, PlacesConfig, ScraperConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use leads::{DetailOutcome, Lead, PlaceDetails, PlaceSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
