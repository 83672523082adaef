//! Shared domain types and configuration for the placegrid workspace.

pub mod app_config;
pub mod config;
pub mod entity;
pub mod geo;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use entity::{EnrichedEntity, SearchOutcome, SearchResult, WebsiteKind};
pub use geo::{BoundingBox, GridPoint, LatLng};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
