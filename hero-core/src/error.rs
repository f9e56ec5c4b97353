//! Error types for the hero-core library

use thiserror::Error;

/// Main error type for hero operations
#[derive(Error, Debug)]
pub enum HeroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid post data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for hero operations
pub type Result<T> = std::result::Result<T, HeroError>;

impl PartialEq for HeroError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            HeroError::Io(err) => {
                matches!(other, HeroError::Io(e) if err.to_string() == e.to_string())
            }
            HeroError::Json(err) => {
                matches!(other, HeroError::Json(e) if err.to_string() == e.to_string())
            }
            HeroError::InvalidTimestamp(msg) => {
                matches!(other, HeroError::InvalidTimestamp(o) if msg == o)
            }
            HeroError::Configuration(msg) => {
                matches!(other, HeroError::Configuration(o) if msg == o)
            }
        }
    }
}
