//! Configuration options for hero rendering

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HeroError, Result};

/// Nepal Time, UTC+05:45
const NEPAL_UTC_OFFSET_MINUTES: i32 = 5 * 60 + 45;

/// Configuration for hero rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Name shown when the post has no author
    pub unknown_author: String,

    /// Banner alt text when the post has no title
    pub banner_alt_fallback: String,

    /// Label in front of the last-updated date
    pub updated_label: String,

    /// Offset applied to timestamps before display, in minutes east of UTC
    pub utc_offset_minutes: i32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            unknown_author: "अज्ञात लेखक".to_string(),
            banner_alt_fallback: "Hero banner".to_string(),
            updated_label: "अपडेट गरिएको :".to_string(),
            utc_offset_minutes: NEPAL_UTC_OFFSET_MINUTES,
        }
    }
}

impl HeroConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the placeholder author name
    pub fn with_unknown_author<S: Into<String>>(mut self, name: S) -> Self {
        self.unknown_author = name.into();
        self
    }

    /// Set the banner alt text fallback
    pub fn with_banner_alt_fallback<S: Into<String>>(mut self, alt: S) -> Self {
        self.banner_alt_fallback = alt.into();
        self
    }

    /// Set the last-updated label
    pub fn with_updated_label<S: Into<String>>(mut self, label: S) -> Self {
        self.updated_label = label.into();
        self
    }

    /// Set the display offset in minutes east of UTC
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// The display offset as a chrono offset
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                HeroError::Configuration(format!(
                    "UTC offset out of range: {} minutes",
                    self.utc_offset_minutes
                ))
            })
    }

    /// Check the configuration for values that cannot be rendered
    pub fn validate(&self) -> Result<()> {
        self.utc_offset()?;
        if self.unknown_author.trim().is_empty() {
            return Err(HeroError::Configuration(
                "placeholder author name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
