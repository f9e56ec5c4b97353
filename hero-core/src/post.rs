//! Featured post content model, as served by the content service

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::Result;

/// Image reference handed out by the image-serving layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// Identifier assigned by the image host
    #[serde(rename = "public_id", alias = "id", deserialize_with = "null_as_default")]
    pub id: String,
}

/// Article author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    pub avatar: Option<String>,

    /// Identity-provider id of the author account
    #[serde(rename = "clerkId", deserialize_with = "null_as_default")]
    pub identity_id: String,

    /// Profile handle, used for `/author/{username}`
    pub username: Option<String>,
}

/// The single promoted article shown in the hero section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedPost {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with = "null_as_default")]
    pub reading_time: String,
    pub hero_banner: Option<ImageData>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The content service sends `null` for unset fields; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Author {
    /// "First Last", as the byline shows it. Not trimmed, so initials of a
    /// name without a first part start with the separating space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl FeaturedPost {
    /// Parse a post document. A JSON `null` means there is no featured post.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a post document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded post document: {:?}", path.as_ref());
        Self::from_json(&text)
    }

    /// The author credited in the hero, if any
    pub fn lead_author(&self) -> Option<&Author> {
        self.authors.first()
    }
}
