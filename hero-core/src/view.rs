//! Render-ready projection of a featured post.
//!
//! Every field is resolved here, fallbacks included, so the layouts never
//! look at the raw post.

use chrono::{Offset, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::category::localize_category;
use crate::config::HeroConfig;
use crate::display::{format_reading_time, format_updated_at};
use crate::post::{Author, FeaturedPost};

/// Banner image to show instead of the placeholder block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerView {
    pub url: String,
    pub alt: String,
}

/// Author chip contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub name: String,
    /// Shown when the avatar is missing or fails to load
    pub initials: String,
    pub avatar_url: Option<String>,
    /// Profile link, only when the author has a username
    pub href: Option<String>,
}

/// Hero contents shared by the compact and wide layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub post_href: String,
    pub excerpt: String,
    pub banner: Option<BannerView>,
    pub author: AuthorView,
    pub reading_time: String,
    pub category_label: String,
    pub updated_label: String,
    pub updated_at: String,
}

impl AuthorView {
    fn from_author(author: Option<&Author>, config: &HeroConfig) -> Self {
        let Some(author) = author else {
            return Self::placeholder(config);
        };

        Self {
            initials: initials(&author.full_name()),
            name: author.full_name(),
            avatar_url: author.avatar.clone().filter(|url| !url.is_empty()),
            href: author
                .username
                .as_deref()
                .filter(|username| !username.is_empty())
                .map(|username| format!("/author/{}", username)),
        }
    }

    fn placeholder(config: &HeroConfig) -> Self {
        Self {
            name: config.unknown_author.clone(),
            initials: initials(&config.unknown_author),
            avatar_url: None,
            href: None,
        }
    }
}

impl HeroView {
    /// Build the view for `post`. Never fails; absent data falls back to placeholders.
    pub fn build(post: Option<&FeaturedPost>, config: &HeroConfig) -> Self {
        let offset = config.utc_offset().unwrap_or_else(|e| {
            warn!("{}, showing timestamps in UTC", e);
            Utc.fix()
        });

        let Some(post) = post else {
            debug!("No featured post, rendering placeholder hero");
            return Self::placeholder(config);
        };

        let banner = post
            .hero_banner
            .as_ref()
            .filter(|image| !image.url.is_empty())
            .map(|image| BannerView {
                url: image.url.clone(),
                alt: non_empty_or(&post.title, &config.banner_alt_fallback),
            });

        let updated_at = post.updated_at.as_deref().unwrap_or_default();
        let updated_at = format_updated_at(updated_at, offset).unwrap_or_else(|e| {
            warn!("{}, showing it unformatted", e);
            updated_at.to_string()
        });

        Self {
            title: post.title.clone(),
            post_href: post_href(&post.category, &post.category_id),
            excerpt: post.excerpt.clone(),
            banner,
            author: AuthorView::from_author(post.lead_author(), config),
            reading_time: format_reading_time(&post.reading_time),
            category_label: localize_category(&post.category).to_string(),
            updated_label: config.updated_label.clone(),
            updated_at,
        }
    }

    fn placeholder(config: &HeroConfig) -> Self {
        Self {
            title: String::new(),
            post_href: "/".to_string(),
            excerpt: String::new(),
            banner: None,
            author: AuthorView::placeholder(config),
            reading_time: String::new(),
            category_label: String::new(),
            updated_label: config.updated_label.clone(),
            updated_at: String::new(),
        }
    }
}

fn post_href(category: &str, category_id: &str) -> String {
    if category.is_empty() || category_id.is_empty() {
        return "/".to_string();
    }
    format!("/{}/{}", category, category_id)
}

/// First two characters, upper-cased
fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
