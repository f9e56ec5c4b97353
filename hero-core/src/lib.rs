//! Hero Core Library
//!
//! This library provides the content model, category localization and display
//! formatting behind the homepage hero banner.

pub mod category;
pub mod config;
pub mod display;
pub mod error;
pub mod post;
pub mod view;

pub use category::{localize_category, CategoryOption, CATEGORY_OPTIONS};
pub use config::HeroConfig;
pub use display::{format_reading_time, format_updated_at, to_devanagari_digits};
pub use error::{HeroError, Result};
pub use post::{Author, FeaturedPost, ImageData};
pub use view::{AuthorView, BannerView, HeroView};

/// High-level helper: parse a featured post JSON document into a render-ready view
pub fn view_from_json(json: &str, config: &HeroConfig) -> Result<HeroView> {
    let post = FeaturedPost::from_json(json)?;
    Ok(HeroView::build(post.as_ref(), config))
}
