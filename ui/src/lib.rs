//! This crate contains the shared hero banner components.

use dioxus::prelude::*;

mod hero;
pub use hero::{Hero, HeroLayout};

mod icons;
pub use icons::{ClockIcon, TagIcon};

mod render;
pub use render::{render_document, render_hero, StaticHero};

/// Stylesheet for both hero layouts; the media query picks the visible one.
pub const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Same stylesheet inlined, for standalone documents
pub const HERO_STYLES: &str = include_str!("../assets/styling/hero.css");
