use dioxus::logger::tracing;
use dioxus::prelude::*;
use hero_core::FeaturedPost;
use ui::Hero;

/// Featured post bundled with the app until a content feed is wired in
const FEATURED_POST: &str = include_str!("../../assets/featured.json");

#[component]
pub fn Home() -> Element {
    let data = use_hook(|| match FeaturedPost::from_json(FEATURED_POST) {
        Ok(post) => post,
        Err(e) => {
            tracing::error!("Failed to load featured post: {}", e);
            None
        }
    });

    rsx! {
        Hero { data: data }
    }
}
