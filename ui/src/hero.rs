use dioxus::prelude::*;
use hero_core::{AuthorView, BannerView, FeaturedPost, HeroConfig, HeroView};
use strum::IntoEnumIterator as _;

use crate::icons::{ClockIcon, TagIcon};

/// The two arrangements of the hero. Both are always rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum HeroLayout {
    /// Stacked, for narrow viewports
    Compact,
    /// Card overlaid on a full-height banner
    Wide,
}

impl HeroLayout {
    /// Value of the banner image `sizes` attribute
    fn image_sizes(self) -> &'static str {
        match self {
            HeroLayout::Compact => "100vw",
            HeroLayout::Wide => "80vw",
        }
    }
}

/// Homepage hero for the featured post.
///
/// Reads [`HeroConfig`] from context when an ancestor provides one.
#[component]
pub fn Hero(#[props(!optional)] data: Option<FeaturedPost>) -> Element {
    let config = try_use_context::<HeroConfig>().unwrap_or_default();
    let view = HeroView::build(data.as_ref(), &config);

    rsx! {
        for layout in HeroLayout::iter() {
            HeroVariant { key: "{layout}", layout: layout, view: view.clone() }
        }
    }
}

#[component]
fn HeroVariant(layout: HeroLayout, view: HeroView) -> Element {
    rsx! {
        section {
            class: "hero hero--{layout}",
            BannerImage { layout: layout, banner: view.banner.clone() }

            div {
                class: "hero__card",
                a { class: "hero__title", href: "{view.post_href}", "{view.title}" }

                p { class: "hero__excerpt", "{view.excerpt}" }

                div {
                    class: "hero__meta",
                    AuthorChip { author: view.author.clone() }
                    p {
                        class: "hero__meta-item hero__reading-time",
                        ClockIcon {}
                        span { "{view.reading_time}" }
                    }
                    p {
                        class: "hero__meta-item hero__category",
                        TagIcon {}
                        span { "{view.category_label}" }
                    }
                }

                div {
                    class: "hero__updated",
                    span { class: "hero__updated-label", "{view.updated_label}" }
                    span { class: "hero__updated-at", "{view.updated_at}" }
                }
            }
        }
    }
}

#[component]
fn BannerImage(layout: HeroLayout, #[props(!optional)] banner: Option<BannerView>) -> Element {
    match banner {
        Some(banner) => rsx! {
            div {
                class: "hero__banner",
                img {
                    class: "hero__banner-image",
                    src: "{banner.url}",
                    alt: "{banner.alt}",
                    "loading": "eager",
                    "fetchpriority": "high",
                    "sizes": layout.image_sizes(),
                }
            }
        },
        None => rsx! {
            div { class: "hero__banner hero__banner--placeholder" }
        },
    }
}

/// Avatar load failure, remembered for the URL that failed so a different
/// avatar gets a fresh attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AvatarState {
    failed_url: Option<String>,
}

impl AvatarState {
    fn mark_failed(&mut self, url: &str) {
        self.failed_url = Some(url.to_string());
    }

    /// The URL to show, or `None` when the initials should be shown instead
    fn visible<'a>(&self, url: Option<&'a str>) -> Option<&'a str> {
        url.filter(|url| self.failed_url.as_deref() != Some(*url))
    }
}

#[component]
fn AuthorChip(author: AuthorView) -> Element {
    let state = use_signal(AvatarState::default);

    let avatar = rsx! {
        Avatar {
            state: state,
            url: author.avatar_url.clone(),
            alt: author.name.clone(),
            initials: author.initials.clone(),
        }
    };

    match &author.href {
        Some(href) => rsx! {
            a { class: "hero__author", href: "{href}", {avatar} "{author.name}" }
        },
        None => rsx! {
            span { class: "hero__author", {avatar} "{author.name}" }
        },
    }
}

#[component]
fn Avatar(
    state: Signal<AvatarState>,
    #[props(!optional)] url: Option<String>,
    alt: String,
    initials: String,
) -> Element {
    let mut state = state;
    let visible = state.read().visible(url.as_deref()).map(str::to_string);

    let failed_url = visible.clone();
    let on_error = move |_: Event<ImageData>| {
        if let Some(url) = &failed_url {
            tracing::debug!("Avatar failed to load, showing initials: {}", url);
            state.write().mark_failed(url);
        }
    };

    rsx! {
        span {
            class: "avatar",
            if let Some(src) = visible {
                img {
                    class: "avatar__image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: on_error,
                }
            } else {
                span { class: "avatar__fallback", "{initials}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_hero;
    use hero_core::{Author, ImageData};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    fn budget_session() -> FeaturedPost {
        FeaturedPost {
            title: "बजेट सत्र".to_string(),
            excerpt: "संसदको बजेट अधिवेशन".to_string(),
            category: "politics".to_string(),
            category_id: "123".to_string(),
            authors: vec![Author {
                first_name: "Ram".to_string(),
                last_name: "Thapa".to_string(),
                username: Some("ramthapa".to_string()),
                ..Default::default()
            }],
            reading_time: "५ मिनेट".to_string(),
            hero_banner: Some(ImageData {
                url: "https://cdn/x.jpg".to_string(),
                id: "x".to_string(),
            }),
            updated_at: Some("2025-01-01".to_string()),
            ..Default::default()
        }
    }

    fn render(post: Option<FeaturedPost>) -> String {
        render_hero(post, HeroConfig::default())
    }

    #[test]
    fn test_layout_names() {
        let names: Vec<String> = HeroLayout::iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["compact", "wide"]);
    }

    #[test]
    fn test_both_layouts_rendered() {
        let html = render(Some(budget_session()));
        assert!(html.contains("hero--compact"));
        assert!(html.contains("hero--wide"));
    }

    #[test]
    fn test_links_and_labels() {
        let html = render(Some(budget_session()));

        assert_eq!(html.matches(r#"href="/politics/123""#).count(), 2);
        assert_eq!(html.matches(r#"href="/author/ramthapa""#).count(), 2);
        assert!(html.contains("बजेट सत्र"));
        assert!(html.contains("राजनीति"));
        assert!(html.contains("जनवरी १, २०२५"));
        assert!(html.contains("अपडेट गरिएको :"));
    }

    #[test]
    fn test_banner_image_in_both_layouts() {
        let html = render(Some(budget_session()));

        assert_eq!(html.matches(r#"src="https://cdn/x.jpg""#).count(), 2);
        assert!(html.contains(r#"sizes="100vw""#));
        assert!(html.contains(r#"sizes="80vw""#));
        assert!(!html.contains("hero__banner--placeholder"));
    }

    #[test]
    fn test_missing_banner_renders_placeholder() {
        let mut post = budget_session();
        post.hero_banner = None;
        let html = render(Some(post));

        assert_eq!(html.matches("hero__banner--placeholder").count(), 2);
        assert!(!html.contains("hero__banner-image"));
    }

    #[test]
    fn test_missing_author_renders_placeholder_initials() {
        let mut post = budget_session();
        post.authors.clear();
        let html = render(Some(post));

        assert!(html.contains("अज्ञात लेखक"));
        assert_eq!(html.matches("avatar__fallback").count(), 2);
        assert!(!html.contains("/author/"));
    }

    #[test]
    fn test_avatar_image_replaces_initials() {
        let mut post = budget_session();
        post.authors[0].avatar = Some("https://cdn/ram.png".to_string());
        let html = render(Some(post));

        assert_eq!(html.matches(r#"src="https://cdn/ram.png""#).count(), 2);
        assert!(!html.contains("avatar__fallback"));
    }

    #[component]
    fn AvatarAfterFailure(failed: String, url: String) -> Element {
        let state = use_signal(|| {
            let mut state = AvatarState::default();
            state.mark_failed(&failed);
            state
        });

        rsx! {
            Avatar {
                state: state,
                url: Some(url),
                alt: "Ram Thapa".to_string(),
                initials: "RA".to_string(),
            }
        }
    }

    fn render_avatar_after_failure(failed: &str, url: &str) -> String {
        let props = AvatarAfterFailureProps {
            failed: failed.to_string(),
            url: url.to_string(),
        };
        let mut dom = VirtualDom::new_with_props(AvatarAfterFailure, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_avatar_state_tracks_failed_url() {
        let mut state = AvatarState::default();
        assert_eq!(state.visible(Some("https://cdn/a.png")), Some("https://cdn/a.png"));
        assert_eq!(state.visible(None), None);

        state.mark_failed("https://cdn/a.png");
        assert_eq!(state.visible(Some("https://cdn/a.png")), None);
        assert_eq!(state.visible(Some("https://cdn/b.png")), Some("https://cdn/b.png"));
    }

    #[test]
    fn test_failed_avatar_shows_initials() {
        let html = render_avatar_after_failure("https://cdn/ram.png", "https://cdn/ram.png");

        assert!(html.contains("avatar__fallback"));
        assert!(html.contains("RA"));
        assert!(!html.contains("avatar__image"));
    }

    #[test]
    fn test_new_avatar_url_is_retried() {
        let html = render_avatar_after_failure("https://cdn/old.png", "https://cdn/new.png");

        assert!(html.contains(r#"src="https://cdn/new.png""#));
        assert!(!html.contains("avatar__fallback"));
    }

    #[test]
    fn test_absent_post_renders() {
        let html = render(None);

        assert!(html.contains(r#"href="/""#));
        assert_eq!(html.matches("hero__banner--placeholder").count(), 2);
    }
}
