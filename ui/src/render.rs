//! Static HTML rendering of the hero, for the CLI and for tests.

use dioxus::prelude::*;
use hero_core::{FeaturedPost, HeroConfig};

use crate::{Hero, HERO_STYLES};

/// Root component that provides `config` to the hero below it
#[component]
pub fn StaticHero(#[props(!optional)] data: Option<FeaturedPost>, config: HeroConfig) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        Hero { data: data }
    }
}

#[component]
fn DocumentTitle(text: String) -> Element {
    rsx! {
        title { "{text}" }
    }
}

/// Render the hero markup for `data` to an HTML fragment
pub fn render_hero(data: Option<FeaturedPost>, config: HeroConfig) -> String {
    let mut dom = VirtualDom::new_with_props(StaticHero, StaticHeroProps { data, config });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_title(text: String) -> String {
    let mut dom = VirtualDom::new_with_props(DocumentTitle, DocumentTitleProps { text });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML page containing the hero and its stylesheet
pub fn render_document(data: Option<FeaturedPost>, config: HeroConfig) -> String {
    let title = render_title(
        data.as_ref()
            .map(|post| post.title.clone())
            .unwrap_or_default(),
    );
    let body = render_hero(data, config);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ne\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {title}\n\
         <style>\n{HERO_STYLES}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}
