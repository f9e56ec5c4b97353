use dioxus::prelude::*;
use hero_core::HeroConfig;
use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(HeroConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::HERO_CSS }
        Router::<Route> {}
    }
}
