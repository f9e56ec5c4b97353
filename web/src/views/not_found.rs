use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            style: "text-align: center; padding: 2rem 0; color: #666;",
            h1 { "404" }
            p { "/{path}" }
            Link { to: Route::Home {}, "गृहपृष्ठ" }
        }
    }
}
