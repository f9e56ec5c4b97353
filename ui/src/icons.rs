//! Inline line icons, sized by the surrounding layout's stylesheet.

use dioxus::prelude::*;

#[component]
pub fn ClockIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--clock",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 10" }
        }
    }
}

#[component]
pub fn TagIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--tag",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z" }
            circle { cx: "7.5", cy: "7.5", r: ".5", fill: "currentColor" }
        }
    }
}
