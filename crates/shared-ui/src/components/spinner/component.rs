use dioxus::prelude::*;

/// Centered spinner with a caption.
#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-block", role: "status",
            div { class: "spinner" }
            p { class: "spinner-label", "{label}" }
        }
    }
}
