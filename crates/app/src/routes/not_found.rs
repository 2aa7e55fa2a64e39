use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdGraduationCap;
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Catch-all for paths no route claims.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                span { class: "not-found-mark",
                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 40, height: 40 }
                }
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "This page is not on the portal" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    ". It may have moved, or the link may be mistyped."
                }
                div { class: "not-found-links",
                    Link { to: Route::Home {}, class: "not-found-link", "Home" }
                    Link { to: Route::Auth {}, class: "not-found-link", "Login Portal" }
                }
            }
        }
    }
}
