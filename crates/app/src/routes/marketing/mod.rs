//! Public pages: the landing page and the short info pages, all framed by
//! the site header and footer.

mod features;
mod footer;
mod header;
mod hero;
pub mod info;

use dioxus::prelude::*;

use crate::routes::Route;
use features::Features;
use footer::Footer;
use header::SiteHeader;
use hero::Hero;

/// Header, page, footer.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./marketing.css") }
        div { class: "site-shell",
            SiteHeader {}
            main { class: "site-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Features {}
    }
}

