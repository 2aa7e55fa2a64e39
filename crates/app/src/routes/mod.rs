pub mod auth;
pub mod dashboard;
pub mod marketing;
pub mod not_found;

use dioxus::prelude::*;

use auth::{Auth, Login};
use dashboard::Dashboard;
use marketing::info::{About, Admissions, Contact, Faculty, Fees, Gallery, Notices};
use marketing::{Home, SiteLayout};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/faculty")]
        Faculty {},
        #[route("/gallery")]
        Gallery {},
        #[route("/notices")]
        Notices {},
        #[route("/contact")]
        Contact {},
        #[route("/admissions")]
        Admissions {},
        #[route("/fees")]
        Fees {},
    #[end_layout]
    #[route("/auth")]
    Auth {},
    // Older links point here; it renders the same role picker.
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Marketing links shown in the site header, in order.
    pub fn site_nav() -> [(&'static str, Route); 6] {
        [
            ("Home", Route::Home {}),
            ("About", Route::About {}),
            ("Faculty", Route::Faculty {}),
            ("Gallery", Route::Gallery {}),
            ("Notices", Route::Notices {}),
            ("Contact", Route::Contact {}),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Auth {}.to_string(), "/auth");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Fees {}.to_string(), "/fees");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/library/books".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["library".into(), "books".into()]
            }
        );
    }

    #[test]
    fn site_nav_starts_at_home() {
        let nav = Route::site_nav();
        assert_eq!(nav[0].1, Route::Home {});
        assert_eq!(nav[5].0, "Contact");
    }
}
