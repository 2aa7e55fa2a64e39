use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdMenu, LdX};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant};

use crate::routes::Route;

#[component]
pub fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);
    let nav = navigator();

    rsx! {
        header { class: "site-header",
            div { class: "site-header-bar",
                Link { to: Route::Home {}, class: "site-brand",
                    span { class: "site-brand-mark",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 }
                    }
                    span { class: "site-brand-text",
                        span { class: "site-brand-name", "Acharya" }
                        span { class: "site-brand-tagline", "Government of Rajasthan" }
                    }
                }

                nav { class: "site-nav",
                    for (label, route) in Route::site_nav() {
                        Link { to: route, class: "site-nav-link", "{label}" }
                    }
                }

                div { class: "site-header-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| { nav.push(Route::Auth {}); },
                        "Login Portal"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "site-menu-toggle",
                        aria_label: "Toggle navigation",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                        } else {
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    }
                }
            }

            if menu_open() {
                nav { class: "site-nav-mobile",
                    for (label, route) in Route::site_nav() {
                        Link {
                            to: route,
                            class: "site-nav-link",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        block: true,
                        onclick: move |_| {
                            menu_open.set(false);
                            nav.push(Route::Auth {});
                        },
                        "Login Portal"
                    }
                }
            }
        }
    }
}
