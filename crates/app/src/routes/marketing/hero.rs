use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowRight;
use dioxus_free_icons::Icon;
use shared_types::StatIcon;
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use crate::components::Glyph;
use crate::routes::Route;

const HERO_STATS: [(&str, &str, StatIcon); 4] = [
    ("50,000+", "Active Students", StatIcon::Users),
    ("5,000+", "Faculty Members", StatIcon::BookOpen),
    ("1,200+", "Schools Connected", StatIcon::Award),
    ("99.9%", "System Uptime", StatIcon::Shield),
];

#[component]
pub fn Hero() -> Element {
    let nav = navigator();

    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                Badge { variant: BadgeVariant::Secondary, "Government of Rajasthan" }
                h1 { class: "hero-title",
                    "Welcome to "
                    span { class: "hero-title-accent", "Acharya" }
                    " Education Portal"
                }
                p { class: "hero-lead",
                    "Empowering education through digital transformation. A comprehensive ERP \
                     system designed for schools across Rajasthan, connecting students, parents, \
                     faculty, and administrators in one unified platform."
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Large,
                        onclick: move |_| { nav.push(Route::Auth {}); },
                        "Access Student Portal"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| { nav.push(Route::About {}); },
                        "Learn More"
                    }
                }

                div { class: "hero-stats",
                    for (value, label, icon) in HERO_STATS {
                        div { class: "hero-stat",
                            span { class: "hero-stat-icon", Glyph { icon, size: 28 } }
                            span { class: "hero-stat-value", "{value}" }
                            span { class: "hero-stat-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
