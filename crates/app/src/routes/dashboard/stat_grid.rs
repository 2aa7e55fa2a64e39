use dioxus::prelude::*;
use shared_types::StatDescriptor;
use shared_ui::{Card, CardContent};

use crate::components::Glyph;

/// One tile per descriptor, in the order given.
#[component]
pub fn StatGrid(stats: Vec<StatDescriptor>) -> Element {
    rsx! {
        div { class: "stats-grid",
            for (index, stat) in stats.into_iter().enumerate() {
                StatCard { key: "{index}", stat }
            }
        }
    }
}

#[component]
fn StatCard(stat: StatDescriptor) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                div { class: "stat-body",
                    div { class: "stat-text",
                        p { class: "stat-title", "{stat.title}" }
                        div { class: "stat-value-row",
                            span { class: "stat-value", "{stat.value}" }
                            if let Some(trend) = stat.trend {
                                span { class: "stat-trend {trend.style_class()}", "{trend.label()}" }
                            }
                        }
                        if let Some(description) = &stat.description {
                            p { class: "stat-description", "{description}" }
                        }
                    }
                    span { class: "stat-icon {stat.color.style_class()}",
                        Glyph { icon: stat.icon, size: 24 }
                    }
                }
            }
        }
    }
}
