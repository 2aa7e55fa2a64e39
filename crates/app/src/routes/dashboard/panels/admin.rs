//! Analytics and oversight panels on the administrator dashboard.
//!
//! Charts are plain CSS bars: each value is scaled against the largest one
//! in its series so the tallest bar fills the track.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::{
    AdmissionApplication, ClassShare, FeeCollectionPoint, GeneratedReport, Kpi, MonthlyCount,
    QuickAction, StatIcon,
};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Progress, ProgressIndicator};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::admission_badge;
use crate::components::Glyph;
use crate::format_helpers::{format_date_human, lakhs, percent, thousands};
use crate::notify::Notice;

/// Each value as a percentage of the series maximum. An all-zero or empty
/// series scales to zeros.
pub(crate) fn scale_to_max(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| *v as f64 * 100.0 / max as f64)
        .collect()
}

/// Each class's share of all students, in percent.
pub(crate) fn class_percentages(shares: &[ClassShare]) -> Vec<f64> {
    let total: u32 = shares.iter().map(|s| s.students).sum();
    if total == 0 {
        return vec![0.0; shares.len()];
    }
    shares
        .iter()
        .map(|s| f64::from(s.students) * 100.0 / f64::from(total))
        .collect()
}

#[component]
pub(crate) fn KpiPanel(kpis: Vec<Kpi>) -> Element {
    rsx! {
        PanelCard {
            title: "Key Performance Indicators",
            icon: StatIcon::TrendingUp,
            div { class: "panel-list",
                for kpi in kpis.iter() {
                    div { key: "{kpi.label}", class: "occupancy-row",
                        div { class: "occupancy-head",
                            span { class: "panel-row-title", "{kpi.label}" }
                            span { class: "mark-score", "{percent(kpi.value)}" }
                        }
                        Progress {
                            value: Some(kpi.value),
                            ProgressIndicator {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn AdmissionsChart(points: Vec<MonthlyCount>) -> Element {
    let values: Vec<u64> = points.iter().map(|p| p.value).collect();
    let heights = scale_to_max(&values);

    rsx! {
        PanelCard {
            title: "Monthly Admissions",
            icon: StatIcon::Users,
            description: "New students per month",
            div { class: "bar-chart",
                for (point, height) in points.iter().zip(heights) {
                    div { key: "{point.month}", class: "bar-column",
                        span { class: "bar-value", "{point.value}" }
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "height: {height}%" }
                        }
                        span { class: "bar-label", "{point.month}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn FeeCollectionChart(points: Vec<FeeCollectionPoint>) -> Element {
    let mut series: Vec<u64> = points.iter().map(|p| p.collected).collect();
    series.extend(points.iter().map(|p| p.pending));
    let scaled = scale_to_max(&series);
    let (collected, pending) = scaled.split_at(points.len());
    let rows: Vec<(FeeCollectionPoint, f64, f64)> = points
        .iter()
        .cloned()
        .zip(collected.iter().copied())
        .zip(pending.iter().copied())
        .map(|((point, c), p)| (point, c, p))
        .collect();

    rsx! {
        PanelCard {
            title: "Fee Collection Trend",
            icon: StatIcon::CreditCard,
            description: "Collected against pending, by month",
            div { class: "bar-chart",
                for (point, collected, pending) in rows.into_iter() {
                    div { key: "{point.month}", class: "bar-column",
                        span { class: "bar-value", "{lakhs(point.collected)}" }
                        div { class: "bar-track bar-track-pair",
                            div { class: "bar-fill", style: "height: {collected}%" }
                            div { class: "bar-fill bar-fill-muted", style: "height: {pending}%" }
                        }
                        span { class: "bar-label", "{point.month}" }
                        span { class: "bar-caption", "{thousands(point.pending)} due" }
                    }
                }
            }
            div { class: "chart-legend",
                span { class: "legend-swatch" } "Collected"
                span { class: "legend-swatch legend-swatch-muted" } "Pending"
            }
        }
    }
}

#[component]
pub(crate) fn ClassDistributionPanel(shares: Vec<ClassShare>) -> Element {
    let percentages = class_percentages(&shares);

    rsx! {
        PanelCard {
            title: "Student Distribution by Class",
            icon: StatIcon::GraduationCap,
            div { class: "panel-list",
                for (share, pct) in shares.iter().zip(percentages) {
                    div { key: "{share.label}", class: "share-row",
                        span { class: "share-swatch", style: "background: {share.color}" }
                        span { class: "panel-row-title", "{share.label}" }
                        span { class: "panel-row-meta", "{share.students} students" }
                        span { class: "mark-score", "{percent(pct)}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn PendingAdmissionsPanel(applications: Vec<AdmissionApplication>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Pending Admissions",
            icon: StatIcon::Clipboard,
            description: "Applications awaiting review",
            div { class: "panel-list",
                for application in applications.into_iter() {
                    {
                        let key = AckLedger::key("admission", &application.name);
                        let approved = ack.status(&key) == Some(AckAction::Approved);
                        let name = application.name.clone();
                        rsx! {
                            div { key: "{application.name}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{application.name}" }
                                    p { class: "panel-row-meta",
                                        "{application.class_name} • Applied {format_date_human(&application.date)}"
                                    }
                                }
                                div { class: "panel-row-end",
                                    if approved {
                                        Badge { variant: BadgeVariant::Success, "Approved" }
                                    } else {
                                        Badge { variant: admission_badge(&application.status), "{application.status}" }
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            size: ButtonSize::Small,
                                            onclick: move |_| {
                                                ack.record(
                                                    key.clone(),
                                                    AckAction::Approved,
                                                    Notice::admission_approved(&name),
                                                )
                                            },
                                            "Review"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ReportsPanel(reports: Vec<GeneratedReport>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Recent Reports",
            icon: StatIcon::FileText,
            div { class: "panel-list",
                for report in reports.into_iter() {
                    {
                        let key = AckLedger::key("report", &report.title);
                        let title = report.title.clone();
                        rsx! {
                            div { key: "{report.title}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{report.title}" }
                                    p { class: "panel-row-meta",
                                        "{report.category} • {format_date_human(&report.date)}"
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Icon,
                                    aria_label: "Download report",
                                    onclick: move |_| {
                                        ack.record(
                                            key.clone(),
                                            AckAction::Downloaded,
                                            Notice::download_started(&title),
                                        )
                                    },
                                    Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn QuickActionsPanel(actions: Vec<QuickAction>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Quick Actions",
            wide: true,
            div { class: "quick-actions",
                for action in actions.into_iter() {
                    {
                        let title = action.title.clone();
                        rsx! {
                            button {
                                key: "{action.title}",
                                class: "quick-action",
                                r#type: "button",
                                onclick: move |_| ack.notify(Notice::opening(&title)),
                                span { class: "quick-action-icon", Glyph { icon: action.icon, size: 22 } }
                                span { class: "panel-row-title", "{action.title}" }
                                span { class: "panel-row-meta", "{action.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_scale_against_the_largest_value() {
        assert_eq!(scale_to_max(&[50, 100, 25]), vec![50.0, 100.0, 25.0]);
        assert_eq!(scale_to_max(&[0, 0]), vec![0.0, 0.0]);
        assert!(scale_to_max(&[]).is_empty());
    }

    #[test]
    fn class_shares_sum_to_whole() {
        let shares = vec![
            ClassShare { label: "Primary (1-5)".into(), students: 450, color: "#3b82f6".into() },
            ClassShare { label: "Middle (6-8)".into(), students: 350, color: "#10b981".into() },
            ClassShare { label: "Secondary (9-10)".into(), students: 280, color: "#f59e0b".into() },
            ClassShare { label: "Senior (11-12)".into(), students: 170, color: "#ef4444".into() },
        ];
        let pcts = class_percentages(&shares);
        assert_eq!(pcts[0], 36.0);
        assert!((pcts.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert_eq!(class_percentages(&[]), Vec::<f64>::new());
    }

    #[test]
    fn admissions_chart_renders_every_month() {
        let points = vec![
            MonthlyCount { month: "Jan".into(), value: 45 },
            MonthlyCount { month: "Feb".into(), value: 90 },
        ];
        let html = dioxus_ssr::render_element(rsx! { AdmissionsChart { points } });
        assert!(html.contains("Jan"));
        assert!(html.contains("height: 50%"));
        assert!(html.contains("height: 100%"));
    }
}
