use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::{FeeLine, FeeSummary, PaymentStatus, StatIcon};
use shared_ui::{Badge, Button, ButtonSize, ButtonVariant, Progress, ProgressIndicator};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::payment_badge;
use crate::format_helpers::{format_date_human, percent, rupees};
use crate::notify::Notice;

/// Sum of every line not yet paid.
pub(crate) fn outstanding(lines: &[FeeLine]) -> u64 {
    lines
        .iter()
        .filter(|line| line.status != PaymentStatus::Paid)
        .map(|line| line.amount)
        .sum()
}

#[component]
pub(crate) fn FeeStatusPanel(summary: FeeSummary) -> Element {
    let ack = use_acknowledger();
    let paid_share = summary.paid_percentage();
    let paid_label = percent(paid_share);
    let settled = summary.pending == 0;

    rsx! {
        PanelCard {
            title: "Fee Status",
            icon: StatIcon::CreditCard,
            description: "Academic year 2024-25",
            div { class: "fee-figures",
                div { span { class: "panel-row-meta", "Total" } span { class: "figure", "{rupees(summary.total)}" } }
                div { span { class: "panel-row-meta", "Paid" } span { class: "figure figure-success", "{rupees(summary.paid)}" } }
                div { span { class: "panel-row-meta", "Pending" } span { class: "figure figure-warning", "{rupees(summary.pending)}" } }
            }
            Progress {
                value: Some(paid_share),
                ProgressIndicator {}
            }
            p { class: "panel-row-meta", "{paid_label} paid" }
            if !settled {
                div { class: "panel-footer",
                    span { class: "panel-row-meta", "Due {format_date_human(&summary.due_date)}" }
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| ack.notify(Notice::opening("Payment Gateway")),
                        "Pay Now"
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn FeeHistoryPanel(lines: Vec<FeeLine>) -> Element {
    let ack = use_acknowledger();
    let due = outstanding(&lines);

    rsx! {
        PanelCard {
            title: "Fee Management",
            icon: StatIcon::CreditCard,
            description: "Payment history and dues",
            div { class: "panel-list",
                for line in lines.into_iter() {
                    {
                        let key = AckLedger::key("receipt", &line.label);
                        let receipt = line.receipt.clone();
                        let fetched = ack.status(&key).is_some();
                        rsx! {
                            div { key: "{line.label}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{line.label}" }
                                    p { class: "panel-row-meta",
                                        "{format_date_human(&line.date)}"
                                        if let Some(receipt) = &line.receipt {
                                            " • Receipt {receipt}"
                                        }
                                    }
                                }
                                div { class: "panel-row-end",
                                    span { class: "mark-score", "{rupees(line.amount)}" }
                                    Badge { variant: payment_badge(line.status), "{line.status.label()}" }
                                    if let Some(receipt) = receipt {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Icon,
                                            aria_label: "Download receipt",
                                            class: if fetched { "receipt-fetched" } else { "" },
                                            onclick: move |_| {
                                                ack.record(
                                                    key.clone(),
                                                    AckAction::Downloaded,
                                                    Notice::download_started(&format!("receipt {receipt}")),
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
            if due > 0 {
                div { class: "panel-footer",
                    span { "Outstanding: " strong { "{rupees(due)}" } }
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| ack.notify(Notice::opening("Payment Gateway")),
                        "Pay Now"
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

    fn line(label: &str, amount: u64, status: PaymentStatus) -> FeeLine {
        FeeLine {
            label: label.into(),
            amount,
            status,
            date: "2024-03-15".into(),
            receipt: None,
        }
    }

    #[test]
    fn outstanding_skips_paid_lines() {
        let lines = vec![
            line("January 2024", 8_000, PaymentStatus::Paid),
            line("February 2024", 8_000, PaymentStatus::Overdue),
            line("March 2024", 8_000, PaymentStatus::Pending),
        ];
        assert_eq!(outstanding(&lines), 16_000);
        assert_eq!(outstanding(&[]), 0);
    }
}
