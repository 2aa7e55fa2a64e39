use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPhone, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{LeaveApplication, LeaveRequest, LeaveStatus, StatIcon};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Input, Textarea};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::leave_badge;
use crate::format_helpers::format_date_human;
use crate::notify::Notice;

/// A leave request paired with whatever this page has decided about it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LeaveRow {
    pub key: String,
    pub request: LeaveRequest,
    pub decision: Option<AckAction>,
}

impl LeaveRow {
    pub fn awaiting_decision(&self) -> bool {
        self.decision.is_none() && self.request.status == LeaveStatus::Pending
    }

    pub fn status_label(&self) -> &'static str {
        match self.decision {
            Some(action) => action.label(),
            None => self.request.status.label(),
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self.decision {
            Some(AckAction::Approved) => BadgeVariant::Success,
            Some(AckAction::Rejected) => BadgeVariant::Destructive,
            Some(_) => BadgeVariant::Secondary,
            None => leave_badge(self.request.status),
        }
    }
}

/// One row per request, in order. Deciding a request never removes it.
pub(crate) fn leave_rows(requests: &[LeaveRequest], ledger: &AckLedger) -> Vec<LeaveRow> {
    requests
        .iter()
        .map(|request| {
            let key = AckLedger::key("leave", request.id);
            let decision = ledger.get(&key);
            LeaveRow {
                key,
                request: request.clone(),
                decision,
            }
        })
        .collect()
}

#[component]
pub(crate) fn LeaveApprovalsPanel(title: &'static str, requests: Vec<LeaveRequest>) -> Element {
    let ack = use_acknowledger();
    let ledger = use_context::<Signal<AckLedger>>();
    let rows = leave_rows(&requests, &ledger.read());

    rsx! {
        PanelCard {
            title: title.to_string(),
            icon: StatIcon::UserCheck,
            description: "Student leave requests for approval",
            div { class: "panel-list",
                for row in rows.into_iter() {
                    {
                        let waiting = row.awaiting_decision();
                        let label = row.status_label();
                        let badge = row.badge();
                        let approve_key = row.key.clone();
                        let reject_key = row.key.clone();
                        let approve_name = row.request.student.clone();
                        let reject_name = row.request.student.clone();
                        rsx! {
                            div { key: "{row.key}", class: "panel-row panel-row-wrap", "data-entry": "{row.key}",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title",
                                        "{row.request.student} "
                                        span { class: "panel-row-meta", "({row.request.placement})" }
                                    }
                                    p { class: "panel-row-meta", "{row.request.reason} • {row.request.dates}" }
                                    if let Some(requested) = &row.request.requested_on {
                                        p { class: "panel-row-meta", "Requested {format_date_human(requested)}" }
                                    }
                                    if let Some(contact) = &row.request.contact {
                                        p { class: "panel-row-meta panel-row-icon",
                                            Icon::<LdPhone> { icon: LdPhone, width: 12, height: 12 }
                                            "{contact}"
                                        }
                                    }
                                }
                                div { class: "panel-row-end",
                                    Badge { variant: badge, "{label}" }
                                }
                                if waiting {
                                    div { class: "panel-row-actions",
                                        Button {
                                            size: ButtonSize::Small,
                                            onclick: move |_| {
                                                ack.record(
                                                    approve_key.clone(),
                                                    AckAction::Approved,
                                                    Notice::leave_approved(&approve_name),
                                                )
                                            },
                                            "Approve"
                                        }
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            size: ButtonSize::Small,
                                            onclick: move |_| {
                                                ack.record(
                                                    reject_key.clone(),
                                                    AckAction::Rejected,
                                                    Notice::leave_rejected(&reject_name),
                                                )
                                            },
                                            "Reject"
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
pub(crate) fn LeaveHistoryPanel(applications: Vec<LeaveApplication>) -> Element {
    let ack = use_acknowledger();
    let mut composing = use_signal(|| false);
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if from.read().trim().is_empty() || to.read().trim().is_empty() {
            error_msg.set(Some("Both dates are required.".to_string()));
            return;
        }
        if reason.read().trim().is_empty() {
            error_msg.set(Some("Please give a reason.".to_string()));
            return;
        }
        error_msg.set(None);
        let key = AckLedger::key("leave-request", format!("{}..{}", from.read(), to.read()));
        ack.record(key, AckAction::Submitted, Notice::leave_submitted());
        from.set(String::new());
        to.set(String::new());
        reason.set(String::new());
        composing.set(false);
    };

    rsx! {
        PanelCard {
            title: "Leave Requests",
            icon: StatIcon::Clipboard,
            description: "Your recent leave applications",
            div { class: "panel-list",
                for leave in applications.iter() {
                    div { key: "{leave.id}", class: "panel-row",
                        div { class: "panel-row-main",
                            p { class: "panel-row-title", "{leave.kind} Leave" }
                            p { class: "panel-row-meta",
                                "{format_date_human(&leave.from)} to {format_date_human(&leave.to)} • {leave.reason}"
                            }
                        }
                        Badge { variant: leave_badge(leave.status), "{leave.status.label()}" }
                    }
                }
            }
            if composing() {
                form { class: "panel-form", onsubmit: handle_submit,
                    if let Some(err) = &*error_msg.read() {
                        div { class: "error-message", "{err}" }
                    }
                    div { class: "form-row",
                        Input {
                            label: "From",
                            input_type: "date",
                            value: from.read().clone(),
                            on_input: move |evt: FormEvent| from.set(evt.value()),
                        }
                        Input {
                            label: "To",
                            input_type: "date",
                            value: to.read().clone(),
                            on_input: move |evt: FormEvent| to.set(evt.value()),
                        }
                    }
                    Textarea {
                        label: "Reason",
                        value: reason.read().clone(),
                        on_input: move |evt: FormEvent| reason.set(evt.value()),
                        placeholder: "Why do you need leave?",
                    }
                    div { class: "panel-row-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| composing.set(false),
                            "Cancel"
                        }
                        button {
                            class: "button",
                            "data-style": "primary",
                            "data-size": "sm",
                            r#type: "submit",
                            "Submit Request"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Outline,
                    block: true,
                    onclick: move |_| composing.set(true),
                    Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                    "New Leave Request"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(id: u32, student: &str) -> LeaveRequest {
        LeaveRequest {
            id,
            student: student.into(),
            placement: "10-A".into(),
            reason: "Medical".into(),
            dates: "Feb 15-16".into(),
            status: LeaveStatus::Pending,
            contact: None,
            requested_on: None,
        }
    }

    #[test]
    fn decided_requests_stay_listed() {
        let requests = vec![request(1, "Priya Sharma"), request(2, "Rahul Singh")];
        let mut ledger = AckLedger::default();
        ledger.record(AckLedger::key("leave", 1), AckAction::Approved);
        ledger.record(AckLedger::key("leave", 2), AckAction::Rejected);

        let rows = leave_rows(&requests, &ledger);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].request.student, "Priya Sharma");
        assert_eq!(rows[0].status_label(), "Approved");
        assert_eq!(rows[1].status_label(), "Rejected");
        assert!(rows.iter().all(|row| !row.awaiting_decision()));
    }

    #[test]
    fn undecided_rows_keep_sample_status() {
        let requests = vec![request(3, "Rohit Kumar")];
        let rows = leave_rows(&requests, &AckLedger::default());
        assert!(rows[0].awaiting_decision());
        assert_eq!(rows[0].status_label(), "Pending");
        assert_eq!(rows[0].badge(), BadgeVariant::Secondary);
    }

    #[test]
    fn approved_entry_still_renders_with_its_badge() {
        #[component]
        fn Harness(requests: Vec<LeaveRequest>) -> Element {
            let mut ledger = AckLedger::default();
            ledger.record(AckLedger::key("leave", 1), AckAction::Approved);
            use_context_provider(|| Signal::new(ledger));
            rsx! {
                LeaveApprovalsPanel { title: "Pending Leave Requests", requests }
            }
        }

        let requests = vec![request(1, "Arjun Patel"), request(2, "Priya Singh")];
        let html = dioxus_ssr::render_element(rsx! {
            shared_ui::ToastProvider {
                Harness { requests }
            }
        });
        assert!(html.contains("Arjun Patel"));
        assert!(html.contains("Priya Singh"));
        assert!(html.contains(">Approved<"));
        assert_eq!(html.matches(">Approve<").count(), 1);
    }
}
