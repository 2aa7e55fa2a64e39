use dioxus::prelude::*;
use shared_types::{
    AdmissionApplication, ChildSummary, NoticeKind, SchoolNotification, StatIcon, UpcomingEvent,
};
use shared_ui::{Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::admission_badge;
use crate::components::Glyph;
use crate::format_helpers::format_date_human;
use crate::notify::Notice;

fn kind_icon(kind: NoticeKind) -> StatIcon {
    match kind {
        NoticeKind::Exam => StatIcon::BookOpen,
        NoticeKind::Fee => StatIcon::CreditCard,
        NoticeKind::Event => StatIcon::Award,
        NoticeKind::Meeting => StatIcon::Users,
        NoticeKind::Holiday => StatIcon::Calendar,
        NoticeKind::Announcement => StatIcon::Bell,
    }
}

fn kind_label(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Exam => "exam",
        NoticeKind::Fee => "fee",
        NoticeKind::Event => "event",
        NoticeKind::Meeting => "meeting",
        NoticeKind::Holiday => "holiday",
        NoticeKind::Announcement => "announcement",
    }
}

/// Notifications still unread once this page's acknowledgments are applied.
pub(crate) fn unread_count(notifications: &[SchoolNotification], ledger: &AckLedger) -> usize {
    notifications
        .iter()
        .filter(|n| !n.read && !ledger.contains(&AckLedger::key("notification", n.id)))
        .count()
}

#[component]
pub(crate) fn NotificationsPanel(notifications: Vec<SchoolNotification>) -> Element {
    let ack = use_acknowledger();
    let ledger = use_context::<Signal<AckLedger>>();
    let unread = unread_count(&notifications, &ledger.read());

    rsx! {
        PanelCard {
            title: "Notifications",
            icon: StatIcon::Bell,
            description: "{unread} unread",
            div { class: "panel-list",
                for notification in notifications.into_iter() {
                    {
                        let key = AckLedger::key("notification", notification.id);
                        let is_unread = !notification.read && ack.status(&key).is_none();
                        rsx! {
                            div {
                                key: "{notification.id}",
                                class: if is_unread { "panel-row notice-row notice-unread" } else { "panel-row notice-row" },
                                onclick: move |_| {
                                    if is_unread {
                                        ack.record(key.clone(), AckAction::Read, Notice::notification_read());
                                    }
                                },
                                span { class: "notice-icon", Glyph { icon: kind_icon(notification.kind), size: 16 } }
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{notification.title}" }
                                    p { class: "panel-row-meta", "{notification.message}" }
                                    p { class: "panel-row-meta", "{format_date_human(&notification.date)}" }
                                }
                                if is_unread {
                                    span { class: "notice-dot", "aria-label": "Unread" }
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
pub(crate) fn EventsPanel(events: Vec<UpcomingEvent>) -> Element {
    rsx! {
        PanelCard {
            title: "Upcoming Events",
            icon: StatIcon::Calendar,
            div { class: "panel-list",
                for event in events.iter() {
                    div { key: "{event.title}", class: "panel-row",
                        span { class: "notice-icon", Glyph { icon: kind_icon(event.kind), size: 16 } }
                        div { class: "panel-row-main",
                            p { class: "panel-row-title", "{event.title}" }
                            p { class: "panel-row-meta", "{format_date_human(&event.date)}" }
                        }
                        Badge { variant: BadgeVariant::Outline, "{kind_label(event.kind)}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ChildPanel(child: ChildSummary) -> Element {
    let initial = child.initial();

    rsx! {
        PanelCard {
            title: "Student Profile",
            icon: StatIcon::GraduationCap,
            div { class: "child-profile",
                Avatar {
                    AvatarFallback { "{initial}" }
                }
                div {
                    h3 { class: "panel-row-title", "{child.name}" }
                    p { class: "panel-row-meta", "{child.class_name} - {child.section}" }
                }
            }
            dl { class: "detail-list",
                div { dt { "Roll Number" } dd { "{child.roll_number}" } }
                div { dt { "Student ID" } dd { "{child.student_id}" } }
            }
        }
    }
}

#[component]
pub(crate) fn ApplicationPanel(application: AdmissionApplication) -> Element {
    let ack = use_acknowledger();
    let blocked = application.is_blocked();

    rsx! {
        PanelCard {
            title: "Application Status",
            icon: StatIcon::Clipboard,
            description: "Track your admission application",
            dl { class: "detail-list",
                div { dt { "Applicant" } dd { "{application.name}" } }
                div { dt { "Applying for" } dd { "{application.class_name}" } }
                div { dt { "Submitted" } dd { "{format_date_human(&application.date)}" } }
                div {
                    dt { "Status" }
                    dd { Badge { variant: admission_badge(&application.status), "{application.status}" } }
                }
            }
            if blocked {
                div { class: "panel-footer",
                    span { class: "panel-row-meta", "Action needed to continue your application." }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| ack.notify(Notice::opening("Document Upload")),
                        "Upload Documents"
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

    fn notification(id: u32, read: bool) -> SchoolNotification {
        SchoolNotification {
            id,
            kind: NoticeKind::Fee,
            title: "Fee Reminder".into(),
            message: "March fee due".into(),
            date: "2024-02-28".into(),
            read,
        }
    }

    #[test]
    fn unread_count_applies_ledger() {
        let list = vec![notification(1, false), notification(2, false), notification(3, true)];
        let mut ledger = AckLedger::default();
        assert_eq!(unread_count(&list, &ledger), 2);
        ledger.record(AckLedger::key("notification", 1), AckAction::Read);
        assert_eq!(unread_count(&list, &ledger), 1);
    }
}
