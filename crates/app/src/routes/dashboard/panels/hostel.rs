use dioxus::prelude::*;
use shared_types::{BlockOccupancy, Complaint, ComplaintStatus, HostelAssignment, StatIcon};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Progress, ProgressIndicator};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::{complaint_badge, occupancy_badge, priority_badge};
use crate::format_helpers::format_date_human;
use crate::notify::Notice;

#[component]
pub(crate) fn HostelPanel(assignment: HostelAssignment) -> Element {
    let room = assignment.room_label();

    rsx! {
        PanelCard {
            title: "Hostel Details",
            icon: StatIcon::Building,
            description: "Your accommodation info",
            dl { class: "detail-list",
                div { dt { "Room" } dd { "{room}" } }
                div { dt { "Roommate" } dd { "{assignment.roommate}" } }
                div { dt { "Warden" } dd { "{assignment.warden}" } }
            }
            div { class: "chip-row",
                for facility in assignment.facilities.iter() {
                    Badge { key: "{facility}", variant: BadgeVariant::Outline, "{facility}" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn OccupancyPanel(blocks: Vec<BlockOccupancy>) -> Element {
    rsx! {
        PanelCard {
            title: "Room Occupancy Overview",
            icon: StatIcon::Building,
            description: "Beds filled per block",
            div { class: "panel-list",
                for block in blocks.iter() {
                    div { key: "{block.block}", class: "occupancy-row",
                        div { class: "occupancy-head",
                            span { class: "panel-row-title", "{block.block}" }
                            span { class: "panel-row-meta", "{block.occupied}/{block.total} rooms" }
                            Badge { variant: occupancy_badge(block.rate), "{block.rate}%" }
                        }
                        Progress {
                            value: Some(f64::from(block.rate)),
                            ProgressIndicator {}
                        }
                    }
                }
            }
        }
    }
}

/// The status a complaint shows once this page has acted on it.
pub(crate) fn effective_status(complaint: &Complaint, ack: Option<AckAction>) -> ComplaintStatus {
    match ack {
        Some(AckAction::Resolved) => ComplaintStatus::Resolved,
        _ => complaint.status,
    }
}

#[component]
pub(crate) fn ComplaintsPanel(complaints: Vec<Complaint>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Recent Complaints",
            icon: StatIcon::Alert,
            description: "Maintenance and welfare issues",
            div { class: "panel-list",
                for complaint in complaints.into_iter() {
                    {
                        let key = AckLedger::key("complaint", complaint.id);
                        let status = effective_status(&complaint, ack.status(&key));
                        let issue = complaint.issue.clone();
                        let assign = format!("staff assignment for {}", complaint.room);
                        rsx! {
                            div { key: "{complaint.id}", class: "panel-row panel-row-wrap",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{complaint.issue}" }
                                    p { class: "panel-row-meta",
                                        "{complaint.student} • Room {complaint.room} • {format_date_human(&complaint.reported_on)}"
                                    }
                                }
                                div { class: "panel-row-end",
                                    Badge { variant: priority_badge(complaint.priority), "{complaint.priority.label()}" }
                                    Badge { variant: complaint_badge(status), "{status.label()}" }
                                }
                                if status != ComplaintStatus::Resolved {
                                    div { class: "panel-row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            size: ButtonSize::Small,
                                            onclick: move |_| ack.notify(Notice::opening(&assign)),
                                            "Assign Staff"
                                        }
                                        Button {
                                            size: ButtonSize::Small,
                                            onclick: move |_| {
                                                ack.record(
                                                    key.clone(),
                                                    AckAction::Resolved,
                                                    Notice::complaint_resolved(&issue),
                                                )
                                            },
                                            "Mark Resolved"
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Priority;

    fn complaint() -> Complaint {
        Complaint {
            id: 1,
            student: "Anita Sharma".into(),
            room: "B-205".into(),
            issue: "Water supply issue".into(),
            priority: Priority::High,
            status: ComplaintStatus::Pending,
            reported_on: "2024-02-15".into(),
        }
    }

    #[test]
    fn resolution_overrides_sample_status() {
        let c = complaint();
        assert_eq!(effective_status(&c, None), ComplaintStatus::Pending);
        assert_eq!(
            effective_status(&c, Some(AckAction::Resolved)),
            ComplaintStatus::Resolved
        );
        assert_eq!(effective_status(&c, Some(AckAction::Read)), ComplaintStatus::Pending);
    }

    #[test]
    fn occupancy_rows_render_rates() {
        let blocks = vec![BlockOccupancy {
            block: "Block A".into(),
            occupied: 38,
            total: 40,
            rate: 95,
        }];
        let html = dioxus_ssr::render_element(rsx! { OccupancyPanel { blocks } });
        assert!(html.contains("38/40 rooms"));
        assert!(html.contains("95%"));
        assert!(html.contains(r#"data-style="destructive""#));
    }
}
