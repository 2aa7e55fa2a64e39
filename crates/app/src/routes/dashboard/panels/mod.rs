//! Panel rendering. [`PanelView`] is the only entry point; each arm hands
//! its records to a component in one of the submodules.

mod academic;
mod admin;
mod finance;
mod forms;
mod hostel;
mod notices;
mod requests;

pub(crate) use notices::unread_count;

use dioxus::prelude::*;
use shared_types::StatIcon;
use shared_ui::{use_toast, Card, CardContent, CardTone, CardDescription, CardHeader, CardTitle, Toasts};

use super::Panel;
use crate::acknowledgments::{AckAction, AckLedger};
use crate::components::Glyph;
use crate::notify::Notice;

/// Page-local acknowledgment: record what was done and tell the user.
#[derive(Clone, Copy)]
pub(crate) struct Acknowledger {
    ledger: Signal<AckLedger>,
    toasts: Toasts,
}

impl Acknowledger {
    pub fn record(mut self, key: String, action: AckAction, notice: Notice) {
        self.ledger.write().record(key, action);
        notice.show(&self.toasts);
    }

    /// Toast without recording anything, for actions with no row to mark.
    pub fn notify(&self, notice: Notice) {
        notice.show(&self.toasts);
    }

    pub fn status(&self, key: &str) -> Option<AckAction> {
        self.ledger.read().get(key)
    }
}

pub(crate) fn use_acknowledger() -> Acknowledger {
    Acknowledger {
        ledger: use_context::<Signal<AckLedger>>(),
        toasts: use_toast(),
    }
}

/// Titled card every panel sits in.
#[component]
pub(crate) fn PanelCard(
    title: String,
    #[props(default)] icon: Option<StatIcon>,
    #[props(default)] description: Option<String>,
    #[props(default)] wide: bool,
    #[props(default)] tone: CardTone,
    children: Element,
) -> Element {
    rsx! {
        Card { tone, class: if wide { "panel panel-wide" } else { "panel" },
            CardHeader {
                CardTitle { class: "panel-title",
                    if let Some(icon) = icon {
                        Glyph { icon, size: 18 }
                    }
                    span { "{title}" }
                }
                if let Some(description) = description {
                    CardDescription { "{description}" }
                }
            }
            CardContent { class: "panel-body", {children} }
        }
    }
}

#[component]
pub fn PanelView(panel: Panel) -> Element {
    match panel {
        Panel::Attendance { summary, threshold } => rsx! { academic::AttendancePanel { summary, threshold } },
        Panel::Marks { marks, show_dates } => rsx! { academic::MarksPanel { marks, show_dates } },
        Panel::Timetable { entries, detail_label } => rsx! { academic::TimetablePanel { entries, detail_label } },
        Panel::Materials(materials) => rsx! { academic::MaterialsPanel { materials } },
        Panel::ReportCards(reports) => rsx! { academic::ReportCardsPanel { reports } },
        Panel::Classes(classes) => rsx! { academic::ClassesPanel { classes } },
        Panel::Tasks(tasks) => rsx! { academic::TasksPanel { tasks } },
        Panel::FeeStatus(summary) => rsx! { finance::FeeStatusPanel { summary } },
        Panel::FeeHistory(lines) => rsx! { finance::FeeHistoryPanel { lines } },
        Panel::Hostel(assignment) => rsx! { hostel::HostelPanel { assignment } },
        Panel::Occupancy(blocks) => rsx! { hostel::OccupancyPanel { blocks } },
        Panel::Complaints(complaints) => rsx! { hostel::ComplaintsPanel { complaints } },
        Panel::LeaveHistory(applications) => rsx! { requests::LeaveHistoryPanel { applications } },
        Panel::LeaveApprovals { title, requests } => rsx! { requests::LeaveApprovalsPanel { title, requests } },
        Panel::Notifications(notifications) => rsx! { notices::NotificationsPanel { notifications } },
        Panel::Events(events) => rsx! { notices::EventsPanel { events } },
        Panel::Child(child) => rsx! { notices::ChildPanel { child } },
        Panel::Application(application) => rsx! { notices::ApplicationPanel { application } },
        Panel::AttendanceForm => rsx! { forms::AttendanceForm {} },
        Panel::MaterialUpload => rsx! { forms::MaterialUploadForm {} },
        Panel::RoomAllocation => rsx! { forms::RoomAllocationForm {} },
        Panel::IssueReport => rsx! { forms::IssueReportForm {} },
        Panel::Kpis(kpis) => rsx! { admin::KpiPanel { kpis } },
        Panel::MonthlyAdmissions(points) => rsx! { admin::AdmissionsChart { points } },
        Panel::FeeCollection(points) => rsx! { admin::FeeCollectionChart { points } },
        Panel::ClassDistribution(shares) => rsx! { admin::ClassDistributionPanel { shares } },
        Panel::PendingAdmissions(applications) => rsx! { admin::PendingAdmissionsPanel { applications } },
        Panel::Reports(reports) => rsx! { admin::ReportsPanel { reports } },
        Panel::QuickActions(actions) => rsx! { admin::QuickActionsPanel { actions } },
    }
}
