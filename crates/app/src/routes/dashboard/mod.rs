//! The `/dashboard` route.
//!
//! One renderer serves every role. The mount resolves the session, then
//! [`config_for`] picks the role's [`DashboardConfig`] and [`DashboardView`]
//! draws it: welcome header, stat grid, and the role's panels in order.

mod layout;
mod panels;
mod roles;
mod stat_grid;

use dioxus::prelude::*;
use shared_types::{
    AdmissionApplication, AttendanceSummary, BlockOccupancy, ChildSummary, ClassShare, Complaint,
    CourseMaterial, FacultyTask, FeeCollectionPoint, FeeLine, FeeSummary, GeneratedReport,
    HostelAssignment, Kpi, LeaveApplication, LeaveRequest, MonthlyCount, Profile, QuickAction,
    ReportCard, Role, ScheduleEntry, SchoolNotification, SessionIdentity, StatDescriptor, StatIcon,
    SubjectMark, TaughtClass, UpcomingEvent,
};
use shared_ui::Spinner;

use crate::acknowledgments::AckLedger;
use crate::session::{use_dashboard_mount, DashboardSession, MountState};
use layout::DashboardLayout;
use panels::{unread_count, PanelView};
use stat_grid::StatGrid;

/// Title of the stat tile that mirrors the Notifications panel's unread count.
pub const UNREAD_STAT: &str = "Notifications";

/// Everything one role's dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub role: Role,
    /// Shown in the layout header.
    pub header_title: &'static str,
    pub welcome: String,
    pub subtitle: String,
    pub stats: Vec<StatDescriptor>,
    pub sidebar: Option<SidebarSpec>,
    pub panels: Vec<Panel>,
}

/// Identity card and section links for the side column.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSpec {
    pub icon: StatIcon,
    pub heading: String,
    pub lines: Vec<String>,
    pub links: Vec<(StatIcon, &'static str)>,
    pub contact: Option<SchoolContact>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolContact {
    pub phone: String,
    pub email: String,
}

/// A dashboard panel. The renderer matches on this exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Attendance {
        summary: AttendanceSummary,
        /// Below this percentage the panel shows a warning.
        threshold: f64,
    },
    Marks {
        marks: Vec<SubjectMark>,
        show_dates: bool,
    },
    Timetable {
        entries: Vec<ScheduleEntry>,
        detail_label: &'static str,
    },
    Materials(Vec<CourseMaterial>),
    FeeStatus(FeeSummary),
    FeeHistory(Vec<FeeLine>),
    Hostel(HostelAssignment),
    LeaveHistory(Vec<LeaveApplication>),
    ReportCards(Vec<ReportCard>),
    Notifications(Vec<SchoolNotification>),
    Events(Vec<UpcomingEvent>),
    Child(ChildSummary),
    Classes(Vec<TaughtClass>),
    Tasks(Vec<FacultyTask>),
    LeaveApprovals {
        title: &'static str,
        requests: Vec<LeaveRequest>,
    },
    AttendanceForm,
    MaterialUpload,
    Occupancy(Vec<BlockOccupancy>),
    Complaints(Vec<Complaint>),
    RoomAllocation,
    IssueReport,
    Kpis(Vec<Kpi>),
    MonthlyAdmissions(Vec<MonthlyCount>),
    FeeCollection(Vec<FeeCollectionPoint>),
    ClassDistribution(Vec<ClassShare>),
    PendingAdmissions(Vec<AdmissionApplication>),
    Reports(Vec<GeneratedReport>),
    QuickActions(Vec<QuickAction>),
    Application(AdmissionApplication),
}

/// Name used in the welcome line when the profile has none.
pub fn fallback_name(role: Role) -> &'static str {
    match role {
        Role::Student => "Student",
        Role::Parent => "Parent",
        Role::Faculty => "Professor",
        Role::Warden => "Warden",
        Role::Admin => "Administrator",
        Role::Admission => "Applicant",
    }
}

/// `"{greeting}, {given name}!"`, falling back to the role's default name.
pub fn welcome_heading(greeting: &str, profile: Option<&Profile>, role: Role) -> String {
    let name = profile
        .and_then(Profile::given_name)
        .unwrap_or_else(|| fallback_name(role));
    format!("{greeting}, {name}!")
}

/// Configuration for `identity`'s role.
pub fn config_for(identity: &SessionIdentity, profile: Option<&Profile>) -> DashboardConfig {
    match identity.role {
        Role::Student => roles::student::config(profile),
        Role::Parent => roles::parent::config(profile),
        Role::Faculty => roles::faculty::config(profile),
        Role::Warden => roles::warden::config(profile),
        Role::Admin => roles::admin::config(profile),
        Role::Admission => roles::admission::config(profile),
    }
}

/// `config`'s stats with the unread tile recounted against `ledger`, so it
/// agrees with the Notifications panel after a mark-read.
pub fn live_stats(config: &DashboardConfig, ledger: &AckLedger) -> Vec<StatDescriptor> {
    let mut stats = config.stats.clone();
    let notifications = config.panels.iter().find_map(|panel| match panel {
        Panel::Notifications(list) => Some(list),
        _ => None,
    });
    if let Some(list) = notifications {
        let unread = unread_count(list, ledger).to_string();
        for stat in stats.iter_mut().filter(|s| s.title == UNREAD_STAT) {
            stat.value = unread.clone();
        }
    }
    stats
}

/// Route component: mount, then render or step aside.
#[component]
pub fn Dashboard() -> Element {
    let mount = use_dashboard_mount();
    rsx! { MountedDashboard { state: mount() } }
}

/// What the route shows for each mount state. A redirected mount renders
/// nothing while the navigation lands.
#[component]
fn MountedDashboard(state: MountState) -> Element {
    match state {
        MountState::Loading => rsx! {
            div { class: "dashboard-loading",
                Spinner { label: "Loading dashboard..." }
            }
        },
        MountState::Redirected => rsx! {},
        MountState::Ready(session) => rsx! { DashboardPage { session } },
    }
}

#[component]
fn DashboardPage(session: DashboardSession) -> Element {
    let config = config_for(&session.identity, session.profile.as_ref());

    rsx! {
        DashboardLayout {
            title: config.header_title.to_string(),
            identity: session.identity.clone(),
            profile: session.profile.clone(),
            sidebar: config.sidebar.clone(),
            DashboardView { config }
        }
    }
}

/// Welcome header, stat grid, panels. Owns the page's acknowledgment
/// ledger, so every action taken here is forgotten on remount.
#[component]
pub fn DashboardView(config: DashboardConfig) -> Element {
    let ledger = use_context_provider(|| Signal::new(AckLedger::default()));
    let stats = live_stats(&config, &ledger.read());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page", "data-role": config.role.as_str(),
            div { class: "dashboard-welcome",
                h2 { class: "dashboard-welcome-title", "{config.welcome}" }
                p { class: "dashboard-welcome-subtitle", "{config.subtitle}" }
            }

            StatGrid { stats }

            div { class: "dashboard-panels",
                for (index, panel) in config.panels.iter().enumerate() {
                    PanelView { key: "{index}", panel: panel.clone() }
                }
            }
        }
    }
}
