//! Applicant view. Built from the same panels the other roles use.

use shared_types::{
    AdmissionApplication, NoticeKind, Profile, Role, SchoolNotification, StatColor,
    StatDescriptor, StatIcon, UpcomingEvent,
};

use crate::format_helpers::format_date_human;
use crate::routes::dashboard::{welcome_heading, DashboardConfig, Panel};

/// Documents the office needs before an application can be reviewed.
pub const REQUIRED_DOCUMENTS: [&str; 4] = [
    "Birth certificate",
    "Transfer certificate",
    "Previous marksheet",
    "Address proof",
];

pub const DOCUMENTS_RECEIVED: usize = 2;

pub fn application(profile: Option<&Profile>) -> AdmissionApplication {
    let name = profile
        .map(|p| p.full_name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or("Applicant");
    AdmissionApplication {
        name: name.to_string(),
        class_name: "Class 9".into(),
        status: "Documents Pending".into(),
        date: "2024-02-15".into(),
    }
}

pub fn updates() -> Vec<SchoolNotification> {
    vec![
        SchoolNotification {
            id: 1,
            kind: NoticeKind::Announcement,
            title: "Application Received".into(),
            message: "Your application for Class 9 has been registered.".into(),
            date: "2024-02-15".into(),
            read: true,
        },
        SchoolNotification {
            id: 2,
            kind: NoticeKind::Exam,
            title: "Entrance Assessment".into(),
            message: "The entrance assessment is on March 2, 2024 at 9:00 AM.".into(),
            date: "2024-02-16".into(),
            read: false,
        },
    ]
}

pub fn events() -> Vec<UpcomingEvent> {
    [
        ("Document Submission Deadline", "2024-02-28", NoticeKind::Fee),
        ("Entrance Assessment", "2024-03-02", NoticeKind::Exam),
        ("Parent Interview", "2024-03-09", NoticeKind::Meeting),
    ]
    .into_iter()
    .map(|(title, date, kind)| UpcomingEvent {
        title: title.into(),
        date: date.into(),
        kind,
    })
    .collect()
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let application = application(profile);
    let events = events();
    let next = events
        .first()
        .map(|e| format_date_human(&e.date))
        .unwrap_or_default();

    let stats = vec![
        StatDescriptor::new("Application Status", "Under Review", StatIcon::Clipboard)
            .description(application.status.clone())
            .color(StatColor::pick(application.is_blocked(), StatColor::Warning, StatColor::Success)),
        StatDescriptor::new(
            "Documents",
            format!("{DOCUMENTS_RECEIVED}/{}", REQUIRED_DOCUMENTS.len()),
            StatIcon::FileText,
        )
        .description("Submitted"),
        StatDescriptor::new("Applying For", application.class_name.clone(), StatIcon::GraduationCap)
            .description("Session 2024-25"),
        StatDescriptor::new("Next Deadline", next, StatIcon::Calendar).description("Documents due"),
    ];

    DashboardConfig {
        role: Role::Admission,
        header_title: "Admission Portal",
        welcome: welcome_heading("Welcome", profile, Role::Admission),
        subtitle: "Track your admission application".into(),
        stats,
        sidebar: None,
        panels: vec![
            Panel::Application(application),
            Panel::Notifications(updates()),
            Panel::Events(events),
        ],
    }
}
