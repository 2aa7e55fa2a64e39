use shared_types::{
    AttendanceSummary, ChildSummary, FeeLine, NoticeKind, PaymentStatus, Profile, ReportCard, Role,
    SchoolNotification, StatColor, StatDescriptor, StatIcon, SubjectMark, Trend, UpcomingEvent,
    DEMO_STUDENT_ID,
};

use super::full_name_or_fallback;
use crate::format_helpers::rupees;
use crate::routes::dashboard::{
    welcome_heading, DashboardConfig, Panel, SchoolContact, SidebarSpec, UNREAD_STAT,
};

/// Parents are warned earlier than students.
pub const ATTENDANCE_THRESHOLD: f64 = 85.0;

pub fn child() -> ChildSummary {
    ChildSummary {
        name: "Priya Sharma".into(),
        class_name: "Class 10".into(),
        section: "A".into(),
        roll_number: "10A25".into(),
        student_id: DEMO_STUDENT_ID.into(),
    }
}

pub fn attendance() -> AttendanceSummary {
    AttendanceSummary {
        present: 87,
        total: 95,
        percentage: 91.6,
    }
}

pub fn marks() -> Vec<SubjectMark> {
    [
        ("Mathematics", 89, "Mid-term", "A", "2024-02-15"),
        ("Science", 92, "Mid-term", "A+", "2024-02-12"),
        ("English", 85, "Unit Test", "A", "2024-02-10"),
        ("Social Studies", 88, "Unit Test", "A", "2024-02-08"),
        ("Hindi", 91, "Mid-term", "A+", "2024-02-05"),
        ("Computer Science", 94, "Practical", "A+", "2024-02-03"),
    ]
    .into_iter()
    .map(|(subject, marks, exam, grade, date)| SubjectMark {
        subject: subject.into(),
        exam: exam.into(),
        marks,
        total_marks: 100,
        grade: grade.into(),
        date: Some(date.into()),
    })
    .collect()
}

pub fn fee_history() -> Vec<FeeLine> {
    [
        ("January 2024", PaymentStatus::Paid, "2024-01-15", Some("RCT001")),
        ("February 2024", PaymentStatus::Paid, "2024-02-10", Some("RCT002")),
        ("March 2024", PaymentStatus::Pending, "2024-03-15", None),
    ]
    .into_iter()
    .map(|(label, status, date, receipt)| FeeLine {
        label: label.into(),
        amount: 8_000,
        status,
        date: date.into(),
        receipt: receipt.map(String::from),
    })
    .collect()
}

pub fn report_cards() -> Vec<ReportCard> {
    vec![
        ReportCard {
            term: "First Term 2024".into(),
            percentage: 87.5,
            grade: "A".into(),
            date: "2024-05-15".into(),
            subjects: 6,
        },
        ReportCard {
            term: "Mid Term 2024".into(),
            percentage: 89.2,
            grade: "A".into(),
            date: "2024-08-20".into(),
            subjects: 6,
        },
    ]
}

pub fn notifications() -> Vec<SchoolNotification> {
    [
        (1, NoticeKind::Exam, "Final Exams Schedule Released", "Final examinations will begin from March 20, 2024", "2024-02-18", false),
        (2, NoticeKind::Fee, "Fee Reminder", "March fee payment due on 15th March", "2024-02-15", false),
        (3, NoticeKind::Event, "Parent-Teacher Meeting", "PTM scheduled for March 5, 2024 at 10:00 AM", "2024-02-12", true),
        (4, NoticeKind::Announcement, "School Holiday", "School will remain closed on March 8th for Holi festival", "2024-02-10", true),
    ]
    .into_iter()
    .map(|(id, kind, title, message, date, read)| SchoolNotification {
        id,
        kind,
        title: title.into(),
        message: message.into(),
        date: date.into(),
        read,
    })
    .collect()
}

pub fn events() -> Vec<UpcomingEvent> {
    [
        ("Final Examinations", "2024-03-20", NoticeKind::Exam),
        ("Parent-Teacher Meeting", "2024-03-05", NoticeKind::Meeting),
        ("Annual Day Celebration", "2024-03-25", NoticeKind::Event),
        ("Summer Vacation Begins", "2024-04-15", NoticeKind::Holiday),
    ]
    .into_iter()
    .map(|(title, date, kind)| UpcomingEvent {
        title: title.into(),
        date: date.into(),
        kind,
    })
    .collect()
}

fn pending_fees(lines: &[FeeLine]) -> u64 {
    lines
        .iter()
        .filter(|line| line.status != PaymentStatus::Paid)
        .map(|line| line.amount)
        .sum()
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let child = child();
    let attendance = attendance();
    let fees = fee_history();
    let notifications = notifications();
    let unread = notifications.iter().filter(|n| !n.read).count();
    let pending = pending_fees(&fees);

    let stats = vec![
        StatDescriptor::new("Attendance Rate", format!("{}%", attendance.percentage), StatIcon::Clock)
            .description(format!("{}/{} days", attendance.present, attendance.total))
            .color(StatColor::pick(
                attendance.percentage >= ATTENDANCE_THRESHOLD,
                StatColor::Success,
                StatColor::Warning,
            ))
            .trend(Trend::up(3.2)),
        StatDescriptor::new("Average Grade", "A", StatIcon::Award)
            .description("Current term")
            .trend(Trend::up(2.1)),
        StatDescriptor::new("Pending Fees", rupees(pending), StatIcon::CreditCard)
            .description("Due March 15")
            .color(StatColor::pick(pending > 0, StatColor::Warning, StatColor::Success)),
        StatDescriptor::new(UNREAD_STAT, unread, StatIcon::Bell).description("Unread messages"),
    ];

    let sidebar = SidebarSpec {
        icon: StatIcon::Users,
        heading: full_name_or_fallback(profile, Role::Parent),
        lines: vec![
            format!("Parent of {}", child.name),
            format!("{} - {}", child.class_name, child.section),
        ],
        links: vec![
            (StatIcon::TrendingUp, "Academic Progress"),
            (StatIcon::Clock, "Attendance Records"),
            (StatIcon::CreditCard, "Fee Management"),
            (StatIcon::FileText, "Report Cards"),
            (StatIcon::Bell, "Notifications"),
            (StatIcon::Users, "Communication"),
        ],
        contact: Some(SchoolContact {
            phone: "+91-98765-43210".into(),
            email: "parent@acharya.gov.in".into(),
        }),
    };

    DashboardConfig {
        role: Role::Parent,
        header_title: "Parent Portal",
        welcome: welcome_heading("Welcome", profile, Role::Parent),
        subtitle: format!("Monitor {}'s academic journey", child.name),
        stats,
        sidebar: Some(sidebar),
        panels: vec![
            Panel::Child(child),
            Panel::Attendance {
                summary: attendance,
                threshold: ATTENDANCE_THRESHOLD,
            },
            Panel::Marks {
                marks: marks(),
                show_dates: true,
            },
            Panel::FeeHistory(fees),
            Panel::ReportCards(report_cards()),
            Panel::Notifications(notifications),
            Panel::Events(events()),
        ],
    }
}
