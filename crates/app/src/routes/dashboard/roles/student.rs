use shared_types::{
    AttendanceSummary, CourseMaterial, FeeLine, FeeSummary, HostelAssignment, LeaveApplication,
    LeaveStatus, PaymentStatus, Profile, Role, ScheduleEntry, StatColor, StatDescriptor, StatIcon,
    SubjectMark, Trend, DEMO_STUDENT_ID,
};

use super::full_name_or_fallback;
use crate::format_helpers::rupees;
use crate::routes::dashboard::{welcome_heading, DashboardConfig, Panel, SidebarSpec};

/// Below this the attendance tile and panel turn to a warning.
pub const ATTENDANCE_THRESHOLD: f64 = 75.0;

pub fn attendance() -> AttendanceSummary {
    AttendanceSummary {
        present: 85,
        total: 100,
        percentage: 85.0,
    }
}

pub fn marks() -> Vec<SubjectMark> {
    [
        ("Mathematics", 92, "Mid-term", "A+"),
        ("Science", 88, "Mid-term", "A"),
        ("English", 94, "Unit Test", "A+"),
        ("Hindi", 87, "Unit Test", "A"),
        ("Social Studies", 91, "Mid-term", "A+"),
        ("Computer Science", 96, "Unit Test", "A+"),
    ]
    .into_iter()
    .map(|(subject, marks, exam, grade)| SubjectMark {
        subject: subject.into(),
        exam: exam.into(),
        marks,
        total_marks: 100,
        grade: grade.into(),
        date: None,
    })
    .collect()
}

pub fn timetable() -> Vec<ScheduleEntry> {
    [
        (1, "Mathematics", "Mr. Sharma", "09:00 - 09:45", "101"),
        (2, "Science", "Ms. Verma", "09:45 - 10:30", "Lab-1"),
        (3, "English", "Mrs. Gupta", "10:45 - 11:30", "203"),
        (4, "Hindi", "Mr. Singh", "11:30 - 12:15", "105"),
        (5, "Computer Science", "Mr. Patel", "01:00 - 01:45", "Lab-2"),
    ]
    .into_iter()
    .map(|(period, subject, teacher, time, room)| ScheduleEntry {
        period,
        subject: subject.into(),
        detail: teacher.into(),
        time: time.into(),
        room: Some(room.into()),
    })
    .collect()
}

pub fn materials() -> Vec<CourseMaterial> {
    [
        ("Mathematics", "Chapter 5: Algebra", "PDF", "2024-01-15"),
        ("Science", "Physics Lab Manual", "PDF", "2024-01-12"),
        ("English", "Grammar Worksheets", "DOC", "2024-01-10"),
        ("Computer Science", "Programming Basics", "PDF", "2024-01-08"),
    ]
    .into_iter()
    .map(|(subject, title, format, uploaded)| CourseMaterial {
        subject: subject.into(),
        title: title.into(),
        format: format.into(),
        uploaded: uploaded.into(),
    })
    .collect()
}

pub fn fees() -> FeeSummary {
    FeeSummary {
        total: 25_000,
        paid: 20_000,
        pending: 5_000,
        due_date: "2024-03-15".into(),
    }
}

pub fn installments() -> Vec<FeeLine> {
    [
        ("Admission Fee", 5_000, PaymentStatus::Paid, "2024-01-05"),
        ("Tuition Fee Q1", 7_500, PaymentStatus::Paid, "2024-01-15"),
        ("Tuition Fee Q2", 7_500, PaymentStatus::Paid, "2024-02-15"),
        ("Tuition Fee Q3", 5_000, PaymentStatus::Pending, "2024-03-15"),
    ]
    .into_iter()
    .map(|(label, amount, status, date)| FeeLine {
        label: label.into(),
        amount,
        status,
        date: date.into(),
        receipt: None,
    })
    .collect()
}

pub fn hostel() -> HostelAssignment {
    HostelAssignment {
        block: "A".into(),
        room: "205".into(),
        roommate: "Arjun Kumar".into(),
        warden: "Mr. Rajesh Gupta".into(),
        facilities: ["WiFi", "Laundry", "Mess", "Study Hall", "Recreation Room"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

pub fn leaves() -> Vec<LeaveApplication> {
    vec![
        LeaveApplication {
            id: 1,
            kind: "Medical".into(),
            from: "2024-02-20".into(),
            to: "2024-02-22".into(),
            reason: "Fever".into(),
            status: LeaveStatus::Approved,
        },
        LeaveApplication {
            id: 2,
            kind: "Personal".into(),
            from: "2024-03-10".into(),
            to: "2024-03-12".into(),
            reason: "Family function".into(),
            status: LeaveStatus::Pending,
        },
    ]
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let attendance = attendance();
    let fees = fees();
    let hostel = hostel();

    let stats = vec![
        StatDescriptor::new("Attendance Rate", format!("{}%", attendance.percentage), StatIcon::Clock)
            .description("This month")
            .color(StatColor::pick(
                attendance.percentage >= ATTENDANCE_THRESHOLD,
                StatColor::Success,
                StatColor::Warning,
            ))
            .trend(Trend::up(2.1)),
        StatDescriptor::new("Average Grade", "A", StatIcon::Award)
            .description("Current semester")
            .trend(Trend::up(5.2)),
        StatDescriptor::new("Pending Fees", rupees(fees.pending), StatIcon::CreditCard)
            .description("Due March 15")
            .color(StatColor::pick(fees.pending > 0, StatColor::Warning, StatColor::Success)),
        StatDescriptor::new("Hostel Room", hostel.room_label(), StatIcon::Building)
            .description("Block A, 2nd Floor"),
    ];

    let student_id = profile
        .and_then(|p| p.student_id.clone())
        .unwrap_or_else(|| DEMO_STUDENT_ID.to_string());

    let sidebar = SidebarSpec {
        icon: StatIcon::GraduationCap,
        heading: full_name_or_fallback(profile, Role::Student),
        lines: vec!["Class 10-A • Roll: 25".into(), format!("ID: {student_id}")],
        links: vec![
            (StatIcon::BookOpen, "Academic Records"),
            (StatIcon::Calendar, "Timetable"),
            (StatIcon::FileText, "Course Materials"),
            (StatIcon::CreditCard, "Fees & Payments"),
            (StatIcon::Building, "Hostel Info"),
            (StatIcon::Clipboard, "Leave Requests"),
        ],
        contact: None,
    };

    DashboardConfig {
        role: Role::Student,
        header_title: "Student Portal",
        welcome: welcome_heading("Welcome back", profile, Role::Student),
        subtitle: "Here's your academic overview for today".into(),
        stats,
        sidebar: Some(sidebar),
        panels: vec![
            Panel::Timetable {
                entries: timetable(),
                detail_label: "Teacher",
            },
            Panel::Marks {
                marks: marks(),
                show_dates: false,
            },
            Panel::Attendance {
                summary: attendance,
                threshold: ATTENDANCE_THRESHOLD,
            },
            Panel::Materials(materials()),
            Panel::FeeStatus(fees),
            Panel::FeeHistory(installments()),
            Panel::Hostel(hostel),
            Panel::LeaveHistory(leaves()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_figures_agree() {
        assert!(attendance().is_consistent());
        let fees = fees();
        assert!(fees.is_balanced());
        let billed: u64 = installments().iter().map(|line| line.amount).sum();
        assert_eq!(billed, fees.total);
    }

    #[test]
    fn stats_follow_sample_data() {
        let config = config(None);
        let values: Vec<&str> = config.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["85%", "A", "₹5,000", "A-205"]);
        assert_eq!(config.stats[0].color, StatColor::Success);
        assert_eq!(config.stats[1].color, StatColor::Primary);
        assert_eq!(config.stats[2].color, StatColor::Warning);
    }

    #[test]
    fn sidebar_uses_profile_student_id() {
        let profile = Profile {
            full_name: "Aarav Mehta".into(),
            role: "student".into(),
            department: None,
            student_id: Some("STU2024117".into()),
        };
        let config = config(Some(&profile));
        let sidebar = config.sidebar.expect("student has a sidebar");
        assert_eq!(sidebar.heading, "Aarav Mehta");
        assert_eq!(sidebar.lines[1], "ID: STU2024117");
        assert_eq!(config.welcome, "Welcome back, Aarav!");
    }

    #[test]
    fn sidebar_defaults_without_profile() {
        let sidebar = config(None).sidebar.expect("student has a sidebar");
        assert_eq!(sidebar.heading, "Student");
        assert_eq!(sidebar.lines[1], format!("ID: {DEMO_STUDENT_ID}"));
    }
}
