//! Sample domain records rendered by dashboard panels.
//!
//! These are read-only view-models. Summary figures (fee totals, attendance
//! percentages) are stored as given rather than derived from their parts;
//! the `is_*` checks report whether a record is internally consistent.

use serde::{Deserialize, Serialize};

use crate::stats::StatIcon;
use crate::status::{ComplaintStatus, LeaveStatus, NoticeKind, PaymentStatus, Priority};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectMark {
    pub subject: String,
    pub exam: String,
    pub marks: u32,
    pub total_marks: u32,
    pub grade: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl SubjectMark {
    /// Whole-number percentage, rounded half away from zero.
    pub fn percentage(&self) -> u32 {
        if self.total_marks == 0 {
            return 0;
        }
        (f64::from(self.marks) * 100.0 / f64::from(self.total_marks)).round() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSummary {
    pub present: u32,
    pub total: u32,
    pub percentage: f64,
}

impl AttendanceSummary {
    pub fn absent(&self) -> u32 {
        self.total.saturating_sub(self.present)
    }

    pub fn computed_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.present) * 100.0 / f64::from(self.total)
    }

    /// True when `present <= total` and the stated percentage is within
    /// 0.1 points of the computed one.
    pub fn is_consistent(&self) -> bool {
        self.present <= self.total && (self.computed_percentage() - self.percentage).abs() < 0.1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeSummary {
    pub total: u64,
    pub paid: u64,
    pub pending: u64,
    pub due_date: String,
}

impl FeeSummary {
    pub fn paid_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.paid as f64 * 100.0 / self.total as f64
    }

    /// `paid + pending == total`.
    pub fn is_balanced(&self) -> bool {
        self.paid.checked_add(self.pending) == Some(self.total)
    }
}

/// One installment or monthly fee line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeLine {
    pub label: String,
    pub amount: u64,
    pub status: PaymentStatus,
    pub date: String,
    #[serde(default)]
    pub receipt: Option<String>,
}

/// A timetable period. `detail` holds the teacher for students and the
/// class for faculty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub period: u8,
    pub subject: String,
    pub detail: String,
    pub time: String,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseMaterial {
    pub subject: String,
    pub title: String,
    pub format: String,
    pub uploaded: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostelAssignment {
    pub block: String,
    pub room: String,
    pub roommate: String,
    pub warden: String,
    pub facilities: Vec<String>,
}

impl HostelAssignment {
    pub fn room_label(&self) -> String {
        format!("{}-{}", self.block, self.room)
    }
}

/// A leave application as seen by the student who filed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveApplication {
    pub id: u32,
    pub kind: String,
    pub from: String,
    pub to: String,
    pub reason: String,
    pub status: LeaveStatus,
}

/// A leave request awaiting a faculty member's or warden's decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: u32,
    pub student: String,
    /// Class section or hostel room, depending on who reviews it.
    pub placement: String,
    pub reason: String,
    pub dates: String,
    pub status: LeaveStatus,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub requested_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Complaint {
    pub id: u32,
    pub student: String,
    pub room: String,
    pub issue: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub reported_on: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockOccupancy {
    pub block: String,
    pub occupied: u32,
    pub total: u32,
    pub rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostelSummary {
    pub total_rooms: u32,
    pub occupied_rooms: u32,
    pub available_rooms: u32,
    pub total_students: u32,
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaughtClass {
    pub class_name: String,
    pub section: String,
    pub subject: String,
    pub students: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacultyTask {
    pub id: u32,
    pub task: String,
    pub deadline: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchoolNotification {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub date: String,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingEvent {
    pub title: String,
    pub date: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportCard {
    pub term: String,
    pub percentage: f64,
    pub grade: String,
    pub date: String,
    pub subjects: u32,
}

/// The child a parent account is linked to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildSummary {
    pub name: String,
    pub class_name: String,
    pub section: String,
    pub roll_number: String,
    pub student_id: String,
}

impl ChildSummary {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdmissionApplication {
    pub name: String,
    pub class_name: String,
    pub status: String,
    pub date: String,
}

impl AdmissionApplication {
    /// Anything still waiting on the applicant (documents, payment).
    pub fn is_blocked(&self) -> bool {
        self.status.contains("Pending")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedReport {
    pub title: String,
    pub category: String,
    pub date: String,
}

/// A labelled percentage shown as a progress bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
}

/// One bar of a single-series chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyCount {
    pub month: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeCollectionPoint {
    pub month: String,
    pub collected: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassShare {
    pub label: String,
    pub students: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub icon: StatIcon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_percentage_rounds() {
        let mark = SubjectMark {
            subject: "Science".into(),
            exam: "Mid-term".into(),
            marks: 87,
            total_marks: 90,
            grade: "A".into(),
            date: None,
        };
        assert_eq!(mark.percentage(), 97);
    }

    #[test]
    fn mark_percentage_of_empty_paper_is_zero() {
        let mark = SubjectMark {
            subject: "Art".into(),
            exam: "Practical".into(),
            marks: 0,
            total_marks: 0,
            grade: "-".into(),
            date: None,
        };
        assert_eq!(mark.percentage(), 0);
    }

    #[test]
    fn attendance_consistency() {
        let ok = AttendanceSummary {
            present: 87,
            total: 95,
            percentage: 91.6,
        };
        assert!(ok.is_consistent());
        assert_eq!(ok.absent(), 8);

        let off = AttendanceSummary {
            present: 85,
            total: 100,
            percentage: 90.0,
        };
        assert!(!off.is_consistent());
    }

    #[test]
    fn attendance_absent_never_underflows() {
        let odd = AttendanceSummary {
            present: 10,
            total: 5,
            percentage: 200.0,
        };
        assert_eq!(odd.absent(), 0);
        assert!(!odd.is_consistent());
    }

    #[test]
    fn fee_balance() {
        let fees = FeeSummary {
            total: 25_000,
            paid: 20_000,
            pending: 5_000,
            due_date: "2024-03-15".into(),
        };
        assert!(fees.is_balanced());
        assert_eq!(fees.paid_percentage(), 80.0);

        let short = FeeSummary {
            pending: 4_000,
            ..fees
        };
        assert!(!short.is_balanced());
    }

    #[test]
    fn admission_blocked_when_pending() {
        let mut app = AdmissionApplication {
            name: "Rahul Sharma".into(),
            class_name: "Class 9".into(),
            status: "Documents Pending".into(),
            date: "2024-02-15".into(),
        };
        assert!(app.is_blocked());
        app.status = "Interview Scheduled".into();
        assert!(!app.is_blocked());
    }

    #[test]
    fn hostel_room_label_and_child_initial() {
        let hostel = HostelAssignment {
            block: "A".into(),
            room: "205".into(),
            roommate: "Arjun Kumar".into(),
            warden: "Mr. Rajesh Gupta".into(),
            facilities: vec![],
        };
        assert_eq!(hostel.room_label(), "A-205");

        let child = ChildSummary {
            name: "Priya Sharma".into(),
            class_name: "Class 10".into(),
            section: "A".into(),
            roll_number: "10A25".into(),
            student_id: "STU2024001".into(),
        };
        assert_eq!(child.initial(), "P");
    }
}
