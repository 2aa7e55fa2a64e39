use serde::{Deserialize, Serialize};

/// Urgency of a faculty task or hostel complaint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Unknown keys are treated as low priority.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "high" | "urgent" => Priority::High,
            "medium" | "normal" => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "approved" => LeaveStatus::Approved,
            "rejected" | "declined" => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "paid" => PaymentStatus::Paid,
            "overdue" => PaymentStatus::Overdue,
            _ => PaymentStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "in-progress" | "in_progress" | "in progress" => ComplaintStatus::InProgress,
            "resolved" | "closed" => ComplaintStatus::Resolved,
            _ => ComplaintStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

/// Category of a school notification or calendar event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Exam,
    Fee,
    Event,
    Meeting,
    Holiday,
    #[default]
    Announcement,
}

impl NoticeKind {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "exam" => NoticeKind::Exam,
            "fee" => NoticeKind::Fee,
            "event" => NoticeKind::Event,
            "meeting" => NoticeKind::Meeting,
            "holiday" => NoticeKind::Holiday,
            _ => NoticeKind::Announcement,
        }
    }
}
