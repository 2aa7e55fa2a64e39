//! Status → badge mappings. Every match is total; anything a status enum
//! does not name has already been folded into its default variant.

use shared_types::{ComplaintStatus, LeaveStatus, PaymentStatus, Priority};
use shared_ui::BadgeVariant;

pub fn leave_badge(status: LeaveStatus) -> BadgeVariant {
    match status {
        LeaveStatus::Approved => BadgeVariant::Success,
        LeaveStatus::Rejected => BadgeVariant::Destructive,
        LeaveStatus::Pending => BadgeVariant::Secondary,
    }
}

pub fn payment_badge(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Paid => BadgeVariant::Success,
        PaymentStatus::Overdue => BadgeVariant::Destructive,
        PaymentStatus::Pending => BadgeVariant::Warning,
    }
}

pub fn priority_badge(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Primary,
        Priority::Low => BadgeVariant::Secondary,
    }
}

pub fn complaint_badge(status: ComplaintStatus) -> BadgeVariant {
    match status {
        ComplaintStatus::Resolved => BadgeVariant::Success,
        ComplaintStatus::InProgress => BadgeVariant::Primary,
        ComplaintStatus::Pending => BadgeVariant::Secondary,
    }
}

/// Occupancy above 90% is critical, above 80% busy.
pub fn occupancy_badge(rate: u32) -> BadgeVariant {
    if rate >= 90 {
        BadgeVariant::Destructive
    } else if rate >= 80 {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Secondary
    }
}

pub fn admission_badge(status: &str) -> BadgeVariant {
    if status.contains("Pending") {
        BadgeVariant::Warning
    } else if status.contains("Scheduled") {
        BadgeVariant::Primary
    } else if status.contains("Approved") || status.contains("Admitted") {
        BadgeVariant::Success
    } else {
        BadgeVariant::Secondary
    }
}

/// Letter grades: A+ and A read as success, B as primary, the rest warn.
pub fn grade_badge(grade: &str) -> BadgeVariant {
    match grade.trim() {
        "A+" | "A" => BadgeVariant::Success,
        "B+" | "B" => BadgeVariant::Primary,
        _ => BadgeVariant::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_mapping() {
        assert_eq!(priority_badge(Priority::High), BadgeVariant::Destructive);
        assert_eq!(priority_badge(Priority::Medium), BadgeVariant::Primary);
        assert_eq!(priority_badge(Priority::from_key("??")), BadgeVariant::Secondary);
    }

    #[test]
    fn occupancy_thresholds() {
        assert_eq!(occupancy_badge(95), BadgeVariant::Destructive);
        assert_eq!(occupancy_badge(90), BadgeVariant::Destructive);
        assert_eq!(occupancy_badge(80), BadgeVariant::Primary);
        assert_eq!(occupancy_badge(70), BadgeVariant::Secondary);
    }

    #[test]
    fn admission_statuses() {
        assert_eq!(admission_badge("Documents Pending"), BadgeVariant::Warning);
        assert_eq!(admission_badge("Interview Scheduled"), BadgeVariant::Primary);
        assert_eq!(admission_badge("Withdrawn"), BadgeVariant::Secondary);
    }

    #[test]
    fn grades() {
        assert_eq!(grade_badge("A+"), BadgeVariant::Success);
        assert_eq!(grade_badge("B"), BadgeVariant::Primary);
        assert_eq!(grade_badge("C"), BadgeVariant::Warning);
    }

    #[test]
    fn leave_and_payment() {
        assert_eq!(leave_badge(LeaveStatus::Pending), BadgeVariant::Secondary);
        assert_eq!(payment_badge(PaymentStatus::Paid), BadgeVariant::Success);
        assert_eq!(complaint_badge(ComplaintStatus::InProgress), BadgeVariant::Primary);
    }
}
