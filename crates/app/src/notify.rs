//! Transient toast notices.
//!
//! Every user-visible acknowledgment goes through a [`Notice`] so the copy
//! lives in one place and can be checked without a running UI.

use shared_types::Role;
use shared_ui::{ToastOptions, Toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Info,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Info,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: NoticeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn welcome(role: Role) -> Self {
        let name = role.display_name();
        Self::new(format!("Welcome, {name}!"))
            .describe(format!("Accessing your {name} dashboard..."))
            .variant(NoticeVariant::Success)
    }

    pub fn login_error() -> Self {
        Self::new("Login Error")
            .describe("Could not start the demo session. Please try again.")
            .variant(NoticeVariant::Destructive)
    }

    pub fn logged_out() -> Self {
        Self::new("Logged out successfully")
            .describe("You have been signed out of your account.")
            .variant(NoticeVariant::Success)
    }

    pub fn leave_approved(student: &str) -> Self {
        Self::new("Leave Approved")
            .describe(format!("Leave request for {student} has been approved."))
            .variant(NoticeVariant::Success)
    }

    pub fn leave_rejected(student: &str) -> Self {
        Self::new("Leave Rejected")
            .describe(format!("Leave request for {student} has been rejected."))
            .variant(NoticeVariant::Destructive)
    }

    pub fn leave_submitted() -> Self {
        Self::new("Leave Request Submitted")
            .describe("Your leave request has been sent for approval.")
            .variant(NoticeVariant::Success)
    }

    pub fn complaint_resolved(issue: &str) -> Self {
        Self::new("Complaint Resolved")
            .describe(format!("\"{issue}\" has been marked as resolved."))
            .variant(NoticeVariant::Success)
    }

    pub fn download_started(what: &str) -> Self {
        Self::new("Download Started").describe(format!("Downloading {what}..."))
    }

    pub fn notification_read() -> Self {
        Self::new("Marked as read")
    }

    pub fn admission_approved(applicant: &str) -> Self {
        Self::new("Admission Approved")
            .describe(format!("Admission for {applicant} has been approved."))
            .variant(NoticeVariant::Success)
    }

    pub fn submitted(what: &str) -> Self {
        Self::new(format!("{what} Submitted"))
            .describe("Your entry has been recorded for this session.")
            .variant(NoticeVariant::Success)
    }

    pub fn opening(what: &str) -> Self {
        Self::new(what.to_string()).describe(format!("Opening {what}..."))
    }

    pub fn show(&self, toasts: &Toasts) {
        let mut options = ToastOptions::new();
        if let Some(description) = &self.description {
            options = options.description(description.clone());
        }
        let title = self.title.clone();
        match self.variant {
            NoticeVariant::Info => toasts.info(title, options),
            NoticeVariant::Success => toasts.success(title, options),
            NoticeVariant::Destructive => toasts.error(title, options),
        }
    }
}
