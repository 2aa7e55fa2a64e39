//! Per-role dashboard configurations and their sample data.

pub mod admin;
pub mod admission;
pub mod faculty;
pub mod parent;
pub mod student;
pub mod warden;

use shared_types::{Profile, Role};

use super::fallback_name;

/// Full name for sidebar headings, or the role's fallback.
pub(crate) fn full_name_or_fallback(profile: Option<&Profile>, role: Role) -> String {
    profile
        .map(|p| p.full_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback_name(role))
        .to_string()
}
