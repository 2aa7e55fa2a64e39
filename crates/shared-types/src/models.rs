use serde::{Deserialize, Serialize};

/// Portal role. Selects which dashboard a session lands on.
///
/// The staff roles (`Faculty`, `Warden`, `Admin`) are reached through the
/// staff sub-selector on the auth screen; `Admin` is presented there as
/// "Manager".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Parent,
    Faculty,
    Warden,
    Admin,
    Admission,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Parent,
        Role::Faculty,
        Role::Warden,
        Role::Admin,
        Role::Admission,
    ];

    /// Parse a stored role key. Returns `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            "faculty" => Some(Role::Faculty),
            "warden" => Some(Role::Warden),
            "admin" | "manager" => Some(Role::Admin),
            "admission" => Some(Role::Admission),
            _ => None,
        }
    }

    /// Parse from a JWT `role` claim. Unknown values default to Student.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Lowercase key used in the demo store, JWT claims and the profiles table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Faculty => "faculty",
            Role::Warden => "warden",
            Role::Admin => "admin",
            Role::Admission => "admission",
        }
    }

    /// Name shown on role cards and in welcome toasts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Faculty => "Faculty",
            Role::Warden => "Warden",
            Role::Admin => "Manager",
            Role::Admission => "Admission",
        }
    }
}

/// Where a session came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SessionSource {
    /// Synthesized on the auth screen and kept in browser storage.
    Demo,
    /// Backed by a signed access token issued by the identity service.
    #[default]
    Issued,
}

/// The signed-in user as far as the presentation layer cares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionIdentity {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub source: SessionSource,
}

/// Display profile for a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Profile {
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

impl Profile {
    /// First whitespace-separated token of the full name.
    pub fn given_name(&self) -> Option<&str> {
        self.full_name.split_whitespace().next()
    }
}

/// Student id attached to the demo student and to the parent's child.
pub const DEMO_STUDENT_ID: &str = "STU2024001";

/// Record written to browser storage when a role card is chosen.
///
/// Stored as JSON under a single key; field names match what the
/// storage key has always held so existing demo sessions keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoIdentity {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl DemoIdentity {
    /// Build the demo record for `role`, stamped with `unix_millis`.
    pub fn for_role(role: Role, unix_millis: i64) -> Self {
        let key = role.as_str();
        Self {
            id: format!("mock-{key}-{unix_millis}"),
            email: format!("{key}@acharya.gov.in"),
            full_name: format!("Demo {}", role.display_name()),
            role,
        }
    }

    pub fn session(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
            source: SessionSource::Demo,
        }
    }

    /// Profile implied by the demo record; no records lookup is needed.
    pub fn profile(&self) -> Profile {
        Profile {
            full_name: self.full_name.clone(),
            role: self.role.as_str().to_string(),
            department: None,
            student_id: matches!(self.role, Role::Student).then(|| DEMO_STUDENT_ID.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keys_roundtrip_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn role_parse_accepts_manager_alias_and_case() {
        assert_eq!(Role::parse("Manager"), Some(Role::Admin));
        assert_eq!(Role::parse(" WARDEN "), Some(Role::Warden));
        assert_eq!(Role::parse("principal"), None);
        assert_eq!(Role::from_str_or_default("principal"), Role::Student);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    }

    #[test]
    fn demo_identity_for_student() {
        let demo = DemoIdentity::for_role(Role::Student, 1_708_000_000_123);
        assert_eq!(demo.id, "mock-student-1708000000123");
        assert_eq!(demo.email, "student@acharya.gov.in");
        assert_eq!(demo.full_name, "Demo Student");
        assert_eq!(demo.role, Role::Student);
    }

    #[test]
    fn demo_admin_is_named_manager() {
        let demo = DemoIdentity::for_role(Role::Admin, 7);
        assert_eq!(demo.id, "mock-admin-7");
        assert_eq!(demo.full_name, "Demo Manager");
    }

    #[test]
    fn demo_identity_json_uses_plain_role_key() {
        let demo = DemoIdentity::for_role(Role::Parent, 42);
        let json = serde_json::to_value(&demo).unwrap();
        assert_eq!(json["role"], "parent");
        assert_eq!(json["full_name"], "Demo Parent");
    }

    #[test]
    fn demo_profile_carries_student_id_only_for_students() {
        let student = DemoIdentity::for_role(Role::Student, 1).profile();
        assert_eq!(student.student_id.as_deref(), Some(DEMO_STUDENT_ID));
        let parent = DemoIdentity::for_role(Role::Parent, 1).profile();
        assert_eq!(parent.student_id, None);
        assert_eq!(parent.role, "parent");
    }

    #[test]
    fn demo_session_is_marked_demo() {
        let session = DemoIdentity::for_role(Role::Warden, 3).session();
        assert_eq!(session.source, SessionSource::Demo);
        assert_eq!(session.role, Role::Warden);
    }

    #[test]
    fn given_name_is_first_token() {
        let profile = Profile {
            full_name: "  Priya   Sharma ".into(),
            role: "parent".into(),
            department: None,
            student_id: None,
        };
        assert_eq!(profile.given_name(), Some("Priya"));
    }

    #[test]
    fn given_name_of_blank_name_is_none() {
        let profile = Profile {
            full_name: "   ".into(),
            role: "student".into(),
            department: None,
            student_id: None,
        };
        assert_eq!(profile.given_name(), None);
    }

    #[test]
    fn profile_deserializes_without_optional_fields() {
        let json = r#"{"full_name": "Meena Joshi", "role": "faculty"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.department, None);
        assert_eq!(profile.student_id, None);
    }
}
