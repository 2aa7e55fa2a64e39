//! Page-local record of acknowledgment actions.
//!
//! Approving a leave request or resolving a complaint does not change the
//! sample data: the entry stays in its list and the ledger remembers what
//! was done to it so the row can show it. The ledger is dropped with the
//! page.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckAction {
    Approved,
    Rejected,
    Resolved,
    Read,
    Reviewed,
    Downloaded,
    Submitted,
}

impl AckAction {
    pub fn label(&self) -> &'static str {
        match self {
            AckAction::Approved => "Approved",
            AckAction::Rejected => "Rejected",
            AckAction::Resolved => "Resolved",
            AckAction::Read => "Read",
            AckAction::Reviewed => "Reviewed",
            AckAction::Downloaded => "Downloaded",
            AckAction::Submitted => "Submitted",
        }
    }
}

/// What has been acknowledged on this page, keyed by `"{kind}:{id}"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AckLedger {
    latest: HashMap<String, AckAction>,
}

impl AckLedger {
    pub fn key(kind: &str, id: impl std::fmt::Display) -> String {
        format!("{kind}:{id}")
    }

    /// Record `action` against `key`. The newest action for a key wins.
    pub fn record(&mut self, key: impl Into<String>, action: AckAction) {
        self.latest.insert(key.into(), action);
    }

    pub fn get(&self, key: &str) -> Option<AckAction> {
        self.latest.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.latest.contains_key(key)
    }
}
