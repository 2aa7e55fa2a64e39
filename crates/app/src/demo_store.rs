//! Storage for the demo identity written by the role-selection screen.
//!
//! The record lives under a single key as JSON. In the browser that key is
//! in `localStorage`; everywhere else (SSR, native shells, tests) an
//! in-memory slot stands in so the same flows can run unchanged.

use std::cell::RefCell;
use std::rc::Rc;

use shared_types::{AppError, DemoIdentity};

/// Key the demo identity is stored under.
pub const DEMO_STORE_KEY: &str = "mockUser";

/// Read/write access to the demo identity record.
pub trait IdentityStore {
    /// The stored identity, if any. A record that fails to parse is
    /// treated as absent.
    fn load(&self) -> Result<Option<DemoIdentity>, AppError>;
    fn save(&self, identity: &DemoIdentity) -> Result<(), AppError>;
    /// Remove the record. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), AppError>;
}

fn decode(raw: &str) -> Option<DemoIdentity> {
    match serde_json::from_str(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::warn!(error = %e, key = DEMO_STORE_KEY, "discarding unreadable demo identity");
            None
        }
    }
}

fn encode(identity: &DemoIdentity) -> Result<String, AppError> {
    serde_json::to_string(identity)
        .map_err(|e| AppError::storage(format!("could not encode demo identity: {e}")))
}

/// Process-local store. Used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw value, bypassing encoding.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> Result<Option<DemoIdentity>, AppError> {
        Ok(self.slot.borrow().as_deref().and_then(decode))
    }

    fn save(&self, identity: &DemoIdentity) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(encode(identity)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// `window.localStorage`, available only in the web build.
#[cfg(feature = "web")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "web")]
impl BrowserStore {
    /// `None` when there is no window or storage is blocked (private mode,
    /// sandboxed iframe).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "web")]
impl IdentityStore for BrowserStore {
    fn load(&self) -> Result<Option<DemoIdentity>, AppError> {
        let raw = self
            .storage
            .get_item(DEMO_STORE_KEY)
            .map_err(|_| AppError::storage("localStorage read failed"))?;
        Ok(raw.as_deref().and_then(decode))
    }

    fn save(&self, identity: &DemoIdentity) -> Result<(), AppError> {
        let raw = encode(identity)?;
        self.storage
            .set_item(DEMO_STORE_KEY, &raw)
            .map_err(|_| AppError::storage("localStorage write failed"))
    }

    fn clear(&self) -> Result<(), AppError> {
        self.storage
            .remove_item(DEMO_STORE_KEY)
            .map_err(|_| AppError::storage("localStorage remove failed"))
    }
}

/// The store for the current platform.
pub fn platform_store() -> Rc<dyn IdentityStore> {
    #[cfg(feature = "web")]
    {
        if let Some(store) = BrowserStore::open() {
            return Rc::new(store);
        }
        tracing::warn!("localStorage unavailable; demo identity will not survive a reload");
    }
    Rc::new(MemoryStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Role;

    #[test]
    fn empty_store_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saved_identity_loads_back() {
        let store = MemoryStore::new();
        let demo = DemoIdentity::for_role(Role::Faculty, 1_700_000_000_000);
        store.save(&demo).unwrap();
        assert_eq!(store.load().unwrap(), Some(demo));
    }

    #[test]
    fn stored_json_has_the_four_record_fields() {
        let store = MemoryStore::new();
        store
            .save(&DemoIdentity::for_role(Role::Student, 5))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "full_name", "id", "role"]);
    }

    #[test]
    fn corrupt_record_is_treated_as_absent() {
        let store = MemoryStore::with_raw("{not json");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn record_with_unknown_role_is_treated_as_absent() {
        let store = MemoryStore::with_raw(
            r#"{"id":"x","email":"x@y","full_name":"X","role":"principal"}"#,
        );
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save(&DemoIdentity::for_role(Role::Parent, 1)).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.raw(), None);
    }
}
