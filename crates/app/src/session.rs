//! Session resolution for pages.
//!
//! Pages never look at storage or cookies directly. They ask the
//! [`SessionContext`] for a provider, and the provider answers "who is
//! signed in" by consulting the demo store first and the issued session
//! second.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{AppError, Profile, SessionIdentity};

use crate::demo_store::{platform_store, IdentityStore};
use crate::routes::Route;

/// A signed-in identity plus whatever profile came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    pub identity: SessionIdentity,
    /// Demo identities carry their own profile; issued sessions do not.
    pub profile_hint: Option<Profile>,
}

/// Source of the current session.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn current(&self) -> Result<Option<ResolvedSession>, AppError>;
    /// End the session. Ending an absent session succeeds.
    async fn sign_out(&self) -> Result<(), AppError>;
}

/// Looks up display profiles by identity id.
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn profile(&self, user_id: &str) -> Result<Profile, AppError>;
}

/// Identity chosen on the role-selection screen.
#[derive(Clone)]
pub struct DemoProvider {
    store: Rc<dyn IdentityStore>,
}

impl DemoProvider {
    pub fn new(store: Rc<dyn IdentityStore>) -> Self {
        Self { store }
    }
}

impl IdentityProvider for DemoProvider {
    async fn current(&self) -> Result<Option<ResolvedSession>, AppError> {
        Ok(self.store.load()?.map(|demo| ResolvedSession {
            identity: demo.session(),
            profile_hint: Some(demo.profile()),
        }))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.store.clear()
    }
}

fn collaborator_error(err: ServerFnError) -> AppError {
    let text = err.to_string();
    AppError::from_server_error(&text).unwrap_or_else(|| AppError::unavailable(text))
}

/// Session issued by the identity service, read through server functions.
#[derive(Clone, Copy, Default)]
pub struct RealSessionProvider;

impl IdentityProvider for RealSessionProvider {
    async fn current(&self) -> Result<Option<ResolvedSession>, AppError> {
        let identity = server::api::get_session()
            .await
            .map_err(collaborator_error)?;
        Ok(identity.map(|identity| ResolvedSession {
            identity,
            profile_hint: None,
        }))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        server::api::sign_out().await.map_err(collaborator_error)
    }
}

/// Profile lookups against the records service.
#[derive(Clone, Copy, Default)]
pub struct RecordsProfiles;

impl ProfileSource for RecordsProfiles {
    async fn profile(&self, user_id: &str) -> Result<Profile, AppError> {
        server::api::get_profile(user_id.to_string())
            .await
            .map_err(collaborator_error)
    }
}

/// Asks `first`, then `second` when `first` has nothing.
///
/// A failing `first` is logged and skipped; `second` decides.
#[derive(Clone)]
pub struct Composed<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: IdentityProvider, B: IdentityProvider> IdentityProvider for Composed<A, B> {
    async fn current(&self) -> Result<Option<ResolvedSession>, AppError> {
        match self.first.current().await {
            Ok(Some(session)) => return Ok(Some(session)),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "primary identity provider failed"),
        }
        self.second.current().await
    }

    /// Both providers are always asked to sign out; the first error wins.
    async fn sign_out(&self) -> Result<(), AppError> {
        let first = self.first.sign_out().await;
        let second = self.second.sign_out().await;
        first.and(second)
    }
}

pub type PortalProvider = Composed<DemoProvider, RealSessionProvider>;

/// Per-app session wiring, provided once at the root.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn IdentityStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Context backed by the platform's demo store.
    pub fn browser() -> Self {
        Self::new(platform_store())
    }

    pub fn store(&self) -> Rc<dyn IdentityStore> {
        self.store.clone()
    }

    /// Session issued by the identity service, ignoring any demo record.
    pub fn issued(&self) -> RealSessionProvider {
        RealSessionProvider
    }

    /// Demo record first, issued session second.
    pub fn provider(&self) -> PortalProvider {
        Composed {
            first: DemoProvider::new(self.store.clone()),
            second: RealSessionProvider,
        }
    }
}

pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>()
}

/// What a dashboard has learned about its viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSession {
    pub identity: SessionIdentity,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MountState {
    Loading,
    Ready(DashboardSession),
    /// No session; the page has navigated away.
    Redirected,
}

/// Where a dashboard in `state` sends its viewer, if anywhere.
pub fn redirect_for(state: &MountState) -> Option<Route> {
    match state {
        MountState::Redirected => Some(Route::Auth {}),
        MountState::Loading | MountState::Ready(_) => None,
    }
}

/// Where the role-selection screen sends a visitor who already holds a
/// session. A failed check keeps them on the screen.
pub async fn existing_session_route(provider: &impl IdentityProvider) -> Option<Route> {
    match provider.current().await {
        Ok(Some(_)) => Some(Route::Dashboard {}),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "session check failed on the role screen");
            None
        }
    }
}

/// The two awaits of a dashboard mount: session, then profile.
///
/// A missing or unreadable session redirects. A profile lookup failure is
/// logged and the page still becomes ready, without a profile.
pub async fn resolve_mount(
    provider: &impl IdentityProvider,
    profiles: &impl ProfileSource,
) -> MountState {
    let resolved = match provider.current().await {
        Ok(Some(resolved)) => resolved,
        Ok(None) => return MountState::Redirected,
        Err(e) => {
            tracing::warn!(error = %e, "session check failed; treating as signed out");
            return MountState::Redirected;
        }
    };

    let profile = match resolved.profile_hint {
        Some(profile) => Some(profile),
        None => match profiles.profile(&resolved.identity.id).await {
            Ok(profile) => Some(profile),
            Err(e) if e.kind.is_degradable() => {
                tracing::warn!(
                    user = %resolved.identity.id,
                    error = %e,
                    "profile lookup failed; using role labels"
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    user = %resolved.identity.id,
                    error = %e,
                    "profile lookup rejected; using role labels"
                );
                None
            }
        },
    };

    MountState::Ready(DashboardSession {
        identity: resolved.identity,
        profile,
    })
}

/// End the session through every provider and return the page to show
/// next. Always succeeds from the caller's point of view; provider errors
/// are logged.
pub async fn end_session(provider: &impl IdentityProvider) -> Route {
    match provider.sign_out().await {
        Ok(()) => tracing::info!("signed out"),
        Err(e) => tracing::warn!(error = %e, "sign-out was incomplete"),
    }
    Route::Auth {}
}

/// Run the mount sequence once per component instance.
///
/// The work runs as a single task started after the first client render
/// and cancelled when the component unmounts, so a late answer never
/// writes into a page that is gone.
pub fn use_dashboard_mount() -> Signal<MountState> {
    let ctx = use_session_context();
    let nav = navigator();
    let mut state = use_signal(|| MountState::Loading);
    let task_slot = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let slot = task_slot.clone();
    use_effect(move || {
        let provider = ctx.provider();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        let task = spawn(async move {
            let next = resolve_mount(&provider, &RecordsProfiles).await;
            if let Some(route) = redirect_for(&next) {
                nav.replace(route);
            }
            state.set(next);
        });
        slot.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = task_slot.take() {
            task.cancel();
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use shared_types::{DemoIdentity, Role, SessionSource};
    use std::cell::RefCell;

    /// Issued-session stand-in with a fixed answer.
    #[derive(Clone, Default)]
    struct FixedSession {
        identity: Option<SessionIdentity>,
        fail: bool,
        sign_outs: Rc<Cell<u32>>,
    }

    impl IdentityProvider for FixedSession {
        async fn current(&self) -> Result<Option<ResolvedSession>, AppError> {
            if self.fail {
                return Err(AppError::unavailable("identity service down"));
            }
            Ok(self.identity.clone().map(|identity| ResolvedSession {
                identity,
                profile_hint: None,
            }))
        }

        async fn sign_out(&self) -> Result<(), AppError> {
            self.sign_outs.set(self.sign_outs.get() + 1);
            Ok(())
        }
    }

    /// Records service stand-in that remembers which ids were asked for.
    #[derive(Default)]
    struct Profiles {
        answer: Option<Profile>,
        asked: RefCell<Vec<String>>,
    }

    impl ProfileSource for Profiles {
        async fn profile(&self, user_id: &str) -> Result<Profile, AppError> {
            self.asked.borrow_mut().push(user_id.to_string());
            self.answer
                .clone()
                .ok_or_else(|| AppError::not_found("Profile not found"))
        }
    }

    fn issued(id: &str, role: Role) -> SessionIdentity {
        SessionIdentity {
            id: id.into(),
            email: format!("{id}@acharya.gov.in"),
            role,
            source: SessionSource::Issued,
        }
    }

    fn composed(store: &Rc<MemoryStore>, real: FixedSession) -> Composed<DemoProvider, FixedSession> {
        Composed {
            first: DemoProvider::new(store.clone()),
            second: real,
        }
    }

    #[tokio::test]
    async fn no_session_anywhere_redirects() {
        let store = Rc::new(MemoryStore::new());
        let provider = composed(&store, FixedSession::default());
        let profiles = Profiles::default();

        let state = resolve_mount(&provider, &profiles).await;

        assert_eq!(state, MountState::Redirected);
        assert!(profiles.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn failing_identity_service_redirects() {
        let store = Rc::new(MemoryStore::new());
        let provider = composed(
            &store,
            FixedSession {
                fail: true,
                ..Default::default()
            },
        );

        let state = resolve_mount(&provider, &Profiles::default()).await;

        assert_eq!(state, MountState::Redirected);
    }

    #[tokio::test]
    async fn demo_identity_wins_and_skips_profile_lookup() {
        let store = Rc::new(MemoryStore::new());
        let demo = DemoIdentity::for_role(Role::Parent, 42);
        store.save(&demo).unwrap();
        let provider = composed(
            &store,
            FixedSession {
                identity: Some(issued("real-user", Role::Admin)),
                ..Default::default()
            },
        );
        let profiles = Profiles::default();

        let state = resolve_mount(&provider, &profiles).await;

        let MountState::Ready(session) = state else {
            panic!("expected a ready mount");
        };
        assert_eq!(session.identity.id, "mock-parent-42");
        assert_eq!(session.identity.source, SessionSource::Demo);
        assert_eq!(session.profile, Some(demo.profile()));
        assert!(profiles.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn issued_session_fetches_profile_by_identity_id() {
        let store = Rc::new(MemoryStore::new());
        let provider = composed(
            &store,
            FixedSession {
                identity: Some(issued("u-77", Role::Faculty)),
                ..Default::default()
            },
        );
        let profile = Profile {
            full_name: "Meena Joshi".into(),
            role: "faculty".into(),
            department: Some("Mathematics".into()),
            student_id: None,
        };
        let profiles = Profiles {
            answer: Some(profile.clone()),
            ..Default::default()
        };

        let state = resolve_mount(&provider, &profiles).await;

        assert_eq!(
            state,
            MountState::Ready(DashboardSession {
                identity: issued("u-77", Role::Faculty),
                profile: Some(profile),
            })
        );
        assert_eq!(*profiles.asked.borrow(), vec!["u-77".to_string()]);
    }

    #[tokio::test]
    async fn profile_failure_still_reaches_ready() {
        let store = Rc::new(MemoryStore::new());
        let provider = composed(
            &store,
            FixedSession {
                identity: Some(issued("u-9", Role::Warden)),
                ..Default::default()
            },
        );

        let state = resolve_mount(&provider, &Profiles::default()).await;

        let MountState::Ready(session) = state else {
            panic!("expected a ready mount");
        };
        assert_eq!(session.profile, None);
        assert_eq!(session.identity.role, Role::Warden);
    }

    #[tokio::test]
    async fn corrupt_demo_record_falls_through_to_issued_session() {
        let store = Rc::new(MemoryStore::with_raw("garbage"));
        let provider = composed(
            &store,
            FixedSession {
                identity: Some(issued("u-1", Role::Student)),
                ..Default::default()
            },
        );

        let state = resolve_mount(&provider, &Profiles::default()).await;

        assert!(matches!(state, MountState::Ready(ref s) if s.identity.id == "u-1"));
    }

    #[tokio::test]
    async fn sign_out_clears_demo_and_next_mount_redirects() {
        let store = Rc::new(MemoryStore::new());
        store
            .save(&DemoIdentity::for_role(Role::Student, 1))
            .unwrap();
        let real = FixedSession::default();
        let sign_outs = real.sign_outs.clone();
        let provider = composed(&store, real);

        assert_eq!(end_session(&provider).await, Route::Auth {});

        assert_eq!(store.raw(), None);
        assert_eq!(sign_outs.get(), 1);
        assert_eq!(
            resolve_mount(&provider, &Profiles::default()).await,
            MountState::Redirected
        );

        end_session(&provider).await;
        assert_eq!(sign_outs.get(), 2);
        assert_eq!(
            resolve_mount(&provider, &Profiles::default()).await,
            MountState::Redirected
        );
    }

    #[test]
    fn only_a_redirected_mount_navigates() {
        assert_eq!(redirect_for(&MountState::Redirected), Some(Route::Auth {}));
        assert_eq!(redirect_for(&MountState::Loading), None);
        let ready = MountState::Ready(DashboardSession {
            identity: issued("u-3", Role::Student),
            profile: None,
        });
        assert_eq!(redirect_for(&ready), None);
    }

    #[tokio::test]
    async fn role_screen_forwards_issued_sessions_only() {
        let signed_in = FixedSession {
            identity: Some(issued("u-5", Role::Parent)),
            ..Default::default()
        };
        assert_eq!(
            existing_session_route(&signed_in).await,
            Some(Route::Dashboard {})
        );
        assert_eq!(existing_session_route(&FixedSession::default()).await, None);

        let down = FixedSession {
            fail: true,
            ..Default::default()
        };
        assert_eq!(existing_session_route(&down).await, None);
    }
}
