//! Auth session state and context for the frontend. The provider hydrates the
//! session once from the credential store and exposes derived auth signals
//! for guards and routes. Hydration trusts the stored token without a server
//! round-trip; a later 401/403 tears the session down via `expire_session`.

use crate::app_lib::AppError;
use crate::features::auth::{
    client,
    session::{Session, SessionStatus},
    storage,
    types::{Credential, LoginRequest, Role, UserInfo},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub status: Signal<SessionStatus>,
    pub user: Signal<Option<UserInfo>>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Session>) -> Self {
        let status = Signal::derive(move || session.with(|state| state.status()));
        let user = Signal::derive(move || {
            session.with(|state| state.credential().map(Credential::user))
        });
        Self {
            session,
            status,
            user,
        }
    }

    /// Authenticates against the backend, persists the credential, and
    /// transitions to `Authenticated`. On failure nothing is mutated and the
    /// error carries a displayable message. A sign-out racing the in-flight
    /// request wins: the stale completion is dropped.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, AppError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let dispatched_epoch = self.session.with_untracked(|state| state.epoch());

        let credential = client::login(&request).await?;
        let user = credential.user();

        let applied = self
            .session
            .try_update(|state| state.apply_login(dispatched_epoch, credential.clone()))
            .unwrap_or(false);
        if applied {
            storage::save(&credential);
        }
        Ok(user)
    }

    /// Local-only sign-out: clears the store and the in-memory session
    /// synchronously. Cannot fail and waits on no network call.
    pub fn sign_out(&self) {
        storage::clear();
        self.session.update(Session::sign_out);
    }

    /// Forces a sign-out when an API call reports the token is no longer
    /// valid. Returns whether the session was torn down.
    pub fn expire_session(&self, err: &AppError) -> bool {
        if !err.is_auth_error() {
            return false;
        }
        let expired = self
            .session
            .try_update(Session::apply_rejection)
            .unwrap_or(false);
        if expired {
            storage::clear();
            gloo_console::warn!("session rejected by the backend; signing out");
        }
        expired
    }

    /// True only when authenticated with exactly this role.
    pub fn has_role(&self, role: Role) -> bool {
        self.session.with(|state| state.has_role(role))
    }
}

/// Provides auth context and hydrates the session from storage on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let auth = AuthContext::new(session);
    provide_context(auth);

    // localStorage reads are synchronous, so the session resolves before the
    // first paint and guards never see a lingering Unknown.
    session.update(|state| state.hydrate(storage::load()));

    view! { {children()} }
}

/// Returns the current auth context or a fallback unauthenticated context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(Session::default());
        session.update(|state| state.hydrate(None));
        AuthContext::new(session)
    })
}
