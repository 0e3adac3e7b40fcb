//! Pure session state machine behind `AuthContext`. Keeping it free of
//! framework types lets the transitions, the stale-response guard, and the
//! route decisions run under native unit tests.
//!
//! Valid transitions: `Unknown -> {Authenticated, Unauthenticated}` on
//! hydration, `Unauthenticated -> Authenticated` on login,
//! `{Unknown, Authenticated} -> Unauthenticated` on sign-out or token
//! rejection. Nothing else.

use super::types::{Credential, Role};

/// Projection of the credential plus a status tag. `Unknown` covers the
/// window before storage hydration resolves and is never authenticated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unknown,
    Authenticated(Credential),
    Unauthenticated,
}

/// Status without the credential, cheap for views to match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// What a guard should do for a route given the session and its role set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration pending: render a neutral placeholder, nothing else.
    Loading,
    /// Render the protected children.
    Allow,
    /// Not signed in: redirect to the login view.
    RedirectToLogin,
    /// Signed in but the role is not allowed: silent redirect to this path.
    RedirectTo(&'static str),
}

/// Session state plus a monotonic epoch. The epoch bumps on every sign-in and
/// sign-out so a completion of an older in-flight request can be ignored
/// instead of resurrecting a signed-out session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Unknown,
            epoch: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Unknown => SessionStatus::Unknown,
            SessionState::Authenticated(_) => SessionStatus::Authenticated,
            SessionState::Unauthenticated => SessionStatus::Unauthenticated,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        match &self.state {
            SessionState::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True only when authenticated with exactly this role.
    pub fn has_role(&self, role: Role) -> bool {
        self.credential()
            .map(|credential| credential.role == role)
            .unwrap_or(false)
    }

    /// Resolves the initial `Unknown` state from the persisted credential.
    /// A no-op once the session has already resolved.
    pub fn hydrate(&mut self, stored: Option<Credential>) {
        if self.state != SessionState::Unknown {
            return;
        }
        self.state = match stored {
            Some(credential) => SessionState::Authenticated(credential),
            None => SessionState::Unauthenticated,
        };
    }

    /// Applies a completed login, unless the session moved on since the
    /// request was dispatched. Returns whether the login took effect.
    pub fn apply_login(&mut self, dispatched_epoch: u64, credential: Credential) -> bool {
        if dispatched_epoch != self.epoch {
            return false;
        }
        self.state = SessionState::Authenticated(credential);
        self.epoch += 1;
        true
    }

    /// Local sign-out; always wins over in-flight responses.
    pub fn sign_out(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.epoch += 1;
    }

    /// Token rejection (401/403) from any authenticated call. Ignored when
    /// already unauthenticated. Returns whether the session was torn down.
    pub fn apply_rejection(&mut self) -> bool {
        if self.credential().is_none() {
            return false;
        }
        self.sign_out();
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Route gate: `Unknown` always loads, unauthenticated users go to login,
/// and a role outside the requirement is bounced to its own landing page.
/// An empty requirement admits any authenticated user.
pub fn decide_route(session: &Session, required: &[Role]) -> RouteDecision {
    match session.credential() {
        None if session.status() == SessionStatus::Unknown => RouteDecision::Loading,
        None => RouteDecision::RedirectToLogin,
        Some(credential) => {
            if required.is_empty() || required.contains(&credential.role) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectTo(credential.role.home_path())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteDecision, Session, SessionStatus, decide_route};
    use crate::features::auth::types::{Credential, Role};

    fn credential(role: &str) -> Credential {
        Credential::from_parts("abc", "ho_admin", role).expect("valid credential")
    }

    #[test]
    fn new_session_is_unknown_and_has_no_role() {
        let session = Session::new();
        assert_eq!(session.status(), SessionStatus::Unknown);
        assert!(!session.has_role(Role::Ho));
        assert!(!session.has_role(Role::Da));
    }

    #[test]
    fn hydrate_resolves_to_authenticated_or_unauthenticated() {
        let mut found = Session::new();
        found.hydrate(Some(credential("HO")));
        assert_eq!(found.status(), SessionStatus::Authenticated);
        assert!(found.has_role(Role::Ho));

        let mut empty = Session::new();
        empty.hydrate(None);
        assert_eq!(empty.status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn hydrate_is_a_noop_after_resolution() {
        let mut session = Session::new();
        session.hydrate(None);
        session.hydrate(Some(credential("HO")));
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn login_authenticates_with_exact_role_match() {
        let mut session = Session::new();
        session.hydrate(None);
        let epoch = session.epoch();

        assert!(session.apply_login(epoch, credential("HO")));
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(session.has_role(Role::Ho));
        assert!(!session.has_role(Role::Da));
    }

    #[test]
    fn sign_out_clears_roles_regardless_of_prior_state() {
        let mut session = Session::new();
        session.hydrate(Some(credential("DA")));
        session.sign_out();

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.has_role(Role::Da));
        assert!(!session.has_role(Role::Ho));
    }

    #[test]
    fn stale_login_completion_after_sign_out_is_ignored() {
        let mut session = Session::new();
        session.hydrate(None);
        let epoch = session.epoch();

        // Sign-out happens while the login request is still in flight.
        session.sign_out();
        assert!(!session.apply_login(epoch, credential("HO")));
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn rejection_tears_down_an_authenticated_session_once() {
        let mut session = Session::new();
        session.hydrate(Some(credential("HO")));

        assert!(session.apply_rejection());
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.has_role(Role::Ho));
        // A second stale 401 is a no-op.
        assert!(!session.apply_rejection());
    }

    #[test]
    fn unknown_session_only_loads() {
        let session = Session::new();
        assert_eq!(decide_route(&session, &[]), RouteDecision::Loading);
        assert_eq!(decide_route(&session, &[Role::Ho]), RouteDecision::Loading);
    }

    #[test]
    fn unauthenticated_session_redirects_to_login() {
        let mut session = Session::new();
        session.hydrate(None);
        assert_eq!(decide_route(&session, &[]), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn dealer_agent_is_bounced_from_head_office_routes() {
        let mut session = Session::new();
        session.hydrate(Some(credential("DA")));

        assert_eq!(
            decide_route(&session, &[Role::Ho]),
            RouteDecision::RedirectTo("/leads")
        );
        assert_eq!(decide_route(&session, &[]), RouteDecision::Allow);
        assert_eq!(decide_route(&session, &[Role::Da]), RouteDecision::Allow);
    }

    #[test]
    fn head_office_reaches_the_dashboard() {
        let mut session = Session::new();
        session.hydrate(Some(credential("HO")));

        assert_eq!(decide_route(&session, &[Role::Ho]), RouteDecision::Allow);
        assert_eq!(
            decide_route(&session, &[Role::Da]),
            RouteDecision::RedirectTo("/dashboard")
        );
    }
}
