//! Route guard gating protected view trees on auth status and role. The
//! decision is re-derived reactively, so a sign-out while a view is mounted
//! redirects immediately. This is a UX-only guard; real access control lives
//! on the API.

use crate::components::Spinner;
use crate::features::auth::session::{RouteDecision, decide_route};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children only for authenticated users whose role is in `roles`
/// (any authenticated user when `roles` is absent or empty). While hydration
/// is pending it shows a neutral spinner; unauthenticated users are sent to
/// `/login` and wrong-role users silently to their own landing page.
#[component]
pub fn RequireAuth(
    #[prop(optional)] roles: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let required = roles.unwrap_or(&[]);
    let decision = Memo::new(move |_| {
        auth.session.with(|session| decide_route(session, required))
    });

    let navigate = use_navigate();
    Effect::new(move |_| match decision.get() {
        RouteDecision::RedirectToLogin => navigate("/login", Default::default()),
        RouteDecision::RedirectTo(path) => navigate(path, Default::default()),
        RouteDecision::Loading | RouteDecision::Allow => {}
    });

    view! {
        {move || match decision.get() {
            RouteDecision::Allow => children().into_any(),
            RouteDecision::Loading => {
                view! {
                    <div class="flex justify-center py-12">
                        <Spinner />
                    </div>
                }
                .into_any()
            }
            // Redirect in flight; render nothing so protected markup never
            // flashes.
            RouteDecision::RedirectToLogin | RouteDecision::RedirectTo(_) => ().into_any(),
        }}
    }
}
