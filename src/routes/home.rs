//! Root route: forwards to the role's landing page, or to login when the
//! session is absent. Shows only a spinner while hydration resolves.

use crate::components::Spinner;
use crate::features::auth::session::SessionStatus;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| match auth.status.get() {
        SessionStatus::Unknown => {}
        SessionStatus::Unauthenticated => navigate("/login", Default::default()),
        SessionStatus::Authenticated => {
            if let Some(user) = auth.user.get() {
                navigate(user.role.home_path(), Default::default());
            }
        }
    });

    view! {
        <div class="flex justify-center py-12">
            <Spinner />
        </div>
    }
}
