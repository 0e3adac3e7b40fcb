//! Shared layout wrapper with the header navigation and content container.
//! Nav items are filtered by the current role (the dashboard link is
//! head-office only, matching the guard) so users never see links they would
//! immediately be bounced from. Navigation remains client-side; the backend
//! enforces real access control.

use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let user = auth.user;
    let navigate = use_navigate();

    let sign_out = move |_: leptos::ev::MouseEvent| {
        auth.sign_out();
        navigate("/login", Default::default());
    };

    let link_class = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-red-600 md:p-0 dark:text-white md:dark:hover:text-red-400";

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-red-600">
                            "Hero"
                        </span>
                        <span class="whitespace-nowrap text-gray-500 dark:text-gray-300">
                            "Lead Nurturing"
                        </span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row items-center md:space-x-8 space-x-4">
                            {move || {
                                user.get()
                                    .map(|current| {
                                        let role = current.role;
                                        let badge = format!(
                                            "{} ({})",
                                            current.username,
                                            match role {
                                                Role::Ho => "HO",
                                                Role::Da => "DA",
                                            },
                                        );
                                        view! {
                                            <Show when=move || role == Role::Ho>
                                                <li>
                                                    <A href="/dashboard" {..} class=link_class>
                                                        "Dashboard"
                                                    </A>
                                                </li>
                                            </Show>
                                            <li>
                                                <A href="/leads" {..} class=link_class>
                                                    "Leads"
                                                </A>
                                            </li>
                                            <li>
                                                <A href="/upload" {..} class=link_class>
                                                    "Upload"
                                                </A>
                                            </li>
                                            <li class="text-sm text-gray-500 dark:text-gray-400">
                                                {badge}
                                            </li>
                                            <li>
                                                <button
                                                    type="button"
                                                    class=link_class
                                                    on:click=sign_out.clone()
                                                >
                                                    "Sign Out"
                                                </button>
                                            </li>
                                        }
                                    })
                            }}
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
