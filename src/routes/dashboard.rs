//! Head-office dashboard: aggregate lead stats over an optional date range.
//! Guarded to the HO role; dealer agents are silently bounced to the lead
//! list by the guard.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use crate::features::dashboard::{client, types::DashboardStats};
use leptos::prelude::*;

const HO_ONLY: &[Role] = &[Role::Ho];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth roles=HO_ONLY>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let (from_date, set_from_date) = signal(String::new());
    let (to_date, set_to_date) = signal(String::new());

    let stats = LocalResource::new(move || {
        let from = from_date.get();
        let to = to_date.get();
        async move { client::stats(&from, &to).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = stats.get() {
            auth.expire_session(&err);
        }
    });

    let date_class = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Dashboard"
                </h1>
                <div class="flex items-end gap-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="from-date"
                        >
                            "From"
                        </label>
                        <input
                            id="from-date"
                            type="date"
                            class=date_class
                            on:input=move |event| set_from_date.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="to-date"
                        >
                            "To"
                        </label>
                        <input
                            id="to-date"
                            type="date"
                            class=date_class
                            on:input=move |event| set_to_date.set(event_target_value(&event))
                        />
                    </div>
                </div>
            </div>

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match stats.get() {
                    Some(Ok(stats)) => view! { <StatsGrid stats=stats /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StatsGrid(stats: DashboardStats) -> impl IntoView {
    let cards = [
        ("Total Leads", stats.total_leads),
        ("Qualified", stats.qualified_leads),
        ("Unqualified", stats.unqualified_leads),
        ("Lost", stats.lost_leads),
        ("Pending", stats.pending_leads),
    ];
    let sources = stats.source_distribution.clone();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                            <div class="text-sm text-gray-500 dark:text-gray-400">{label}</div>
                            <div class="text-2xl font-semibold text-gray-900 dark:text-white">
                                {value}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                <div class="text-sm text-gray-500 dark:text-gray-400">"Conversion"</div>
                <div class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {format!("{:.1}%", stats.conversion_rate)}
                </div>
            </div>
        </div>
        <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                "Leads by Source"
            </h2>
            {if sources.is_empty() {
                view! {
                    <p class="text-sm text-gray-500 dark:text-gray-400">"No source data."</p>
                }
                .into_any()
            } else {
                view! {
                    <ul class="space-y-2">
                        {sources
                            .into_iter()
                            .map(|(source, count)| {
                                view! {
                                    <li class="flex justify-between text-sm text-gray-700 dark:text-gray-300">
                                        <span>{source}</span>
                                        <span class="font-medium">{count}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
