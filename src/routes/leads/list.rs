//! Lead list with a status filter. Accessible to both roles; the filter goes
//! through the backend's status endpoint so the list matches what the server
//! would report, not a client-side projection.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::leads::{client, types::LeadStatus};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LeadListPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <LeadListContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn LeadListContent() -> impl IntoView {
    let auth = use_auth();
    let (status_filter, set_status_filter) = signal::<Option<LeadStatus>>(None);

    let leads = LocalResource::new(move || {
        let filter = status_filter.get();
        async move {
            match filter {
                Some(status) => client::filter_by_status(status).await,
                None => client::list_leads().await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = leads.get() {
            auth.expire_session(&err);
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Leads"</h1>
                <div class="flex items-center gap-4">
                    <select
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        on:change=move |event| {
                            set_status_filter.set(LeadStatus::parse(&event_target_value(&event)))
                        }
                    >
                        <option value="">"All statuses"</option>
                        {LeadStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! { <option value=status.as_str()>{status.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <A
                        href="/leads/new"
                        {..}
                        class="text-white bg-red-600 hover:bg-red-700 font-medium rounded-lg text-sm px-5 py-2.5"
                    >
                        "New Lead"
                    </A>
                </div>
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Contact"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "City"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Status"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center">
                                    <Spinner />
                                </td>
                            </tr>
                        }>
                            {move || match leads.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No leads found."
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                }
                                Some(Ok(list)) => {
                                    list.into_iter()
                                        .map(|lead| {
                                            let detail = format!("/leads/{}", lead.id);
                                            let chat = format!("/leads/{}/chat", lead.id);
                                            view! {
                                                <tr>
                                                    <td class="px-6 py-4 text-sm text-gray-900 dark:text-white">
                                                        {lead.full_name()}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">
                                                        {lead.contact_number.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">
                                                        {lead.city.clone().unwrap_or_default()}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">
                                                        {lead.status.as_str()}
                                                    </td>
                                                    <td class="px-6 py-4 text-right text-sm space-x-4">
                                                        <A href=detail {..} class="text-red-600 hover:underline">
                                                            "Edit"
                                                        </A>
                                                        <A href=chat {..} class="text-red-600 hover:underline">
                                                            "Chat"
                                                        </A>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-4">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
