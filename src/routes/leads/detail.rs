//! Lead detail (edit, delete, modification history) and lead creation.
//! Both roles may edit leads; the guard only requires authentication.

use super::form::LeadForm;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::leads::{client, types::LeadDraft};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct LeadParams {
    id: Option<String>,
}

fn parse_lead_id(params: &Result<LeadParams, leptos_router::params::ParamsError>) -> Option<u64> {
    params
        .as_ref()
        .ok()
        .and_then(|params| params.id.as_ref())
        .and_then(|id| id.trim().parse().ok())
}

#[component]
pub fn LeadCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let create_action = Action::new_local(|draft: &LeadDraft| {
        let draft = draft.clone();
        async move { client::create_lead(&draft).await }
    });

    let auth = use_auth();
    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(lead) => navigate(&format!("/leads/{}", lead.id), Default::default()),
                Err(err) => {
                    auth.expire_session(&err);
                }
            }
        }
    });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "New Lead"
                    </h1>
                    <LeadForm submit_label="Create" action=create_action />
                    {move || {
                        create_action
                            .value()
                            .get()
                            .and_then(Result::err)
                            .map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                    }}
                </div>
            </RequireAuth>
        </AppShell>
    }
}

#[component]
pub fn LeadDetailPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <LeadDetailContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn LeadDetailContent() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<LeadParams>();

    let lead = LocalResource::new(move || {
        let id = parse_lead_id(&params.get());
        async move {
            match id {
                Some(id) => client::get_lead(id).await,
                None => Err(AppError::Config("Lead id is required.".to_string())),
            }
        }
    });

    let modifications = LocalResource::new(move || {
        let id = parse_lead_id(&params.get());
        async move {
            match id {
                Some(id) => client::modification_history(id).await,
                None => Err(AppError::Config("Lead id is required.".to_string())),
            }
        }
    });

    let update_action = Action::new_local(move |draft: &LeadDraft| {
        let draft = draft.clone();
        let id = parse_lead_id(&params.get_untracked());
        async move {
            match id {
                Some(id) => client::update_lead(id, &draft).await,
                None => Err(AppError::Config("Lead id is required.".to_string())),
            }
        }
    });

    let navigate = use_navigate();
    let delete_action = Action::new_local(move |id: &u64| {
        let id = *id;
        async move { client::delete_lead(id).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = lead.get() {
            auth.expire_session(&err);
        }
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => modifications.refetch(),
                Err(err) => {
                    auth.expire_session(&err);
                }
            }
        }
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => navigate("/leads", Default::default()),
                Err(err) => {
                    auth.expire_session(&err);
                }
            }
        }
    });

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = parse_lead_id(&params.get_untracked()) {
            delete_action.dispatch(id);
        }
    };

    view! {
        <div class="space-y-8">
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match lead.get() {
                    Some(Ok(lead)) => {
                        let title = lead.full_name();
                        let chat_href = format!("/leads/{}/chat", lead.id);
                        // Captured at intake; shown read-only here.
                        let government_id =
                            lead.government_id.clone().unwrap_or_else(|| "-".to_string());
                        let lead_mode =
                            lead.lead_mode.clone().unwrap_or_else(|| "-".to_string());
                        view! {
                            <div class="space-y-6">
                                <div class="flex items-center justify-between">
                                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                        {title}
                                    </h1>
                                    <a href=chat_href class="text-red-600 hover:underline text-sm">
                                        "Open chat"
                                    </a>
                                </div>
                                <dl class="grid grid-cols-1 md:grid-cols-2 gap-5 text-sm">
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">
                                            "Government ID"
                                        </dt>
                                        <dd class="text-gray-900 dark:text-white">
                                            {government_id}
                                        </dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">
                                            "Lead mode"
                                        </dt>
                                        <dd class="text-gray-900 dark:text-white">{lead_mode}</dd>
                                    </div>
                                </dl>
                                <LeadForm
                                    initial=lead
                                    submit_label="Save"
                                    action=update_action
                                />
                                <Button
                                    variant=ButtonVariant::Danger
                                    disabled=delete_action.pending()
                                    on_click=Callback::new(on_delete)
                                >
                                    "Delete lead"
                                </Button>
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>

            {move || {
                update_action
                    .value()
                    .get()
                    .map(|result| match result {
                        Ok(_) => view! {
                            <Alert kind=AlertKind::Success message="Lead saved.".to_string() />
                        }
                        .into_any(),
                        Err(err) => view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                        .into_any(),
                    })
            }}

            <div class="space-y-3">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                    "Modification history"
                </h2>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match modifications.get() {
                        Some(Ok(history)) if history.is_empty() => {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "No modifications recorded."
                                </p>
                            }
                            .into_any()
                        }
                        Some(Ok(history)) => {
                            view! {
                                <ul class="space-y-2">
                                    {history
                                        .into_iter()
                                        .map(|entry| {
                                            let change = format!(
                                                "{}: {} -> {}",
                                                entry.modified_field,
                                                entry.old_value.unwrap_or_else(|| "-".to_string()),
                                                entry.new_value.unwrap_or_else(|| "-".to_string()),
                                            );
                                            let meta = format!(
                                                "by {} at {}",
                                                entry.modified_by, entry.modified_at,
                                            );
                                            view! {
                                                <li class="text-sm text-gray-700 dark:text-gray-300">
                                                    <span class="font-medium">{change}</span>
                                                    <span class="text-gray-500 dark:text-gray-400">
                                                        {" "}
                                                        {meta}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </div>
    }
}
