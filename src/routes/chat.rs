//! Per-lead chat thread: history plus a send box. The thread refetches after
//! each successful send so the new message appears with its server-assigned
//! id and timestamp.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::chat::client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct ChatParams {
    id: Option<String>,
}

#[component]
pub fn ChatHistoryPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ChatContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ChatContent() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<ChatParams>();
    let lead_id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .and_then(|id| id.trim().parse::<u64>().ok())
    };

    let history = LocalResource::new(move || {
        let id = lead_id();
        async move {
            match id {
                Some(id) => client::chat_history(id).await,
                None => Err(AppError::Config("Lead id is required.".to_string())),
            }
        }
    });

    let (draft, set_draft) = signal(String::new());
    let send_action = Action::new_local(move |message: &String| {
        let message = message.clone();
        let id = lead_id();
        async move {
            match id {
                Some(id) => client::send_message(id, &message).await,
                None => Err(AppError::Config("Lead id is required.".to_string())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = history.get() {
            auth.expire_session(&err);
        }
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(_) => {
                    set_draft.set(String::new());
                    history.refetch();
                }
                Err(err) => {
                    auth.expire_session(&err);
                }
            }
        }
    });

    let on_send = move |event: SubmitEvent| {
        event.prevent_default();
        if send_action.pending().get_untracked() {
            return;
        }
        let message = draft.get_untracked().trim().to_string();
        if message.is_empty() {
            return;
        }
        send_action.dispatch(message);
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Chat"</h1>

            <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800 min-h-[16rem]">
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match history.get() {
                        Some(Ok(messages)) if messages.is_empty() => {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "No messages yet."
                                </p>
                            }
                            .into_any()
                        }
                        Some(Ok(messages)) => {
                            view! {
                                <ul class="space-y-3">
                                    {messages
                                        .into_iter()
                                        .map(|message| {
                                            let meta = format!(
                                                "{} at {}",
                                                message.sender, message.timestamp,
                                            );
                                            view! {
                                                <li class="text-sm">
                                                    <div class="text-gray-900 dark:text-white">
                                                        {message.message}
                                                    </div>
                                                    <div class="text-xs text-gray-500 dark:text-gray-400">
                                                        {meta}
                                                    </div>
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

            <form class="flex gap-3" on:submit=on_send>
                <input
                    type="text"
                    class="flex-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Type a message"
                    prop:value=draft
                    on:input=move |event| set_draft.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=send_action.pending()>
                    "Send"
                </Button>
            </form>
        </div>
    }
}
