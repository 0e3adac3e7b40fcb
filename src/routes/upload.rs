//! Bulk lead import: uploads one spreadsheet and shows the backend's import
//! summary (total, imported, failed).

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::upload::{client, types::UploadSummary};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn FileUploadPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <UploadContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn UploadContent() -> impl IntoView {
    let auth = use_auth();
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let upload_action = Action::new_local(|file: &web_sys::File| {
        let file = file.clone();
        async move { client::upload_file(file).await }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = upload_action.value().get() {
            auth.expire_session(&err);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            upload_action.dispatch(file);
        }
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Import Leads"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Upload a spreadsheet of leads. Rows that fail validation are skipped and counted below."
            </p>

            <form class="space-y-4" on:submit=on_submit>
                <input
                    type="file"
                    accept=".csv,.xls,.xlsx"
                    class="block w-full text-sm text-gray-900 border border-gray-300 rounded-lg cursor-pointer bg-gray-50 dark:text-gray-400 dark:bg-gray-700 dark:border-gray-600"
                    node_ref=file_input
                />
                <Button button_type="submit" disabled=upload_action.pending()>
                    "Upload"
                </Button>
            </form>

            {move || {
                upload_action
                    .pending()
                    .get()
                    .then_some(view! { <Spinner /> })
            }}

            {move || {
                upload_action
                    .value()
                    .get()
                    .map(|result| match result {
                        Ok(summary) => view! { <SummaryCard summary=summary /> }.into_any(),
                        Err(err) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn SummaryCard(summary: UploadSummary) -> impl IntoView {
    let message = summary
        .message
        .clone()
        .unwrap_or_else(|| "Import finished.".to_string());

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800 space-y-2">
            <Alert
                kind=if summary.failed_records == 0 { AlertKind::Success } else { AlertKind::Error }
                message=message
            />
            <ul class="text-sm text-gray-700 dark:text-gray-300 space-y-1">
                <li>{format!("Total rows: {}", summary.total_records)}</li>
                <li>{format!("Imported: {}", summary.successful_records)}</li>
                <li>{format!("Failed: {}", summary.failed_records)}</li>
            </ul>
        </div>
    }
}
