//! Shared lead form used by the create and detail pages. The parent owns the
//! submit action and reacts to its value; the form only validates and builds
//! the draft.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button};
use crate::features::leads::types::{Lead, LeadDraft, LeadStatus};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn LeadForm(
    #[prop(optional)] initial: Option<Lead>,
    submit_label: &'static str,
    action: Action<LeadDraft, Result<Lead, AppError>>,
) -> impl IntoView {
    let start = initial.clone();
    let (contact_number, set_contact_number) =
        signal(start.as_ref().map(|l| l.contact_number.clone()).unwrap_or_default());
    let (first_name, set_first_name) =
        signal(start.as_ref().map(|l| l.first_name.clone()).unwrap_or_default());
    let (last_name, set_last_name) =
        signal(start.as_ref().and_then(|l| l.last_name.clone()).unwrap_or_default());
    let (email, set_email) =
        signal(start.as_ref().and_then(|l| l.email.clone()).unwrap_or_default());
    let (city, set_city) = signal(start.as_ref().and_then(|l| l.city.clone()).unwrap_or_default());
    let (address, set_address) =
        signal(start.as_ref().and_then(|l| l.address.clone()).unwrap_or_default());
    let (model_name, set_model_name) =
        signal(start.as_ref().and_then(|l| l.model_name.clone()).unwrap_or_default());
    let (lead_source, set_lead_source) =
        signal(start.as_ref().and_then(|l| l.lead_source.clone()).unwrap_or_default());
    let (follow_up_date, set_follow_up_date) =
        signal(start.as_ref().and_then(|l| l.follow_up_date.clone()).unwrap_or_default());
    let (status, set_status) =
        signal(start.as_ref().map(|l| l.status).unwrap_or(LeadStatus::New));
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if action.pending().get_untracked() {
            return;
        }
        set_form_error.set(None);

        let contact = contact_number.get_untracked().trim().to_string();
        let first = first_name.get_untracked().trim().to_string();
        if contact.is_empty() || first.is_empty() {
            set_form_error.set(Some(
                "Contact number and first name are required.".to_string(),
            ));
            return;
        }

        action.dispatch(LeadDraft {
            contact_number: contact,
            first_name: first,
            last_name: optional(last_name.get_untracked()),
            email: optional(email.get_untracked()),
            city: optional(city.get_untracked()),
            address: optional(address.get_untracked()),
            model_name: optional(model_name.get_untracked()),
            lead_source: optional(lead_source.get_untracked()),
            follow_up_date: optional(follow_up_date.get_untracked()),
            status: Some(status.get_untracked()),
        });
    };

    let input_class = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";
    let label_class = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
    let initial_status = status.get_untracked();

    view! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-5" on:submit=on_submit>
            <div>
                <label class=label_class for="contact-number">"Contact number"</label>
                <input
                    id="contact-number"
                    type="tel"
                    class=input_class
                    prop:value=contact_number
                    required
                    on:input=move |event| set_contact_number.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="first-name">"First name"</label>
                <input
                    id="first-name"
                    type="text"
                    class=input_class
                    prop:value=first_name
                    required
                    on:input=move |event| set_first_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="last-name">"Last name"</label>
                <input
                    id="last-name"
                    type="text"
                    class=input_class
                    prop:value=last_name
                    on:input=move |event| set_last_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class=input_class
                    prop:value=email
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="city">"City"</label>
                <input
                    id="city"
                    type="text"
                    class=input_class
                    prop:value=city
                    on:input=move |event| set_city.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="address">"Address"</label>
                <input
                    id="address"
                    type="text"
                    class=input_class
                    prop:value=address
                    on:input=move |event| set_address.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="model-name">"Model"</label>
                <input
                    id="model-name"
                    type="text"
                    class=input_class
                    prop:value=model_name
                    on:input=move |event| set_model_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="lead-source">"Lead source"</label>
                <input
                    id="lead-source"
                    type="text"
                    class=input_class
                    prop:value=lead_source
                    on:input=move |event| set_lead_source.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="follow-up-date">"Follow-up date"</label>
                <input
                    id="follow-up-date"
                    type="date"
                    class=input_class
                    prop:value=follow_up_date
                    on:input=move |event| set_follow_up_date.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=label_class for="status">"Status"</label>
                <select
                    id="status"
                    class=input_class
                    on:change=move |event| {
                        if let Some(parsed) = LeadStatus::parse(&event_target_value(&event)) {
                            set_status.set(parsed);
                        }
                    }
                >
                    {LeadStatus::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=option == initial_status
                                >
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="md:col-span-2 space-y-4">
                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Button button_type="submit" disabled=action.pending()>
                    {submit_label}
                </Button>
            </div>
        </form>
    }
}
