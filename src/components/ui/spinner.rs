use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
}

#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    let dims = match size {
        SpinnerSize::Small => "h-4 w-4 border-2",
        SpinnerSize::Medium => "h-7 w-7 border-4",
    };

    view! {
        <div
            class=format!(
                "inline-block animate-spin rounded-full border-red-200 border-t-red-600 {dims}"
            )
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
