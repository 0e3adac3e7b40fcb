mod chat;
mod dashboard;
mod health;
mod home;
mod leads;
mod login;
mod not_found;
mod upload;

pub(crate) use chat::ChatHistoryPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use home::HomeRedirect;
pub(crate) use leads::{LeadCreatePage, LeadDetailPage, LeadListPage};
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use upload::FileUploadPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomeRedirect />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/leads") view=LeadListPage />
            <Route path=path!("/leads/new") view=LeadCreatePage />
            <Route path=path!("/leads/:id") view=LeadDetailPage />
            <Route path=path!("/leads/:id/chat") view=ChatHistoryPage />
            <Route path=path!("/upload") view=FileUploadPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
