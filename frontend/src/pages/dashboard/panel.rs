use super::{utils::DashboardSummary, view_model::use_dashboard_view_model};
use crate::{
    components::layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
    pages::profile::ProfileCard,
    state::auth::use_auth,
};
use leptos::*;

#[component]
fn Metric(label: &'static str, value: usize, href: &'static str) -> impl IntoView {
    view! {
        <a href=href class="block p-6 rounded-lg bg-surface-elevated border border-border shadow hover:shadow-md transition-shadow">
            <p class="text-xs font-semibold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="mt-3 text-3xl font-bold text-fg">{value}</p>
        </a>
    }
}

#[component]
pub fn SummaryCards(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <Metric label="Announcements" value=summary.announcements href="/announcements" />
            <Metric label="Meetings" value=summary.meetings href="/meetings" />
            <Metric label="Upcoming meetings" value=summary.upcoming_meetings href="/meetings" />
            <Metric label="Assignments" value=summary.assignments href="/assignments" />
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let greeting = move || format!("Welcome back, {}", auth.get().display_name());

    view! {
        <Layout>
            <PageHeader title="Dashboard" />
            <p class="text-fg-muted">{greeting}</p>
            {move || match vm.summary.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(summary)) => view! { <SummaryCards summary=summary /> }.into_view(),
            }}
            <ProfileCard />
        </Layout>
    }
}
