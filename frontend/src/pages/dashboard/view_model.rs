use super::{repository::DashboardRepository, utils::DashboardSummary};
use crate::{
    api::{ApiClient, ApiError},
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary: Resource<Option<i64>, Result<DashboardSummary, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));
    let (auth, _) = use_auth();

    // Admins see every division; everybody else the records of their own.
    let scope = move || {
        auth.with(|state| match state.role_id() {
            Some(1) | Some(2) => None,
            _ => state.user.as_ref().and_then(|user| user.division_id),
        })
    };
    let summary = create_resource(scope, move |division| {
        let repo = repository.clone();
        async move { repo.fetch_summary(division).await }
    });

    DashboardViewModel { summary }
}
