use super::utils::{summarize, DashboardSummary};
use crate::api::{ApiClient, ApiError};
use chrono::Utc;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_summary(
        &self,
        member_division: Option<i64>,
    ) -> Result<DashboardSummary, ApiError> {
        let (announcements, meetings, assignments) = futures::join!(
            self.client.list_announcements(),
            self.client.list_meetings(),
            self.client.list_assignments()
        );
        Ok(summarize(
            &announcements?,
            &meetings?,
            &assignments?,
            member_division,
            Utc::now().date_naive(),
        ))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn summary_reads_all_three_lists() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/announcement");
            then.status(200).json_body(json!({
                "status": 200,
                "announcements": [{ "id": 1, "title": "A" }, { "id": 2, "title": "B", "divisionId": 9 }]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/event");
            then.status(200)
                .json_body(json!({ "status": 200, "events": [{ "id": 1, "title": "Sync" }] }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/assignment");
            then.status(200)
                .json_body(json!({ "status": 200, "assignments": [] }));
        });

        let api = signed_in_client(&server);
        let repo = DashboardRepository::new_with_client(Rc::new(api));
        let summary = repo.fetch_summary(Some(2)).await.unwrap();
        assert_eq!(summary.announcements, 1);
        assert_eq!(summary.meetings, 1);
        assert_eq!(summary.upcoming_meetings, 0);
        assert_eq!(summary.assignments, 0);
    }
}
