use super::utils::{join_submissions, AssignmentOverview};
use crate::api::{ApiClient, ApiError, AssignmentPayload, GradePayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AssignmentsRepository {
    client: Rc<ApiClient>,
}

impl AssignmentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Assignments and submissions are requested together; the page fails
    /// when either request does.
    pub async fn fetch_overview(&self) -> Result<Vec<AssignmentOverview>, ApiError> {
        let (assignments, submissions) = futures::join!(
            self.client.list_assignments(),
            self.client.list_submissions()
        );
        Ok(join_submissions(assignments?, submissions?))
    }

    pub async fn save_assignment(
        &self,
        id: Option<i64>,
        payload: AssignmentPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_assignment(id, &payload).await,
            None => self.client.create_assignment(&payload).await,
        }
    }

    pub async fn delete_assignment(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_assignment(id).await
    }

    pub async fn grade_submission(
        &self,
        submission_id: i64,
        payload: GradePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.client.grade_submission(submission_id, &payload).await
    }
}
