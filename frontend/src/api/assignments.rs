use super::{
    client::ApiClient,
    types::{
        ApiError, Assignment, AssignmentPayload, GradePayload, MutationResponse, Submission,
    },
};

impl ApiClient {
    pub async fn list_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.get_list("/assignment", "assignments").await
    }

    pub async fn get_assignment(&self, id: i64) -> Result<Assignment, ApiError> {
        self.get_item(&format!("/assignment/{}", id), "assignment")
            .await
    }

    pub async fn create_assignment(
        &self,
        payload: &AssignmentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/assignment", payload).await
    }

    pub async fn update_assignment(
        &self,
        id: i64,
        payload: &AssignmentPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/assignment/{}", id), payload).await
    }

    pub async fn delete_assignment(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/assignment/{}", id)).await
    }

    pub async fn list_submissions(&self) -> Result<Vec<Submission>, ApiError> {
        self.get_list("/submission", "submissions").await
    }

    pub async fn list_submissions_for(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>, ApiError> {
        self.get_list(
            &format!("/submission/assignment/{}", assignment_id),
            "submissions",
        )
        .await
    }

    pub async fn grade_submission(
        &self,
        id: i64,
        payload: &GradePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/submission/{}", id), payload).await
    }
}
