use super::{
    client::ApiClient,
    types::{ApiError, Meeting, MeetingPayload, MutationResponse},
};

// Meetings live under the API's `/event` resource.
impl ApiClient {
    pub async fn list_meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        self.get_list("/event", "events").await
    }

    pub async fn get_meeting(&self, id: i64) -> Result<Meeting, ApiError> {
        self.get_item(&format!("/event/{}", id), "event").await
    }

    pub async fn create_meeting(
        &self,
        payload: &MeetingPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/event", payload).await
    }

    pub async fn update_meeting(
        &self,
        id: i64,
        payload: &MeetingPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/event/{}", id), payload).await
    }

    pub async fn delete_meeting(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/event/{}", id)).await
    }
}
