use crate::api::{ApiClient, ApiError, Meeting, MeetingPayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct MeetingsRepository {
    client: Rc<ApiClient>,
}

impl MeetingsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        self.client.list_meetings().await
    }

    pub async fn save_meeting(
        &self,
        id: Option<i64>,
        payload: MeetingPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_meeting(id, &payload).await,
            None => self.client.create_meeting(&payload).await,
        }
    }

    pub async fn delete_meeting(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_meeting(id).await
    }
}
