use crate::api::{Announcement, AnnouncementPayload, ApiClient, ApiError, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AnnouncementsRepository {
    client: Rc<ApiClient>,
}

impl AnnouncementsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.client.list_announcements().await
    }

    pub async fn save_announcement(
        &self,
        id: Option<i64>,
        payload: AnnouncementPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_announcement(id, &payload).await,
            None => self.client.create_announcement(&payload).await,
        }
    }

    pub async fn delete_announcement(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_announcement(id).await
    }
}
