use super::{
    client::ApiClient,
    types::{Announcement, AnnouncementPayload, ApiError, MutationResponse},
};

impl ApiClient {
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get_list("/announcement", "announcements").await
    }

    pub async fn create_announcement(
        &self,
        payload: &AnnouncementPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/announcement", payload).await
    }

    pub async fn update_announcement(
        &self,
        id: i64,
        payload: &AnnouncementPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/announcement/{}", id), payload).await
    }

    pub async fn delete_announcement(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/announcement/{}", id)).await
    }
}
