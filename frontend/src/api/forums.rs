use super::{
    client::ApiClient,
    types::{ApiError, Forum, ForumPayload, MutationResponse, Reply, ReplyPayload},
};

impl ApiClient {
    pub async fn list_forums(&self) -> Result<Vec<Forum>, ApiError> {
        self.get_list("/forum", "forums").await
    }

    pub async fn get_forum(&self, id: i64) -> Result<Forum, ApiError> {
        self.get_item(&format!("/forum/{}", id), "forum").await
    }

    pub async fn create_forum(&self, payload: &ForumPayload) -> Result<MutationResponse, ApiError> {
        self.create("/forum", payload).await
    }

    pub async fn update_forum(
        &self,
        id: i64,
        payload: &ForumPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/forum/{}", id), payload).await
    }

    pub async fn delete_forum(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/forum/{}", id)).await
    }

    pub async fn list_replies(&self, forum_id: i64) -> Result<Vec<Reply>, ApiError> {
        self.get_list(&format!("/replies/forum/{}", forum_id), "replies")
            .await
    }

    pub async fn create_reply(&self, payload: &ReplyPayload) -> Result<MutationResponse, ApiError> {
        self.create("/replies", payload).await
    }

    pub async fn delete_reply(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/replies/{}", id)).await
    }
}
