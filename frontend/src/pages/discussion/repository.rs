use crate::api::{ApiClient, ApiError, Forum, ForumPayload, MutationResponse, Reply, ReplyPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct DiscussionRepository {
    client: Rc<ApiClient>,
}

impl DiscussionRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_forums(&self) -> Result<Vec<Forum>, ApiError> {
        self.client.list_forums().await
    }

    pub async fn fetch_forum(&self, id: i64) -> Result<Forum, ApiError> {
        self.client.get_forum(id).await
    }

    pub async fn save_forum(
        &self,
        id: Option<i64>,
        payload: ForumPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_forum(id, &payload).await,
            None => self.client.create_forum(&payload).await,
        }
    }

    pub async fn delete_forum(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_forum(id).await
    }

    pub async fn fetch_replies(&self, forum_id: i64) -> Result<Vec<Reply>, ApiError> {
        self.client.list_replies(forum_id).await
    }

    pub async fn post_reply(&self, payload: ReplyPayload) -> Result<MutationResponse, ApiError> {
        self.client.create_reply(&payload).await
    }

    pub async fn delete_reply(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_reply(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn replies_are_scoped_to_the_forum() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/replies/forum/4");
            then.status(200).json_body(json!({
                "status": 200,
                "replies": [
                    { "id": 1, "forumId": 4, "content": "Agreed", "user": { "id": 2, "fullName": "Ayu" } }
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/replies");
            then.status(201)
                .json_body(json!({ "status": 201, "message": "Reply posted" }));
        });

        let api = signed_in_client(&server);
        let repo = DiscussionRepository::new_with_client(Rc::new(api));

        let replies = repo.fetch_replies(4).await.unwrap();
        assert_eq!(replies[0].content, "Agreed");

        repo.post_reply(ReplyPayload {
            forum_id: 4,
            user_id: 7,
            content: "Me too".into(),
        })
        .await
        .unwrap();
        let sent = server.received().pop().unwrap();
        assert_eq!(
            sent.body,
            Some(json!({ "forumId": 4, "userId": 7, "content": "Me too" }))
        );
    }
}
