use crate::api::{ApiClient, ApiError, MutationResponse, Roadmap, RoadmapPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct RoadmapsRepository {
    client: Rc<ApiClient>,
}

impl RoadmapsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_roadmaps(&self) -> Result<Vec<Roadmap>, ApiError> {
        self.client.list_roadmaps().await
    }

    pub async fn save_roadmap(
        &self,
        id: Option<i64>,
        payload: RoadmapPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_roadmap(id, &payload).await,
            None => self.client.create_roadmap(&payload).await,
        }
    }

    pub async fn delete_roadmap(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_roadmap(id).await
    }
}
