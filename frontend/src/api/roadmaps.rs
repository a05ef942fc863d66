use super::{
    client::ApiClient,
    types::{ApiError, MutationResponse, Roadmap, RoadmapPayload},
};

impl ApiClient {
    pub async fn list_roadmaps(&self) -> Result<Vec<Roadmap>, ApiError> {
        self.get_list("/roadmap", "roadmaps").await
    }

    pub async fn get_roadmap(&self, id: i64) -> Result<Roadmap, ApiError> {
        self.get_item(&format!("/roadmap/{}", id), "roadmap").await
    }

    pub async fn create_roadmap(
        &self,
        payload: &RoadmapPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/roadmap", payload).await
    }

    pub async fn update_roadmap(
        &self,
        id: i64,
        payload: &RoadmapPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/roadmap/{}", id), payload).await
    }

    pub async fn delete_roadmap(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/roadmap/{}", id)).await
    }
}
