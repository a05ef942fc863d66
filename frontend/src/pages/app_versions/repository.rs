use crate::api::{ApiClient, ApiError, AppVersion, AppVersionPayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AppVersionsRepository {
    client: Rc<ApiClient>,
}

impl AppVersionsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_versions(&self) -> Result<Vec<AppVersion>, ApiError> {
        self.client.list_app_versions().await
    }

    pub async fn save_version(
        &self,
        id: Option<i64>,
        payload: AppVersionPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_app_version(id, &payload).await,
            None => self.client.create_app_version(&payload).await,
        }
    }

    pub async fn delete_version(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_app_version(id).await
    }
}
