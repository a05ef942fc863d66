use super::{
    client::ApiClient,
    types::{ApiError, AppVersion, AppVersionPayload, MutationResponse},
};

impl ApiClient {
    pub async fn list_app_versions(&self) -> Result<Vec<AppVersion>, ApiError> {
        self.get_list("/app-version", "appVersions").await
    }

    pub async fn create_app_version(
        &self,
        payload: &AppVersionPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/app-version", payload).await
    }

    pub async fn update_app_version(
        &self,
        id: i64,
        payload: &AppVersionPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/app-version/{}", id), payload).await
    }

    pub async fn delete_app_version(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/app-version/{}", id)).await
    }
}
