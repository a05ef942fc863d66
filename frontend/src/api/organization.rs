use super::{
    client::ApiClient,
    types::{ApiError, Division, DivisionPayload, MutationResponse, Role, RolePayload},
};

impl ApiClient {
    pub async fn list_divisions(&self) -> Result<Vec<Division>, ApiError> {
        self.get_list("/division", "divisions").await
    }

    pub async fn get_division(&self, id: i64) -> Result<Division, ApiError> {
        self.get_item(&format!("/division/{}", id), "division").await
    }

    pub async fn create_division(
        &self,
        payload: &DivisionPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.create("/division", payload).await
    }

    pub async fn update_division(
        &self,
        id: i64,
        payload: &DivisionPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/division/{}", id), payload).await
    }

    pub async fn delete_division(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/division/{}", id)).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.get_list("/role", "roles").await
    }

    pub async fn get_role(&self, id: i64) -> Result<Role, ApiError> {
        self.get_item(&format!("/role/{}", id), "role").await
    }

    pub async fn create_role(&self, payload: &RolePayload) -> Result<MutationResponse, ApiError> {
        self.create("/role", payload).await
    }

    pub async fn update_role(
        &self,
        id: i64,
        payload: &RolePayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/role/{}", id), payload).await
    }

    pub async fn delete_role(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/role/{}", id)).await
    }
}
