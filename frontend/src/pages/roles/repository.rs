use crate::api::{ApiClient, ApiError, MutationResponse, Role, RolePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct RolesRepository {
    client: Rc<ApiClient>,
}

impl RolesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.client.list_roles().await
    }

    pub async fn save_role(
        &self,
        id: Option<i64>,
        payload: RolePayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_role(id, &payload).await,
            None => self.client.create_role(&payload).await,
        }
    }

    pub async fn delete_role(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_role(id).await
    }
}
