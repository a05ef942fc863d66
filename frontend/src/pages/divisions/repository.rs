use crate::api::{ApiClient, ApiError, Division, DivisionPayload, MutationResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct DivisionsRepository {
    client: Rc<ApiClient>,
}

impl DivisionsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_divisions(&self) -> Result<Vec<Division>, ApiError> {
        self.client.list_divisions().await
    }

    pub async fn save_division(
        &self,
        id: Option<i64>,
        payload: DivisionPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_division(id, &payload).await,
            None => self.client.create_division(&payload).await,
        }
    }

    pub async fn delete_division(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_division(id).await
    }
}
