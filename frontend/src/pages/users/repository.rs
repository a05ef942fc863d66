use crate::api::{ApiClient, ApiError, ListPage, MutationResponse, Role, User, UserPayload};
use futures::future::join_all;
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// One page of users. Users the listing returns without a division get
    /// it from their `/userdata` record; a failed lookup only logs and the
    /// division stays empty.
    pub async fn fetch_page(&self, page: usize, limit: usize) -> Result<ListPage<User>, ApiError> {
        let mut listing = self.client.list_users(page, limit).await?;
        let missing: Vec<i64> = listing
            .items
            .iter()
            .filter(|user| user.division.is_none())
            .map(|user| user.id)
            .collect();
        let lookups = join_all(missing.into_iter().map(|id| {
            let client = self.client.clone();
            async move { (id, client.get_userdata_for(id).await) }
        }))
        .await;

        for (id, result) in lookups {
            match result {
                Ok(data) => {
                    if let Some(user) = listing.items.iter_mut().find(|user| user.id == id) {
                        user.division = data.division;
                        user.division_id = user.division_id.or(data.division_id);
                    }
                }
                Err(err) => log::warn!("division lookup for user {} failed: {}", id, err),
            }
        }
        Ok(listing)
    }

    pub async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.client.list_roles().await
    }

    pub async fn save_user(
        &self,
        id: Option<i64>,
        payload: UserPayload,
    ) -> Result<MutationResponse, ApiError> {
        match id {
            Some(id) => self.client.update_user(id, &payload).await,
            None => self.client.create_user(&payload).await,
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.client.delete_user(id).await
    }
}
