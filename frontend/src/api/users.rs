use super::{
    client::ApiClient,
    types::{ApiError, ListPage, MutationResponse, User, UserData, UserPayload},
};

impl ApiClient {
    /// One server-side page of users.
    pub async fn list_users(&self, page: usize, limit: usize) -> Result<ListPage<User>, ApiError> {
        self.get_page("/user", "users", page, limit).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_item(&format!("/user/{}", id), "user").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<MutationResponse, ApiError> {
        self.create("/user", payload).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        payload: &UserPayload,
    ) -> Result<MutationResponse, ApiError> {
        self.update(&format!("/user/{}", id), payload).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/user/{}", id)).await
    }

    pub async fn list_userdata(&self) -> Result<Vec<UserData>, ApiError> {
        self.get_list("/userdata", "userdata").await
    }

    pub async fn get_userdata_for(&self, user_id: i64) -> Result<UserData, ApiError> {
        self.get_item(&format!("/userdata/user/{}", user_id), "userdata")
            .await
    }
}
