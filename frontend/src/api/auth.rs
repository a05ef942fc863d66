use super::{
    client::{check_envelope, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, User},
};
use crate::state::session::Session;

impl ApiClient {
    /// Signs in and persists the returned credentials. This is the only call
    /// made without a bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        let envelope = check_envelope(response)?;
        let login: LoginResponse = serde_json::from_value(envelope)
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))?;

        if login.token.trim().is_empty() {
            return Err(ApiError::unauthorized("Sign-in did not return a token"));
        }
        self.session().write(&Session {
            token: login.token.clone(),
            user_id: login.user.id,
            role_id: login.user.role_id,
        })?;
        log::info!("signed in as user {}", login.user.id);
        Ok(login)
    }

    /// Profile of the signed-in user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let session = self
            .session()
            .read()
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))?;
        self.get_user(session.user_id).await
    }

    pub fn logout(&self) {
        self.session().clear();
        log::info!("signed out");
    }
}
