use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse},
    state::session::Session,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(&request).await
    }

    pub fn session(&self) -> Option<Session> {
        self.client.session().read()
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::SessionContext;

    fn repo(server: &MockServer) -> LoginRepository {
        LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
            SessionContext::in_memory(),
        )))
    }

    #[tokio::test]
    async fn login_persists_the_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "status": 200,
                "token": "abc",
                "user": { "id": 9, "fullName": "Rani", "email": "rani@example.com", "roleId": 3 }
            }));
        });

        let repo = repo(&server);
        let response = repo
            .login(LoginRequest {
                email: "rani@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.full_name, "Rani");

        let session = repo.session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.role_id, Some(3));

        let request = &server.received()[0];
        assert!(request.authorization.is_none());
        assert_eq!(request.body.as_ref().unwrap()["email"], "rani@example.com");

        repo.logout();
        assert!(repo.session().is_none());
    }

    #[tokio::test]
    async fn rejected_credentials_keep_the_session_empty() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(serde_json::json!({ "status": 401, "message": "Invalid credentials" }));
        });

        let repo = repo(&server);
        let err = repo
            .login(LoginRequest {
                email: "rani@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert!(repo.session().is_none());
    }
}
