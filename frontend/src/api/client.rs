use reqwest::{Client, Method, Request, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::{ApiError, ListPage, MutationResponse},
    config,
    state::session::SessionContext,
    table::PageMeta,
    utils::storage::redirect_to,
};

/// Status and raw body of a finished exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionContext,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionContext::browser())
    }

    pub fn with_session(session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .token()
            .map(|token| format!("Bearer {}", token))
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))
    }

    pub(crate) fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.header(reqwest::header::AUTHORIZATION, self.bearer()?))
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse { status, body })
    }

    /// Any 401 ends the session: stored credentials are dropped and the
    /// browser is sent back to the sign-in page.
    fn handle_unauthorized_status(&self, status: u16) {
        if status == StatusCode::UNAUTHORIZED.as_u16() {
            log::warn!("session rejected by the API, signing out");
            self.session.clear();
            redirect_to("/login");
        }
    }

    /// Sends an authenticated request and returns the decoded envelope once
    /// both the HTTP status and the embedded `status` report success.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path).await;
        let mut builder = self.authorized(self.client.request(method, url))?;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let response = self.send(builder).await?;
        self.handle_unauthorized_status(response.status);
        check_envelope(response)
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
    ) -> Result<Vec<T>, ApiError> {
        let envelope = self.request(Method::GET, path, &[], None).await?;
        decode_field(&envelope, key)
    }

    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        page: usize,
        limit: usize,
    ) -> Result<ListPage<T>, ApiError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        let envelope = self.request(Method::GET, path, &query, None).await?;
        let items = decode_field(&envelope, key)?;
        let meta = match envelope.get("meta") {
            Some(meta) if !meta.is_null() => serde_json::from_value::<PageMeta>(meta.clone())
                .map_err(|e| ApiError::parse(format!("Failed to parse page meta: {}", e)))?,
            _ => PageMeta::default(),
        };
        Ok(ListPage { items, meta })
    }

    pub(crate) async fn get_item<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
    ) -> Result<T, ApiError> {
        let envelope = self.request(Method::GET, path, &[], None).await?;
        decode_field(&envelope, key)
    }

    pub(crate) async fn create<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MutationResponse, ApiError> {
        self.mutate(Method::POST, path, Some(to_json(body)?)).await
    }

    pub(crate) async fn update<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MutationResponse, ApiError> {
        self.mutate(Method::PUT, path, Some(to_json(body)?)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<MutationResponse, ApiError> {
        self.mutate(Method::DELETE, path, None).await
    }

    async fn mutate(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<MutationResponse, ApiError> {
        let envelope = self.request(method, path, &[], body).await?;
        serde_json::from_value(envelope)
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::validation(format!("Failed to encode request: {}", e)))
}

fn decode_field<T: DeserializeOwned>(envelope: &Value, key: &str) -> Result<T, ApiError> {
    let field = envelope
        .get(key)
        .ok_or_else(|| ApiError::parse(format!("Response is missing `{}`", key)))?;
    serde_json::from_value(field.clone())
        .map_err(|e| ApiError::parse(format!("Failed to parse `{}`: {}", key, e)))
}

fn error_message(body: &Value, status: u64) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// Decodes a body and checks both status layers. A missing embedded status
/// defers to the HTTP one; a present one must also be 2xx.
pub(crate) fn check_envelope(response: RawResponse) -> Result<Value, ApiError> {
    let body: Value = if response.body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&response.body) {
            Ok(body) => body,
            Err(e) if is_success(response.status) => {
                return Err(ApiError::parse(format!("Failed to parse response: {}", e)));
            }
            Err(_) => Value::Null,
        }
    };

    if !is_success(response.status) {
        let message = error_message(&body, u64::from(response.status));
        let error = if response.status == StatusCode::UNAUTHORIZED.as_u16() {
            ApiError::unauthorized(message)
        } else {
            ApiError::request_failed(message)
        };
        return Err(error.with_details(body));
    }

    let embedded = body.get("status").and_then(Value::as_u64);
    if let Some(embedded) = embedded {
        if !u16::try_from(embedded).map_or(false, is_success) {
            return Err(
                ApiError::status_mismatch(error_message(&body, embedded)).with_details(body),
            );
        }
    }
    Ok(body)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}


/// Canned answer served in place of a network round trip.
#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder {
    fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    mock_registry::register(base_url, responder);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &Request) -> Option<Result<RawResponse, ApiError>> {
    let responder = mock_registry::lookup(request.url().as_str())?;
    Some(responder.respond(request).map(|mock| RawResponse {
        status: mock.status,
        body: mock.body,
    }))
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &Request) -> Option<Result<RawResponse, ApiError>> {
    None
}
