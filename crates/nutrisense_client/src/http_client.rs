//! HTTP client implementation for the NutriSense API.
//!
//! This module provides a reqwest-based implementation of the
//! [`NutrisenseClient`](crate::NutrisenseClient) trait.

use crate::{
    AuthSession, NutrisenseClient, NutrisenseError, PredictOutcome, PredictRequest, UserProfile,
    WellnessEntry, WellnessHistoryItem, WellnessOutcome,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, RwLock};

/// Client for the NutriSense API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestNutrisenseClient {
    base_url: String,
    token: Arc<RwLock<Option<SecretString>>>,
    client: reqwest::Client,
}

impl ReqwestNutrisenseClient {
    /// Create a client with no bearer token. Only `signup`, `login` and
    /// `predict`-free endpoints work until [`Self::set_token`] or a
    /// successful `login`.
    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, None)
    }

    /// Create a client with a pre-issued bearer token.
    pub fn with_token(base_url: &str, token: SecretString) -> Self {
        Self::build(base_url, Some(token))
    }

    fn build(base_url: &str, token: Option<SecretString>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(token)),
            client,
        }
    }

    /// Replace the bearer token used for authenticated requests.
    pub fn set_token(&self, token: SecretString) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    /// Build a request with the bearer token attached when present.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        let token = self
            .token
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().cloned());
        match token {
            Some(t) => builder.bearer_auth(t.expose_secret()),
            None => builder,
        }
    }

    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, url)
    }

    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, NutrisenseError> {
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), NutrisenseError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(())
    }

    /// Handle a response, converting status codes to appropriate errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, NutrisenseError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response. FastAPI reports
    /// problems as `{"detail": ...}`, so prefer that over the raw body.
    async fn error_from_response(&self, resp: reqwest::Response) -> NutrisenseError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(str::to_string)));
        let snippet: String = detail.unwrap_or_else(|| body.chars().take(256).collect());
        NutrisenseError::from_status(status, snippet)
    }
}

/// Login response on the wire; the token is secret-wrapped immediately.
#[derive(serde::Deserialize)]
struct TokenPayload {
    access_token: String,
    user: UserProfile,
}

/// The history endpoint returned a bare array in older deployments and an
/// `{"items": [...]}` object in newer ones. Accept both.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Items { items: Vec<WellnessHistoryItem> },
    List(Vec<WellnessHistoryItem>),
}

impl HistoryPayload {
    fn into_items(self) -> Vec<WellnessHistoryItem> {
        match self {
            HistoryPayload::Items { items } => items,
            HistoryPayload::List(items) => items,
        }
    }
}

#[async_trait]
impl NutrisenseClient for ReqwestNutrisenseClient {
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, NutrisenseError> {
        let url = self.url("/auth/signup");
        let body = serde_json::json!({"name": name, "email": email, "password": password});
        self.execute_json(self.post_request(&url).json(&body)).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, NutrisenseError> {
        let url = self.url("/auth/login");
        let body = serde_json::json!({"email": email, "password": password});
        let payload: TokenPayload = self.execute_json(self.post_request(&url).json(&body)).await?;
        let token = SecretString::new(payload.access_token.into());
        self.set_token(token.clone());
        tracing::debug!(user = %payload.user.email, "login succeeded");
        Ok(AuthSession {
            access_token: token,
            user: payload.user,
        })
    }

    async fn me(&self) -> Result<UserProfile, NutrisenseError> {
        let url = self.url("/auth/me");
        self.execute_json(self.get_request(&url)).await
    }

    async fn logout(&self) -> Result<(), NutrisenseError> {
        let url = self.url("/auth/logout");
        self.execute_empty(self.post_request(&url)).await?;
        self.clear_token();
        Ok(())
    }

    async fn submit_wellness(
        &self,
        entry: &WellnessEntry,
    ) -> Result<WellnessOutcome, NutrisenseError> {
        let url = self.url("/api/wellness");
        self.execute_json(self.post_request(&url).json(entry)).await
    }

    async fn wellness_history(&self) -> Result<Vec<WellnessHistoryItem>, NutrisenseError> {
        let url = self.url("/api/wellness/history");
        let payload: HistoryPayload = self.execute_json(self.get_request(&url)).await?;
        let items = payload.into_items();
        tracing::debug!(count = items.len(), "fetched wellness history");
        Ok(items)
    }

    async fn predict(&self, request: &PredictRequest) -> Result<PredictOutcome, NutrisenseError> {
        let url = self.url("/api/predict");
        self.execute_json(self.post_request(&url).json(request))
            .await
    }
}
