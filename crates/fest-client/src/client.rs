//! The HTTP plumbing shared by every endpoint group.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use fest_core::config::FestConfig;
use fest_core::{FestError, Result};

/// Header carrying a client-generated key so the backend can deduplicate a
/// retried mutation.
pub const IDEMPOTENCY_HEADER: &str = "x-idempotency-key";

/// Typed REST client for the fest backend.
///
/// One instance per process, shared via `Arc`. Endpoints return either bare
/// JSON payloads or a `{success, message|error}` acknowledgement; both paths
/// funnel every failure into the [`FestError`] taxonomy so the views only
/// ever deal with one error shape.
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &FestConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| FestError::internal(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Overrides the bearer token after construction.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let mut request = self.http.get(self.url(path));
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_transport_error)?;
        decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let mut request = self
            .http
            .post(self.url(path))
            .header(IDEMPOTENCY_HEADER, Uuid::new_v4().to_string())
            .json(body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_transport_error)?;
        decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        let mut request = self
            .http
            .put(self.url(path))
            .header(IDEMPOTENCY_HEADER, Uuid::new_v4().to_string())
            .json(body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_transport_error)?;
        decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "DELETE");
        let mut request = self
            .http
            .delete(self.url(path))
            .header(IDEMPOTENCY_HEADER, Uuid::new_v4().to_string());
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_transport_error)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(FestError::AuthRequired);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_status_error(status.as_u16(), &body));
    }
    response.json::<T>().await.map_err(|err| FestError::Serialization {
        format: "JSON".to_string(),
        message: err.to_string(),
    })
}

fn map_transport_error(err: reqwest::Error) -> FestError {
    FestError::Network {
        message: format!("request failed: {err}"),
        retryable: err.is_connect() || err.is_timeout(),
    }
}

/// Pulls `message`/`error` out of a rejection body when the server sent one,
/// falling back to a generic string otherwise.
fn map_status_error(status: u16, body: &str) -> FestError {
    let message = serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    FestError::Server {
        status: Some(status),
        message,
    }
}

#[derive(serde::Deserialize)]
struct RejectionBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}
