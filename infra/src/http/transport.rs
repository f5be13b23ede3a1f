//! Backend HTTP transport
//!
//! All requests to the backend go through [`ApiTransport`]. The transport
//! owns the failure boundary: every outcome that is not a success response
//! with a decodable body is converted into exactly one
//! [`RawFailure`] variant here, and nothing downstream ever probes
//! transport-specific error types.
//!
//! Responsibilities, mirroring the request/response interceptors of the
//! original client:
//! - bearer-token injection on every request except the public auth
//!   endpoints;
//! - `X-Request-ID` header for backend correlation;
//! - bounded retry of network-class failures (HTTP error responses are
//!   never retried);
//! - clearing the stored token when the server answers 401/403.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use fd_core::RawFailure;
use fd_shared::config::ClientConfig;
use fd_shared::types::ApiErrorBody;

use super::token::TokenStore;

// Endpoints reachable without a session token
const PUBLIC_PATHS: &[&str] = &["/auth/login", "/auth/register"];

/// Infrastructure setup errors
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// HTTP transport for the backend API
#[derive(Debug, Clone)]
pub struct ApiTransport {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
    max_retries: u32,
    retry_delay: Duration,
}

impl ApiTransport {
    /// Build a transport from configuration and a token store
    pub fn new(config: &ClientConfig, tokens: TokenStore) -> Result<Self, InfraError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfraError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// The token store backing this transport
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RawFailure> {
        let response = self.send(Method::GET, path, &[], None).await?;
        Self::decode(response).await
    }

    /// GET a JSON resource with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RawFailure> {
        let response = self.send(Method::GET, path, query, None).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode a JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RawFailure> {
        let body = Self::to_json(body)?;
        let response = self.send(Method::POST, path, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// POST a JSON body, ignoring the response body
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RawFailure> {
        let body = Self::to_json(body)?;
        self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(())
    }

    /// PUT a JSON body and decode a JSON response
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RawFailure> {
        let body = Self::to_json(body)?;
        let response = self.send(Method::PUT, path, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// PATCH a JSON body, ignoring the response body
    pub async fn patch_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), RawFailure> {
        let body = Self::to_json(body)?;
        self.send(Method::PATCH, path, &[], Some(body)).await?;
        Ok(())
    }

    /// DELETE a resource, ignoring the response body
    pub async fn delete(&self, path: &str) -> Result<(), RawFailure> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    // One logical request: bounded retry around a single attempt.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, RawFailure> {
        let mut attempt = 0;
        loop {
            match self.attempt(method.clone(), path, query, body.as_ref()).await {
                Err(RawFailure::Network { message }) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        path,
                        attempt,
                        max_retries = self.max_retries,
                        error = %message,
                        "network failure, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                outcome => return outcome,
            }
        }
    }

    async fn attempt(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, RawFailure> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("X-Request-ID", &request_id);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        if !is_public_path(path) {
            if let Some(token) = self.tokens.get() {
                request = request.bearer_auth(token);
            }
        }

        debug!(%method, path, request_id, "dispatching request");

        let response = request
            .send()
            .await
            .map_err(|e| RawFailure::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Session invalidated by the server: drop the stale token. The
        // failure still propagates so the caller can surface it.
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.tokens.clear();
        }

        let message = format!("HTTP status {} for {}", status.as_u16(), path);
        let body = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<ApiErrorBody>(&text).ok());

        debug!(path, status = status.as_u16(), request_id, "request failed");

        Err(RawFailure::Http {
            status: status.as_u16(),
            body,
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RawFailure> {
        response
            .json::<T>()
            .await
            .map_err(|e| RawFailure::runtime(format!("failed to decode response body: {}", e)))
    }

    fn to_json<B: Serialize>(body: &B) -> Result<serde_json::Value, RawFailure> {
        serde_json::to_value(body)
            .map_err(|e| RawFailure::runtime(format!("failed to serialize request body: {}", e)))
    }
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|public| path.starts_with(public))
}
