use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::session::SessionProvider;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the dashboard backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Authenticated JSON client shared by the HTTP data sources.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Arc<dyn SessionProvider>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the given backend and session provider.
    pub fn new(
        config: ApiConfig,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            session,
            http,
        })
    }

    /// Return the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let request = self.request(reqwest::Method::GET, path)?;
        let body = self.send(request, path).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// POST to `path` without a body and ignore the response payload.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(reqwest::Method::POST, path)?;
        self.send(request, path).await.map(|_| ())
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let session = self.session.current().ok_or(ApiError::NoSession)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self.http.request(method, url).bearer_auth(session.bearer()))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let response =
            request.send().await.map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body =
            response.bytes().await.map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        log::debug!("{path} answered with {} bytes", body.len());
        Ok(body.to_vec())
    }
}
