//! HTTP client with auth injection and centralized error normalization.

use std::sync::Arc;

use anyhow::Context;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use cleaver_core::{ApiError, ApiResult};

use crate::config::ApiConfig;
use crate::session::{LogUnauthorized, Session, UnauthorizedHandler};

/// Thin wrapper around `reqwest::Client`.
///
/// Every request goes through [`ApiClient::send`]: the bearer token is
/// attached when the session holds one, and every failure is normalized to
/// an [`ApiError`] before it reaches callers. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            on_unauthorized: Arc::new(LogUnauthorized),
        })
    }

    /// Install the login boundary invoked on 401 responses.
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = handler;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// POST without a request body (per-platform action endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send::<()>(Method::POST, path, None).await?;
        Self::decode(response).await
    }

    /// POST where the response body is irrelevant to the caller.
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::POST, path, Some(body)).await.map(drop)
    }

    pub async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::PUT, path, Some(body)).await.map(drop)
    }

    pub async fn patch_no_content<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::PATCH, path, Some(body)).await.map(drop)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, path, None).await.map(drop)
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) if err.is_builder() => {
                tracing::error!(%url, error = %err, "request setup failed");
                return Err(ApiError::unexpected());
            }
            Err(err) => {
                tracing::error!(%url, error = %err, "no response from API");
                return Err(ApiError::unavailable());
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        tracing::error!(%url, status = status.as_u16(), body = %body_text, "API responded with an error");
        Err(self.fail(status, &body_text))
    }

    /// Normalize a non-2xx response. A 401 additionally ends the session and
    /// hands control to the login boundary, once per response.
    fn fail(&self, status: StatusCode, body: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            self.on_unauthorized.on_unauthorized();
        }
        error_from_body(status.as_u16(), body)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        response.json().await.map_err(|err| {
            tracing::error!(error = %err, "failed to decode API response");
            ApiError::unexpected()
        })
    }
}

/// Extract the JSON body's `error` field; generic message otherwise.
pub(crate) fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|field| field.as_str())
                .map(str::to_owned)
        });
    ApiError::server(status, message)
}
