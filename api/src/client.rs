//! HTTP client with request and response interception.
//!
//! ARCHITECTURE
//! ============
//! Every call goes through two fixed points:
//!
//! - [`ApiClient::request`] reads the token at send time and attaches
//!   `Authorization: Bearer <token>` when one is stored.
//! - [`ApiClient::send`] inspects the status. `401` expires the session
//!   (clearing `token`/`user` and emitting `SessionEvent::Expired`) before
//!   handing the error back; any other non-success becomes
//!   [`ApiError::Status`].
//!
//! No retries. Transport errors are returned as-is.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use session::Session;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared API client. Clones reuse the connection pool and the session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the base URL is blank or the HTTP client cannot
    /// be built.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self, ApiError> {
        let base_url = crate::config::normalize_base_url(&config.base_url)?;

        let builder = reqwest::Client::builder();
        // The fetch backend has no timeout knobs.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs));

        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, session })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a request against `path` (relative to the base URL) with the
    /// stored bearer token attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method.clone(), url);
        let (builder, bearer) = self.authorize(builder);
        tracing::debug!(%method, path, bearer, "api request");
        builder
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored. The
    /// token is read at call time so a login or expiry takes effect on the
    /// next request.
    fn authorize(&self, builder: RequestBuilder) -> (RequestBuilder, bool) {
        match self.session.token() {
            Some(token) => (builder.header(header::AUTHORIZATION, format!("Bearer {token}")), true),
            None => (builder, false),
        }
    }

    /// Send a prepared request and apply response interception.
    ///
    /// # Errors
    ///
    /// [`ApiError::Request`] on transport failure, [`ApiError::Unauthorized`]
    /// on `401` (after expiring the session), [`ApiError::Status`] on any
    /// other non-success status.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        self.intercept(response).await
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; additionally [`ApiError::Parse`] if the body
    /// is not the expected JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        read_json(response).await
    }

    /// `POST path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        read_json(response).await
    }

    async fn intercept(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_owned();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = %path, "server rejected credentials; expiring session");
            self.session.expire();
            return Err(ApiError::Unauthorized { body });
        }

        tracing::debug!(path = %path, status = status.as_u16(), "api error response");
        Err(ApiError::Status { status: status.as_u16(), body })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    parse_json(&text)
}

pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
