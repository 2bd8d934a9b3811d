//! HTTP helpers for JSON APIs with a shared timeout and consistent error mapping.
//! Feature clients go through [`ApiClient`] so every request gets the same user
//! agent, request id and timeout policy. The client never stores credentials.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `config.api_base_url` with the configured timeout.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is not an absolute http(s) URL
    /// or the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let parsed = Url::parse(config.api_base_url.trim())
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Unsupported API base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches JSON, appending `query` pairs to the URL.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or an undecodable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let response = self.send(self.http.get(&url).query(query)).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and expects no meaningful response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let response = self.send(self.http.post(&url).json(body)).await?;
        handle_empty_response(response).await
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or an undecodable body.
    pub async fn post_json_response<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let response = self.send(self.http.post(&url).json(body)).await?;
        handle_json_response(response).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let request_id = Uuid::new_v4().to_string();
        let request = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

        debug!(
            request_id = %request_id,
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );

        let response = self.http.execute(request).await.map_err(map_request_error)?;

        debug!(request_id = %request_id, status = response.status().as_u16(), "response received");

        Ok(response)
    }
}

/// Percent-encodes `value` as a single URL path segment so caller input
/// cannot add segments, a query or a fragment.
///
/// # Errors
/// Returns `AppError::Config` if `value` is blank or a dot segment.
pub fn path_segment(value: &str) -> Result<String, AppError> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|err| AppError::Config(format!("Invalid path base: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| AppError::Config("Invalid path base".to_string()))?
        .pop_if_empty()
        .push(value.trim());

    let segment = url.path().trim_start_matches('/');
    if segment.is_empty() {
        return Err(AppError::Config(format!("Invalid path segment: {value:?}")));
    }
    Ok(segment.to_string())
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http { status, body }
}
