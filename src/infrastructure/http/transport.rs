use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::StatusCode;

use crate::domain::ClientError;

pub use reqwest::Method;

/// Transport metadata returned alongside every decoded response, for caller
/// inspection (status code, rate-limit headers).
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// One HTTP exchange against the service (for mocking).
///
/// Implementations own everything below the resource layer: request
/// serialization, authentication, status classification, and parsing the
/// response body into a JSON value. Retry, rate limiting, and connection
/// management also live here, never in the callers.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<(Option<serde_json::Value>, ResponseMeta), ClientError>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Build on a caller-configured client. Timeouts, proxies and pooling
    /// are configured there, not at this layer.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            auth_header,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<(Option<serde_json::Value>, ResponseMeta), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Executing API request");

        let mut request = self
            .client
            .request(method, &url)
            .header(header::AUTHORIZATION, &self.auth_header);

        if let Some(pairs) = query {
            request = request.query(pairs);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(format!("Request failed: {}", e)))?;

        let meta = ResponseMeta {
            status: response.status(),
            headers: response.headers().clone(),
        };

        if !meta.status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ClientError::api(meta.status.as_u16(), error_body));
        }

        tracing::debug!(status = %meta.status, "API request completed");

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Failed to read response body: {}", e)))?;

        if text.trim().is_empty() {
            return Ok((None, meta));
        }

        let value = serde_json::from_str(&text)
            .map_err(|e| ClientError::decode(format!("Failed to parse response: {}", e)))?;

        Ok((Some(value), meta))
    }
}
