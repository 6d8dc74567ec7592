//! Public configuration for the backend client.
//!
//! The base URL is either given directly or read once from a runtime config
//! document (a JSON object with an `API_BASE` field). Every request path is
//! then `{base}{api_prefix}{resource path}`.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{HttpError, HttpResult};
use crate::http::{HttpBackend, HttpRequest};

/// Prefix inserted between the base URL and every resource path.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Field of the runtime config document holding the base URL.
pub const API_BASE_KEY: &str = "API_BASE";

/// Where the backend base URL comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBaseSource {
    /// A base URL known up front.
    Static(String),
    /// URL of a JSON document carrying the base URL under `API_BASE`.
    Document(String),
}

/// Configuration for the backend client.
///
/// # Example
///
/// ```
/// use storefront_http::{ApiBaseSource, ClientConfig};
/// use std::time::Duration;
///
/// let config = ClientConfig::new(ApiBaseSource::Static("http://localhost:8080".into()))
///     .with_api_prefix("/api/v2")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base: ApiBaseSource,
    pub(crate) api_prefix: String,
    pub(crate) user_agent: String,
    /// No timeout unless one is set.
    pub(crate) timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL source.
    #[must_use]
    pub fn new(base: ApiBaseSource) -> Self {
        Self {
            base,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            user_agent: concat!("storefront-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }

    /// Configuration with a fixed base URL.
    #[must_use]
    pub fn with_static_base(url: impl Into<String>) -> Self {
        Self::new(ApiBaseSource::Static(url.into()))
    }

    /// Configuration whose base URL is read from a runtime config document.
    #[must_use]
    pub fn from_document(url: impl Into<String>) -> Self {
        Self::new(ApiBaseSource::Document(url.into()))
    }

    /// Use a fixed base URL, replacing any configured source.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base = ApiBaseSource::Static(url.into());
        self
    }

    /// Set the path prefix placed before every resource path.
    ///
    /// Defaults to `/api/v1`. A leading slash is added and a trailing slash
    /// removed; an empty prefix is allowed.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = normalize_prefix(&prefix.into());
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a per-request timeout. There is none by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base(&self) -> &ApiBaseSource {
        &self.base
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Validate a base URL and strip trailing slashes.
fn normalize_base(raw: &str) -> HttpResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(HttpError::ConfigMissing {
            message: "backend base URL is empty".to_string(),
        });
    }
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

/// Resolve the base URL once, fetching the runtime config document if needed.
pub(crate) async fn resolve_base_url<B: HttpBackend>(
    backend: &B,
    source: &ApiBaseSource,
) -> HttpResult<String> {
    let document_url = match source {
        ApiBaseSource::Static(url) => return normalize_base(url),
        ApiBaseSource::Document(url) => Url::parse(url)?,
    };

    debug!(url = %document_url, "Fetching runtime config");
    let response = backend.execute(HttpRequest::get(document_url.clone())).await?;
    if !response.is_success() {
        return Err(HttpError::ConfigMissing {
            message: format!(
                "runtime config {document_url} returned status {}",
                response.status
            ),
        });
    }

    let document: Value = serde_json::from_str(&response.body)?;
    let base = document
        .get(API_BASE_KEY)
        .and_then(Value::as_str)
        .filter(|base| !base.trim().is_empty())
        .ok_or_else(|| HttpError::ConfigMissing {
            message: format!("runtime config {document_url} has no {API_BASE_KEY} value"),
        })?;

    normalize_base(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::with_static_base("http://localhost:8080");
        assert_eq!(config.api_prefix, "/api/v1");
        assert!(config.user_agent.contains("storefront-http"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::from_document("http://cdn.local/config.json")
            .with_api_prefix("api/v2/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(
            config.base(),
            &ApiBaseSource::Document("http://cdn.local/config.json".to_string())
        );
        assert_eq!(config.api_prefix(), "/api/v2");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_base_url_overrides_document() {
        let config = ClientConfig::from_document("http://cdn.local/config.json")
            .with_base_url("http://localhost:8080");
        assert_eq!(
            config.base(),
            &ApiBaseSource::Static("http://localhost:8080".to_string())
        );
    }

    #[test]
    fn test_empty_prefix_allowed() {
        let config = ClientConfig::with_static_base("http://x").with_api_prefix("/");
        assert_eq!(config.api_prefix(), "");
    }

    #[tokio::test]
    async fn test_static_base_trims_trailing_slash() {
        let backend = FakeBackend::new();
        let base = resolve_base_url(
            &backend,
            &ApiBaseSource::Static("http://localhost:8080/".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(base, "http://localhost:8080");
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_static_base_is_config_missing() {
        let backend = FakeBackend::new();
        let result = resolve_base_url(&backend, &ApiBaseSource::Static("  ".to_string())).await;
        assert!(matches!(result, Err(HttpError::ConfigMissing { .. })));
    }

    #[tokio::test]
    async fn test_document_base_is_fetched() {
        let backend = FakeBackend::new().with_response(
            "config.json",
            CannedResponse::json(200, json!({"API_BASE": "https://shop.example.com/"})),
        );

        let base = resolve_base_url(
            &backend,
            &ApiBaseSource::Document("https://cdn.example.com/config.json".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(base, "https://shop.example.com");
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_document_without_api_base_fails_fast() {
        let backend = FakeBackend::new()
            .with_response("config.json", CannedResponse::json(200, json!({"OTHER": 1})));

        let result = resolve_base_url(
            &backend,
            &ApiBaseSource::Document("https://cdn.example.com/config.json".to_string()),
        )
        .await;

        assert!(matches!(result, Err(HttpError::ConfigMissing { .. })));
    }

    #[tokio::test]
    async fn test_document_fetch_failure_is_config_missing() {
        let backend = FakeBackend::new();
        let result = resolve_base_url(
            &backend,
            &ApiBaseSource::Document("https://cdn.example.com/config.json".to_string()),
        )
        .await;

        assert!(matches!(result, Err(HttpError::ConfigMissing { .. })));
    }
}
