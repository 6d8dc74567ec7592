//! HTTP backend abstraction for the storefront API.
//!
//! The backend performs exactly one HTTP exchange per call and returns the
//! raw status, content type and body. Status interpretation and envelope
//! decoding live in the transport, so the same rules apply to any backend.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::ClientConfig;
use crate::error::HttpResult;

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP methods used by the resource clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A fully prepared request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// Final header list, already merged.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Plain GET without headers or body.
    pub const fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Value of a header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase for the status, e.g. `Not Found`.
    pub status_text: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the body should be decoded as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can perform a single request.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the core
/// port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send the request and return the raw response, whatever its status.
    async fn execute(&self, request: HttpRequest) -> HttpResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries: every call is exactly one attempt.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> HttpResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: HttpRequest) -> HttpResult<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            content_type,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = ClientConfig::with_static_base("http://localhost:8080")
            .with_timeout(std::time::Duration::from_secs(3));
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    #[test]
    fn test_is_json_ignores_charset_and_case() {
        let response = RawResponse {
            status: 200,
            status_text: None,
            content_type: Some("Application/JSON; charset=UTF-8".to_string()),
            body: String::new(),
        };
        assert!(response.is_json());
        assert!(response.is_success());
    }

    #[test]
    fn test_request_header_lookup_is_case_insensitive() {
        let mut request = HttpRequest::get(Url::parse("http://x/a").unwrap());
        request
            .headers
            .push(("Content-Type".to_string(), "text/plain".to_string()));
        assert_eq!(request.header("content-type"), Some("text/plain"));
        assert_eq!(request.header("accept"), None);
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_matches_method_and_url() {
            let backend = FakeBackend::new()
                .with_response("DELETE http://x/products/1", CannedResponse::no_content())
                .with_response("/products/1", CannedResponse::json(200, json!({"id": 1})));

            let url = Url::parse("http://x/products/1").unwrap();
            let response = backend.execute(HttpRequest::get(url)).await.unwrap();

            assert_eq!(response.status, 200);
            assert_eq!(backend.requests().len(), 1);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("http://x/unknown").unwrap();
            let response = backend.execute(HttpRequest::get(url)).await.unwrap();
            assert_eq!(response.status, 404);
        }
    }
}
