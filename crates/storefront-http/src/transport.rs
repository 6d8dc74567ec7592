//! Single entry point for all backend requests.
//!
//! Builds the URL, merges headers, sends the request through the backend and
//! unwraps the response envelope. Resource clients only supply a path, a
//! method and an optional body.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::unwrap_response;
use crate::error::HttpResult;
use crate::http::{HttpBackend, HttpRequest, Method};
use crate::url::Endpoint;

const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON text.
    Json(Value),
    /// Sent as-is.
    Text(String),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> HttpResult<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    fn into_wire(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers; these override the defaults, matched case-insensitively.
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self::with_method(Method::Delete, None)
    }

    pub fn post(body: RequestBody) -> Self {
        Self::with_method(Method::Post, Some(body))
    }

    pub fn put(body: RequestBody) -> Self {
        Self::with_method(Method::Put, Some(body))
    }

    pub fn patch(body: RequestBody) -> Self {
        Self::with_method(Method::Patch, Some(body))
    }

    const fn with_method(method: Method, body: Option<RequestBody>) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Default headers overlaid with the caller's; a caller header replaces a
/// default of the same name regardless of case.
fn merge_headers(custom: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![(
        DEFAULT_CONTENT_TYPE.0.to_string(),
        DEFAULT_CONTENT_TYPE.1.to_string(),
    )];

    for (name, value) in custom {
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => *slot = (name, value),
            None => headers.push((name, value)),
        }
    }
    headers
}

/// Request executor shared by all resource clients.
pub struct Transport<B: HttpBackend> {
    backend: Arc<B>,
    endpoint: Endpoint,
}

impl<B: HttpBackend> Clone for Transport<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<B: HttpBackend> Transport<B> {
    pub fn new(backend: B, endpoint: Endpoint) -> Self {
        Self {
            backend: Arc::new(backend),
            endpoint,
        }
    }

    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send a request and decode the unwrapped payload into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> HttpResult<T> {
        let payload = self.send(path, options).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Send a request whose payload is not needed (e.g. DELETE).
    pub async fn request_unit(&self, path: &str, options: RequestOptions) -> HttpResult<()> {
        self.send(path, options).await.map(|_| ())
    }

    async fn send(&self, path: &str, options: RequestOptions) -> HttpResult<Value> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;

        let request = HttpRequest {
            method,
            url: self.endpoint.url_for(path)?,
            headers: merge_headers(headers),
            body: body.map(RequestBody::into_wire),
        };
        let url = request.url.clone();

        debug!(%method, %url, "Sending request");
        let response = self.backend.execute(request).await?;
        debug!(%method, %url, status = response.status, "Received response");

        unwrap_response(&response).inspect_err(|e| {
            warn!(%method, %url, status = response.status, error = %e, "Request failed");
        })
    }
}
