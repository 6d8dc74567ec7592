//! Response body decoding and envelope unwrapping.
//!
//! The backend wraps most payloads as
//! `{"success": true, "data": ...}` or
//! `{"success": false, "error": {"code": ..., "message": ...}}`.
//! Some endpoints (and proxies in front of them) answer with a bare body
//! instead, so both shapes are accepted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{HttpError, HttpResult};
use crate::http::RawResponse;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

/// Error details of a failure envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The backend's response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEnvelope {
    Success { data: Value },
    Failure { error: ApiErrorBody },
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

impl ApiEnvelope {
    /// Interpret a JSON body as an envelope.
    ///
    /// Returns `None` when the body is not an object with a boolean
    /// `success` field.
    pub fn from_json(json: &Value) -> Option<Self> {
        if !json.get("success").is_some_and(Value::is_boolean) {
            return None;
        }
        let raw: RawEnvelope = serde_json::from_value(json.clone()).ok()?;

        Some(if raw.success {
            Self::Success { data: raw.data }
        } else {
            Self::Failure {
                error: raw.error.unwrap_or_default(),
            }
        })
    }
}

/// Decode the body as JSON when the content type says so, else as text.
///
/// An empty JSON body decodes to `null`.
pub fn decode_body(response: &RawResponse) -> HttpResult<Body> {
    if !response.is_json() {
        return Ok(Body::Text(response.body.clone()));
    }
    if response.body.trim().is_empty() {
        return Ok(Body::Json(Value::Null));
    }
    Ok(Body::Json(serde_json::from_str(&response.body)?))
}

/// `error.message` of a non-envelope JSON error body, if present.
fn nested_error_message(json: &Value) -> Option<String> {
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn status_message(response: &RawResponse) -> String {
    response
        .status_text
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", response.status))
}

/// Turn a raw response into the payload value or an API error.
///
/// A 2xx response yields the envelope's `data`, or the whole body when it is
/// not an envelope. Anything else fails with the most specific message
/// available: the envelope's `error.message`, then the serialized body, then
/// the status text.
pub fn unwrap_response(response: &RawResponse) -> HttpResult<Value> {
    let status = response.status;
    let ok = response.is_success();

    let json = match decode_body(response)? {
        Body::Text(text) if ok => return Ok(Value::String(text)),
        Body::Text(text) => {
            return Err(HttpError::Api {
                status,
                code: None,
                message: if text.trim().is_empty() {
                    status_message(response)
                } else {
                    text
                },
            });
        }
        Body::Json(json) => json,
    };

    match ApiEnvelope::from_json(&json) {
        Some(ApiEnvelope::Success { data }) if ok => Ok(data),
        Some(ApiEnvelope::Failure { error }) => Err(HttpError::Api {
            status,
            code: error.code,
            message: error.message.unwrap_or_else(|| json.to_string()),
        }),
        None if ok => Ok(match json {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        }),
        _ if json.is_null() => Err(HttpError::Api {
            status,
            code: None,
            message: status_message(response),
        }),
        _ => Err(HttpError::Api {
            status,
            code: None,
            message: nested_error_message(&json).unwrap_or_else(|| json.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_response(status: u16, body: &Value) -> RawResponse {
        RawResponse {
            status,
            status_text: None,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    fn text_response(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: Some(status_text.to_string()),
            content_type: Some("text/html".to_string()),
            body: body.to_string(),
        }
    }

    fn api_error(result: HttpResult<Value>) -> (u16, Option<String>, String) {
        match result {
            Err(HttpError::Api {
                status,
                code,
                message,
            }) => (status, code, message),
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_envelope_yields_data() {
        let response = json_response(200, &json!({"success": true, "data": {"id": 7}}));
        assert_eq!(unwrap_response(&response).unwrap(), json!({"id": 7}));
    }

    #[test]
    fn test_bare_body_passes_through() {
        let response = json_response(200, &json!({"id": 7, "name": "Cap"}));
        assert_eq!(
            unwrap_response(&response).unwrap(),
            json!({"id": 7, "name": "Cap"})
        );
    }

    #[test]
    fn test_failure_envelope_on_2xx_is_error() {
        let response = json_response(
            200,
            &json!({"success": false, "error": {"code": "BUSINESS_ERROR", "message": "Insufficient stock"}}),
        );
        let (status, code, message) = api_error(unwrap_response(&response));
        assert_eq!(status, 200);
        assert_eq!(code.as_deref(), Some("BUSINESS_ERROR"));
        assert_eq!(message, "Insufficient stock");
    }

    #[test]
    fn test_error_envelope_message_preferred() {
        let response = json_response(
            404,
            &json!({"success": false, "error": {"code": "NOT_FOUND", "message": "Product not found: 9"}}),
        );
        let (status, code, message) = api_error(unwrap_response(&response));
        assert_eq!(status, 404);
        assert_eq!(code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(message, "Product not found: 9");
    }

    #[test]
    fn test_non_envelope_json_error_is_serialized() {
        let body = json!({"timestamp": "2024-01-01", "status": 500, "error": "Internal Server Error"});
        let (status, code, message) = api_error(unwrap_response(&json_response(500, &body)));
        assert_eq!(status, 500);
        assert!(code.is_none());
        assert_eq!(message, body.to_string());
    }

    #[test]
    fn test_nested_error_message_without_success_flag() {
        let body = json!({"error": {"message": "Bad things"}});
        let (_, _, message) = api_error(unwrap_response(&json_response(400, &body)));
        assert_eq!(message, "Bad things");
    }

    #[test]
    fn test_text_error_uses_body_then_status_text() {
        let (status, _, message) =
            api_error(unwrap_response(&text_response(502, "Bad Gateway", "upstream down")));
        assert_eq!(status, 502);
        assert_eq!(message, "upstream down");

        let (_, _, message) = api_error(unwrap_response(&text_response(502, "Bad Gateway", "")));
        assert_eq!(message, "Bad Gateway");
    }

    #[test]
    fn test_text_success_is_string() {
        let response = text_response(200, "OK", "pong");
        assert_eq!(unwrap_response(&response).unwrap(), json!("pong"));
    }

    #[test]
    fn test_empty_json_body_decodes_to_null() {
        let response = RawResponse {
            status: 200,
            status_text: None,
            content_type: Some("application/json".to_string()),
            body: String::new(),
        };
        assert_eq!(decode_body(&response).unwrap(), Body::Json(Value::Null));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let response = RawResponse {
            status: 200,
            status_text: None,
            content_type: Some("application/json".to_string()),
            body: "{oops".to_string(),
        };
        assert!(matches!(
            unwrap_response(&response),
            Err(HttpError::JsonParse(_))
        ));
    }
}
