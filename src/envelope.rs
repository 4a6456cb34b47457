//! Canonical response envelope and the normalization of raw server bodies.
//!
//! Endpoints historically answer with different shapes: the payload may sit
//! under `data`, under `result`, or be the body itself, and pagination may be
//! flat or nested under `pagination`. Everything that maps those shapes onto
//! [`ApiResponse`] lives in this module.

use crate::error::ClientError;
use log::warn;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

// Payload keys, in order of preference. The whole body is the last resort.
const PAYLOAD_KEYS: [&str; 2] = ["data", "result"];

/// The envelope every client method returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// True only when the server answered with a 2xx status
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// A failed envelope carrying `message` as both error and message.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            data: None,
            error: Some(message.clone()),
            message: Some(message),
            page: None,
            limit: None,
            total: None,
            total_pages: None,
        }
    }

    /// Convert a transport, serialization or runtime error into a failed
    /// envelope.
    pub fn from_error(err: &ClientError) -> Self {
        Self::failure(err.user_message())
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The error text, or an empty string for successful envelopes
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    /// Pagination fields carried by this envelope
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Transform the payload, keeping every other field
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            message: self.message,
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Payload of a successful call, or the error text of a failed one
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

impl ApiResponse<Value> {
    /// Deserialize the normalized payload into the call site's type.
    ///
    /// `success` and pagination always reflect the HTTP exchange. A payload
    /// that does not fit `T` leaves `data` empty and the decode detail in
    /// `message`.
    pub fn decode<T: DeserializeOwned>(self) -> ApiResponse<T> {
        let ApiResponse {
            success,
            data,
            error,
            message,
            page,
            limit,
            total,
            total_pages,
        } = self;

        let (data, message) = match data.map(serde_json::from_value::<T>).transpose() {
            Ok(data) => (data, message),
            Err(e) => {
                warn!("Response payload did not match the expected type: {}", e);
                (None, Some(format!("Unexpected response format: {}", e)))
            }
        };

        ApiResponse {
            success,
            data,
            error,
            message,
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Pagination metadata hoisted onto the envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
}

impl Pagination {
    /// Read pagination from a raw body. A field in a nested `pagination`
    /// object wins over the same top-level field.
    pub fn extract(body: &Value) -> Self {
        let nested = body.get("pagination").filter(|value| value.is_object());
        let field = |name: &str| {
            nested
                .and_then(|pagination| as_count(pagination.get(name)))
                .or_else(|| as_count(body.get(name)))
        };

        Self {
            page: field("page"),
            limit: field("limit"),
            total: field("total"),
            total_pages: field("totalPages"),
        }
    }
}

fn as_count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Status and parsed body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RawResponse {
    /// Parse a response body. Empty, malformed or `null` bodies become `{}`.
    pub fn parse(status: StatusCode, text: &str) -> Self {
        let body = match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) | Err(_) => Value::Object(Map::new()),
            Ok(value) => value,
        };
        Self { status, body }
    }

    /// Map the raw exchange onto the envelope.
    pub fn normalize(self) -> ApiResponse<Value> {
        let RawResponse { status, body } = self;

        if !status.is_success() {
            let text = string_field(&body, "message")
                .or_else(|| string_field(&body, "error"))
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            return ApiResponse::failure(text);
        }

        let pagination = Pagination::extract(&body);
        let message = string_field(&body, "message");

        ApiResponse {
            success: true,
            data: Some(select_payload(body)),
            error: None,
            message,
            page: pagination.page,
            limit: pagination.limit,
            total: pagination.total,
            total_pages: pagination.total_pages,
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// `data`, else `result`, else the whole body. Null counts as absent.
fn select_payload(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            let key = PAYLOAD_KEYS
                .iter()
                .find(|key| map.get(**key).is_some_and(|value| !value.is_null()));
            match key {
                Some(key) => map.remove(*key).unwrap_or_default(),
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: Value) -> ApiResponse<Value> {
        RawResponse {
            status: StatusCode::OK,
            body,
        }
        .normalize()
    }

    #[test]
    fn data_field_is_preferred() {
        let env = ok(json!({"success": true, "data": {"id": 1}, "result": {"id": 2}}));
        assert!(env.success);
        assert_eq!(env.data, Some(json!({"id": 1})));
    }

    #[test]
    fn result_field_is_used_without_data() {
        let env = ok(json!({"result": [1, 2, 3]}));
        assert_eq!(env.data, Some(json!([1, 2, 3])));
    }

    #[test]
    fn null_data_falls_through_to_result() {
        let env = ok(json!({"data": null, "result": "done"}));
        assert_eq!(env.data, Some(json!("done")));
    }

    #[test]
    fn whole_body_is_the_last_resort() {
        let body = json!({"success": true, "admins": [{"id": "a"}], "total": 37});
        let env = ok(body.clone());
        assert_eq!(env.data, Some(body));
        assert_eq!(env.total, Some(37));
        assert_eq!(env.page, None);
    }

    #[test]
    fn nested_pagination_is_hoisted() {
        let env = ok(json!({
            "data": [],
            "pagination": {"total": 42, "page": 2, "limit": 10, "totalPages": 5}
        }));
        assert_eq!(env.total, Some(42));
        assert_eq!(env.page, Some(2));
        assert_eq!(env.limit, Some(10));
        assert_eq!(env.total_pages, Some(5));
    }

    #[test]
    fn nested_pagination_wins_over_top_level() {
        let pagination = Pagination::extract(&json!({
            "total": 99,
            "page": "3",
            "pagination": {"total": 42}
        }));
        assert_eq!(pagination.total, Some(42));
        assert_eq!(pagination.page, Some(3));
        assert_eq!(pagination.limit, None);
    }

    #[test]
    fn failure_prefers_message_then_error_then_status() {
        let failed = |body: Value| {
            RawResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body,
            }
            .normalize()
        };

        let env = failed(json!({"message": "Internal error", "error": "ignored"}));
        assert!(!env.success);
        assert_eq!(env.error.as_deref(), Some("Internal error"));
        assert_eq!(env.data, None);

        let env = failed(json!({"error": "Boom"}));
        assert_eq!(env.error.as_deref(), Some("Boom"));

        let env = failed(json!({"message": ""}));
        assert_eq!(env.error.as_deref(), Some("Request failed with status 500"));
    }

    #[test]
    fn malformed_bodies_parse_as_empty_objects() {
        for text in ["", "<html>oops</html>", "null"] {
            let raw = RawResponse::parse(StatusCode::OK, text);
            assert_eq!(raw.body, json!({}));
        }
    }

    #[test]
    fn decode_mismatch_keeps_success_and_pagination() {
        let env = ok(json!({"data": "not a number", "total": 3})).decode::<u32>();
        assert!(env.success);
        assert_eq!(env.data, None);
        assert_eq!(env.error, None);
        assert_eq!(env.total, Some(3));
        assert!(env
            .message
            .as_deref()
            .is_some_and(|m| m.starts_with("Unexpected response format")));
    }

    #[test]
    fn decode_of_failed_envelope_keeps_error() {
        let env = RawResponse {
            status: StatusCode::BAD_REQUEST,
            body: json!({"message": "Bad id"}),
        }
        .normalize()
        .decode::<u32>();
        assert!(!env.success);
        assert_eq!(env.error.as_deref(), Some("Bad id"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let env = ok(json!({"data": [], "totalPages": 4}));
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["totalPages"], json!(4));
        assert!(value.get("error").is_none());
    }
}
