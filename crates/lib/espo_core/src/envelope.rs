//! Uniform result of every gateway call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure class recorded in [`ResponseEnvelope::error_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    /// The request never produced a usable HTTP response.
    Network,
    /// EspoCRM answered with a non-2xx status.
    Api,
}

/// Result of one EspoCRM call, success or failure.
///
/// All five keys are always serialized; absent values become `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status_code: Option<u16>,
    pub ok: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
    pub error_type: Option<ErrorType>,
}

impl ResponseEnvelope {
    /// Envelope for an HTTP response: `ok` iff the status is 2xx.
    pub fn from_status(status: u16, data: Option<Value>) -> Self {
        let ok = (200..300).contains(&status);
        Self {
            status_code: Some(status),
            ok,
            data,
            error: (!ok).then(|| format!("HTTP {status}")),
            error_type: (!ok).then_some(ErrorType::Api),
        }
    }

    /// Envelope for a transport failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            ok: false,
            data: None,
            error: Some(message.into()),
            error_type: Some(ErrorType::Network),
        }
    }

    /// Envelope for a call that was refused before any request was made
    /// (missing credentials, unusable parameters).
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            ok: false,
            data: None,
            error: Some(message.into()),
            error_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_statuses_are_ok() {
        for status in [200, 201, 204, 299] {
            let envelope = ResponseEnvelope::from_status(status, None);
            assert!(envelope.ok, "{status} should be ok");
            assert!(envelope.error.is_none());
            assert!(envelope.error_type.is_none());
        }
    }

    #[test]
    fn error_statuses_are_api_failures() {
        let envelope = ResponseEnvelope::from_status(404, Some(json!({"message": "nope"})));
        assert!(!envelope.ok);
        assert_eq!(envelope.status_code, Some(404));
        assert_eq!(envelope.error.as_deref(), Some("HTTP 404"));
        assert_eq!(envelope.error_type, Some(ErrorType::Api));
        assert_eq!(envelope.data, Some(json!({"message": "nope"})));
    }

    #[test]
    fn serializes_every_key() {
        let json = serde_json::to_value(ResponseEnvelope::network("connection refused"))
            .expect("serialize");
        assert_eq!(
            json,
            json!({
                "status_code": null,
                "ok": false,
                "data": null,
                "error": "connection refused",
                "error_type": "network",
            })
        );
    }

    #[test]
    fn rejected_calls_carry_no_error_type() {
        let json = serde_json::to_value(ResponseEnvelope::rejected("no key")).expect("serialize");
        assert_eq!(json["error"], "no key");
        assert!(json["error_type"].is_null());
        assert!(json["status_code"].is_null());
    }
}
