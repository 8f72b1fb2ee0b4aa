//! Gateway error types.
//!
//! These never cross the [`EspoApi::call`](crate::EspoApi::call) boundary:
//! the client converts them into a [`ResponseEnvelope`](crate::ResponseEnvelope).

use thiserror::Error;

/// Errors raised while building a request for EspoCRM.
#[derive(Debug, Error)]
pub enum EspoError {
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Invalid value for header {0}")]
    InvalidHeaderValue(String),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid record id: {0:?}")]
    InvalidRecordId(String),

    #[error("Parameters must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
