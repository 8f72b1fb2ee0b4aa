// @zen-component: MCP-Auth
//
//! EspoCRM credential middleware.
//!
//! Reads `X-Api-Key` and `X-Api-Address` from every inbound request and
//! records the outcome in the request extensions. Requests are always
//! forwarded: a missing credential surfaces later as a not-authenticated
//! envelope from whichever tool was called, not as an HTTP error.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use espo_core::Credentials;
use tracing::{debug, error};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_ADDRESS_HEADER: &str = "x-api-address";

/// Message used when no auth outcome was recorded for the request at all.
pub const MISSING_CONTEXT_MESSAGE: &str = "User has not set API key in headers.";

/// Why a request carries no usable credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(
        "X-API-KEY is a required header parameter. Please create an API key to access the EspoCRM API."
    )]
    MissingApiKey,

    #[error(
        "X-API-ADDRESS is a required header parameter. Please provide an API address to access the EspoCRM API."
    )]
    MissingApiAddress,

    #[error("User has not set API key in headers.")]
    MissingContext,
}

/// Auth outcome attached to each request by [`espo_auth_middleware`].
#[derive(Debug, Clone)]
pub enum RequestAuth {
    Authenticated(Credentials),
    Rejected(AuthError),
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve credentials from request headers. The key is checked first.
pub fn resolve_auth(headers: &HeaderMap) -> RequestAuth {
    let Some(api_key) = header_value(headers, API_KEY_HEADER) else {
        return RequestAuth::Rejected(AuthError::MissingApiKey);
    };
    let Some(api_address) = header_value(headers, API_ADDRESS_HEADER) else {
        return RequestAuth::Rejected(AuthError::MissingApiAddress);
    };
    RequestAuth::Authenticated(Credentials::new(api_key, api_address))
}

/// Axum middleware: attaches a [`RequestAuth`] to the request extensions.
pub async fn espo_auth_middleware(mut request: Request, next: Next) -> Response {
    let auth = resolve_auth(request.headers());
    if let RequestAuth::Rejected(reason) = &auth {
        debug!("MCP auth: {reason}");
    }
    request.extensions_mut().insert(auth);
    next.run(request).await
}

/// Read the credentials recorded by the middleware.
///
/// rmcp hands tool handlers the `http::request::Parts` of the inbound
/// request, extensions included.
pub fn extract_auth(parts: &http::request::Parts) -> Result<Credentials, AuthError> {
    let result = match parts.extensions.get::<RequestAuth>() {
        Some(RequestAuth::Authenticated(creds)) => Ok(creds.clone()),
        Some(RequestAuth::Rejected(reason)) => Err(reason.clone()),
        None => Err(AuthError::MissingContext),
    };
    if let Err(reason) = &result {
        error!("EspoCRM auth rejected: {reason}");
    }
    result
}
