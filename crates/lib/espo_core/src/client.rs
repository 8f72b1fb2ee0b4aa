// @zen-component: ESPO-GatewayClient
//
//! HTTP gateway to a single EspoCRM instance.
//!
//! [`EspoApi::call`] never fails: every outcome, including transport errors,
//! is folded into a [`ResponseEnvelope`].

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::envelope::ResponseEnvelope;
use crate::error::EspoError;
use crate::query::http_build_query;

/// Header carrying the EspoCRM API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Header EspoCRM uses to explain a failed request.
pub const STATUS_REASON_HEADER: &str = "X-Status-Reason";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Statuses that are not worth a log line.
const QUIET_STATUSES: [u16; 3] = [200, 201, 204];

/// Per-call options for [`EspoApi::call`].
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub extra_headers: BTreeMap<String, String>,
    pub timeout: Duration,
    pub force_query_params: bool,
    pub allow_non_2xx: bool,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            extra_headers: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
            force_query_params: false,
            allow_non_2xx: false,
        }
    }
}

impl CallOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.extra_headers.extend(headers);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn force_query_params(mut self, force: bool) -> Self {
        self.force_query_params = force;
        self
    }

    pub fn allow_non_2xx(mut self, allow: bool) -> Self {
        self.allow_non_2xx = allow;
        self
    }
}

/// A fully resolved outbound request, ready to send.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body; `None` when the params travel in the query string.
    pub body: Option<Value>,
}

/// Parse an HTTP verb accepted by the gateway.
pub fn parse_method(method: &str) -> Result<Method, EspoError> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PATCH" => Ok(Method::PATCH),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(EspoError::UnsupportedMethod(method.to_string())),
    }
}

fn sends_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PATCH || *method == Method::PUT
}

/// Client for one EspoCRM base URL and API key.
#[derive(Debug, Clone)]
pub struct EspoApi {
    base_url: String,
    api_key: String,
    default_headers: BTreeMap<String, String>,
    http: reqwest::Client,
}

impl EspoApi {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Build a client that shares an existing connection pool.
    pub fn with_http_client(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            default_headers: BTreeMap::new(),
            http,
        }
    }

    pub fn with_default_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `action` against the base URL. Absolute URLs pass through.
    pub fn normalize_url(&self, action: Option<&str>) -> String {
        match action {
            None => self.base_url.clone(),
            Some(a) if a.starts_with("http://") || a.starts_with("https://") => a.to_string(),
            Some(a) => format!("{}/{}", self.base_url, a.trim_start_matches('/')),
        }
    }

    fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), EspoError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| EspoError::InvalidHeaderName(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| EspoError::InvalidHeaderValue(name.as_str().to_string()))?;
        headers.insert(name, value);
        Ok(())
    }

    /// Resolve URL, headers and payload without sending anything.
    pub fn prepare(
        &self,
        method: Method,
        action: Option<&str>,
        params: &Map<String, Value>,
        options: &CallOptions,
    ) -> Result<PreparedRequest, EspoError> {
        let mut url = self.normalize_url(action);

        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(&options.extra_headers) {
            Self::insert_header(&mut headers, name, value)?;
        }
        Self::insert_header(&mut headers, API_KEY_HEADER, &self.api_key)?;

        let mut body = None;
        if sends_body(&method) && !options.force_query_params {
            if !params.is_empty() {
                body = Some(Value::Object(params.clone()));
            }
        } else {
            let query = http_build_query(&Value::Object(params.clone()));
            if !query.is_empty() {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&query);
            }
        }

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Perform one request and fold the outcome into an envelope.
    ///
    /// Network envelopes normally carry no status. The exception is a body
    /// that fails to read after the status line arrived: `status_code` keeps
    /// that status while `error_type` is `network`.
    pub async fn call(
        &self,
        method: Method,
        action: Option<&str>,
        params: &Map<String, Value>,
        options: &CallOptions,
    ) -> ResponseEnvelope {
        let prepared = match self.prepare(method, action, params, options) {
            Ok(prepared) => prepared,
            Err(e) => return ResponseEnvelope::network(e.to_string()),
        };
        let path = action.unwrap_or("");
        debug!(method = %prepared.method, url = %prepared.url, "EspoAPI request");

        let mut builder = self
            .http
            .request(prepared.method.clone(), &prepared.url)
            .headers(prepared.headers)
            .timeout(options.timeout);
        if let Some(body) = &prepared.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(method = %prepared.method, path, "EspoAPI transport failure: {e}");
                return ResponseEnvelope::network(e.to_string());
            }
        };

        let status = response.status().as_u16();
        if !options.allow_non_2xx && !QUIET_STATUSES.contains(&status) {
            let reason = response
                .headers()
                .get(STATUS_REASON_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("Unknown Error");
            let message = format!(
                "EspoAPI {} {} returned status {}: {}",
                prepared.method, path, status, reason
            );
            if status >= 500 {
                error!("{message}");
            } else {
                warn!("{message}");
            }
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                let mut envelope = ResponseEnvelope::network(e.to_string());
                envelope.status_code = Some(status);
                return envelope;
            }
        };

        ResponseEnvelope::from_status(status, decode_body(&bytes))
    }

    /// Like [`call`](Self::call) but returns only the response data.
    pub async fn request(
        &self,
        method: Method,
        action: Option<&str>,
        params: &Map<String, Value>,
        options: &CallOptions,
    ) -> Option<Value> {
        self.call(method, action, params, options).await.data
    }
}

/// JSON when it parses, raw text otherwise, `None` for an empty body.
fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
