//! Per-request EspoCRM credentials.

use std::fmt;

use crate::client::EspoApi;

/// API key and instance address supplied by the caller of a single request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_address: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_address: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_address: api_address.into(),
        }
    }

    /// Build a gateway client for these credentials on a shared HTTP client.
    pub fn client(&self, http: reqwest::Client) -> EspoApi {
        EspoApi::with_http_client(http, &self.api_address, &self.api_key)
    }
}

// Keep the API key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_address", &self.api_address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_key() {
        let creds = Credentials::new("secret-key", "https://crm.example.com/api/v1");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("crm.example.com"));
    }

    #[test]
    fn client_uses_the_address_as_base_url() {
        let creds = Credentials::new("k", "https://crm.example.com/api/v1/");
        let api = creds.client(reqwest::Client::new());
        assert_eq!(api.base_url(), "https://crm.example.com/api/v1");
    }
}
