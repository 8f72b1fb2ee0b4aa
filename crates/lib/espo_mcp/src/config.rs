//! MCP server configuration.

use std::time::Duration;

use espo_core::client::DEFAULT_TIMEOUT;

/// Configuration for the MCP router.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Display name of the hosting site, shown on the info page.
    pub site_name: Option<String>,
    /// Public URL of the hosting site; privacy and terms links hang off it.
    pub site_url: Option<String>,
    /// Timeout applied to every outbound EspoCRM call.
    pub request_timeout: Duration,
    /// Include the tool catalog on the info page.
    pub show_tool_specs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".into(),
            site_name: None,
            site_url: None,
            request_timeout: DEFAULT_TIMEOUT,
            show_tool_specs: true,
        }
    }
}

impl ServerConfig {
    /// `<site_url>/<page>` with exactly one slash, if a site URL is set.
    pub fn site_page(&self, page: &str) -> Option<String> {
        self.site_url
            .as_deref()
            .map(|url| format!("{}/{}", url.trim_end_matches('/'), page))
    }
}
