//! `GET /` server information page.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::catalog::{CatalogEntry, tool_catalog};
use crate::config::ServerConfig;

/// A header every MCP request is expected to carry.
#[derive(Debug, Serialize)]
pub struct HeaderParam {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

pub static HEADER_PARAMS: [HeaderParam; 2] = [
    HeaderParam {
        name: "X-Api-Key",
        description: "EspoCRM API key of an API user. Create one under Administration > API Users.",
        required: true,
    },
    HeaderParam {
        name: "X-Api-Address",
        description: "Base URL of the EspoCRM REST API, e.g. https://crm.example.com/api/v1",
        required: true,
    },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoPage {
    pub name: &'static str,
    pub version: &'static str,
    pub site_name: Option<String>,
    pub site_url: Option<String>,
    pub mcp_endpoint: &'static str,
    pub header_params: &'static [HeaderParam],
    pub privacy_policy_url: Option<String>,
    pub terms_of_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<CatalogEntry>>,
}

pub fn info_page(config: &ServerConfig) -> ServerInfoPage {
    ServerInfoPage {
        name: env!("CARGO_PKG_NAME"),
        version: crate::version(),
        site_name: config.site_name.clone(),
        site_url: config.site_url.clone(),
        mcp_endpoint: "/mcp",
        header_params: &HEADER_PARAMS,
        privacy_policy_url: config.site_page("privacy-policy"),
        terms_of_service_url: config.site_page("terms-of-service"),
        tools: config.show_tool_specs.then(tool_catalog),
    }
}

/// Axum handler for `GET /`.
pub async fn server_info(State(config): State<Arc<ServerConfig>>) -> Json<ServerInfoPage> {
    Json(info_page(&config))
}
