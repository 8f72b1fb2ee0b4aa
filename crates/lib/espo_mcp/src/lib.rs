//! # espo_mcp
//!
//! MCP (Model Context Protocol) server exposing EspoCRM CRUD tools.
//!
//! Provides a Streamable HTTP MCP endpoint at `/mcp` plus an unauthenticated
//! info page at `/`. EspoCRM credentials travel with each request in the
//! `X-Api-Key` and `X-Api-Address` headers; nothing is stored server-side.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod hooks;
pub mod info;
pub mod server;
pub mod tools;

use std::sync::Arc;

use axum::routing::get;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build an Axum router serving the MCP endpoint and the info page.
///
/// # Arguments
///
/// * `config`: resolved server configuration.
/// * `ct`: cancellation token for graceful shutdown of SSE streams.
pub fn mcp_router(config: ServerConfig, ct: CancellationToken) -> axum::Router {
    mcp_router_with_hooks(config, ct, hooks::default_pipeline())
}

/// Build the router with a caller-supplied hook pipeline.
pub fn mcp_router_with_hooks(
    config: ServerConfig,
    ct: CancellationToken,
    pipeline: hooks::HookPipeline,
) -> axum::Router {
    let http = reqwest::Client::new();
    let request_timeout = config.request_timeout;
    let hook_pipeline = Arc::new(pipeline);

    let service: StreamableHttpService<server::EspoMcpServer, LocalSessionManager> =
        StreamableHttpService::new(
            move || {
                Ok(server::EspoMcpServer::new(
                    http.clone(),
                    request_timeout,
                    hook_pipeline.clone(),
                ))
            },
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: true,
                cancellation_token: ct,
                ..Default::default()
            },
        );

    let mcp = axum::Router::new()
        .nest_service("/mcp", service)
        .layer(axum::middleware::from_fn(auth::espo_auth_middleware));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/", get(info::server_info))
        .with_state(Arc::new(config))
        .merge(mcp)
        .layer(cors)
}
