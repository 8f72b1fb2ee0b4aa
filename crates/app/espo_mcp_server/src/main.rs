//! EspoCRM MCP gateway server binary.
//!
//! Serves the Streamable HTTP MCP endpoint at `/mcp` and the info page at
//! `/`. Runs until Ctrl-C, then drains open sessions.

use std::time::Duration;

use clap::Parser;
use espo_mcp::config::ServerConfig;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "info,espo_mcp=debug,espo_core=debug";

/// CLI arguments for the gateway server.
#[derive(Parser, Debug)]
#[command(name = "espo_mcp_server", about = "EspoCRM MCP gateway server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind_addr: String,

    /// Timeout in seconds for each outbound EspoCRM request.
    #[arg(long, env = "ESPO_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    request_timeout_secs: u64,

    /// Display name shown on the info page.
    #[arg(long, env = "SITE_NAME")]
    site_name: Option<String>,

    /// Public site URL; privacy and terms links are derived from it.
    #[arg(long, env = "SITE_URL")]
    site_url: Option<String>,

    /// Leave the tool catalog off the info page.
    #[arg(long, env = "HIDE_TOOL_SPECS", default_value_t = false)]
    hide_tool_specs: bool,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind_addr,
            site_name: self.site_name,
            site_url: self.site_url,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            show_tool_specs: !self.hide_tool_specs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout stays quiet.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        version = espo_mcp::version(),
        core_version = espo_core::version(),
        timeout_secs = config.request_timeout.as_secs(),
        tool_specs = config.show_tool_specs,
        "starting espo_mcp_server"
    );

    let ct = CancellationToken::new();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    let app = espo_mcp::mcp_router(config, ct.clone());

    info!(addr = %local_addr, "MCP endpoint at http://{local_addr}/mcp");

    axum::serve(listener, app)
        .with_graceful_shutdown({
            let ct = ct.clone();
            async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("failed to listen for shutdown signal: {e}");
                }
                info!("shutdown requested");
                ct.cancel();
            }
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_server_config() {
        let config = Args::parse_from(["espo_mcp_server"]).into_config();
        assert_eq!(config.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.show_tool_specs);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Args::parse_from([
            "espo_mcp_server",
            "--bind-addr",
            "0.0.0.0:9000",
            "--request-timeout-secs",
            "30",
            "--site-url",
            "https://mcp.example.com",
            "--hide-tool-specs",
        ])
        .into_config();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.site_url.as_deref(), Some("https://mcp.example.com"));
        assert!(!config.show_tool_specs);
    }
}
