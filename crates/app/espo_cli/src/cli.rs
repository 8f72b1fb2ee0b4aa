//! Command-line definitions and command bodies.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use espo_core::client::parse_method;
use espo_core::{CallOptions, EspoApi, ResponseEnvelope};
use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "espo_cli", about = "EspoCRM gateway CLI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// List the MCP tools the server exposes.
    Tools {
        /// Print the full catalog, input schemas included, as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Perform one EspoCRM API call and print the response envelope.
    Call(CallArgs),
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// HTTP method: GET, POST, PATCH, PUT or DELETE.
    pub method: String,

    /// Path below the API address, e.g. `Lead/6523ab`.
    pub path: String,

    /// Parameters as a JSON object.
    #[arg(long, default_value = "{}")]
    pub params: String,

    /// Send parameters in the query string even for body-carrying methods.
    #[arg(long)]
    pub force_query: bool,

    /// Do not log non-2xx statuses.
    #[arg(long)]
    pub allow_non_2xx: bool,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// EspoCRM API key.
    #[arg(long, env = "ESPO_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// EspoCRM API address, e.g. `https://crm.example.com/api/v1`.
    #[arg(long, env = "ESPO_API_ADDRESS")]
    pub api_address: String,
}

pub fn print_tools(json: bool) -> Result<()> {
    let catalog = espo_mcp::catalog::tool_catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    let width = catalog.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &catalog {
        println!("{:width$}  {}", entry.name, entry.title);
    }
    Ok(())
}

fn parse_params(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Custom("--params must be a JSON object".into())),
    }
}

pub fn run_call(args: CallArgs) -> Result<ResponseEnvelope> {
    let method = parse_method(&args.method)?;
    let params = parse_params(&args.params)?;
    let options = CallOptions::default()
        .timeout(Duration::from_secs(args.timeout_secs))
        .force_query_params(args.force_query)
        .allow_non_2xx(args.allow_non_2xx);

    let api = EspoApi::new(&args.api_address, &args.api_key);
    log::debug!("{} {}", method, api.normalize_url(Some(&args.path)));

    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(api.call(method, Some(&args.path), &params, &options)))
}
