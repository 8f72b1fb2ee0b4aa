// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Tools { json } => cli::print_tools(json)?,
        Commands::Call(call) => {
            let envelope = cli::run_call(call)?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            if !envelope.ok {
                return Err(Error::Custom(match &envelope.error {
                    Some(error) => format!("call failed: {error}"),
                    None => "call failed".to_string(),
                }));
            }
        }
    }

    Ok(())
}
