//! ORCID registry server
//!
//! Serves the registry REST API described by the configuration file

#![allow(missing_docs)]

use clap::Parser;
use orcid_registry::server;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "registry", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "REGISTRY_CONFIG",
        default_value = server::builder::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match server::builder::run_server(Some(&args.config)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
