//! `tlacli` binary entry point.
//!
//! The runtime logic lives in `tlacli::tools`; this binary parses arguments,
//! installs logging and turns the engine's exit status into its own.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tlacli::tools::{self, Cli};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Logs go to stderr so the engine's stdout is relayed untouched.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let resolved = tools::resolve(cli)?;
    let run = tools::run_with_cli(resolved).await?;
    Ok(run.exit_code())
}
