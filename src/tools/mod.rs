//! Runners for the TLA+ tools exposed as `tlacli` subcommands.
//!
//! Each subcommand lives in its own module and shares the child-process
//! plumbing in [`engine`]. The binary stays a thin wrapper: it parses a
//! [`Cli`], resolves it with [`resolve`] and hands the result to
//! [`run_with_cli`].

pub mod engine;
pub mod pluscal;
pub mod tlc;

use anyhow::{Result, anyhow};
pub use cli_defs::{AppConfig, CheckArgs, Cli, Commands, TranslateArgs};
pub use engine::{EngineRun, Invocation};
use ortho_config::OrthoConfig;

/// Name used when loading layered configuration.
const BIN_NAME: &str = "tlacli";

/// A parsed command together with the layered tool configuration.
#[derive(Debug, Clone)]
pub struct ResolvedCli {
    /// Settings from defaults, `.tlacli.toml` and `TLACLI_*` variables.
    pub config: AppConfig,
    /// Subcommand to execute.
    pub command: Commands,
}

/// Load the tool configuration and pair it with the parsed command.
///
/// # Errors
///
/// Returns an error if a configuration file or environment variable holds an
/// invalid value.
pub fn resolve(cli: Cli) -> Result<ResolvedCli> {
    let config = AppConfig::load_from_iter([BIN_NAME])
        .map_err(|err| anyhow!("failed to load tlacli configuration: {err}"))?;
    Ok(ResolvedCli {
        config,
        command: cli.command,
    })
}

/// Execute a resolved command.
///
/// # Errors
///
/// Propagates failures from the subcommand: unreadable templates, unwritable
/// output and engines that cannot be launched. An engine that runs and fails
/// is reported through the returned [`EngineRun`] instead.
pub async fn run_with_cli(cli: ResolvedCli) -> Result<EngineRun> {
    let ResolvedCli { config, command } = cli;
    match command {
        Commands::Check(args) => tlc::run(&args, &config).await,
        Commands::Translate(args) => pluscal::run(&args, &config).await,
    }
}
