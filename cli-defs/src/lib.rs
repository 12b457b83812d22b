//! Shared CLI type definitions for tlacli build and runtime.
//!
//! This crate provides the argument and configuration types used by both the
//! `build.rs` script (for man page generation) and the `tlacli` binary.
//! Keeping them in a separate crate lets the build script render the man page
//! without compiling the rest of the tool.

// The derives expand at module scope, so these suppressions cannot be narrowed
// to the structs they come from.
#![expect(
    non_snake_case,
    reason = "Clap/OrthoConfig derive macros generate helper modules with uppercase names"
)]
#![expect(
    missing_docs,
    reason = "OrthoConfig and Clap derive macros generate items that cannot be documented"
)]

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Java launcher used when no other is configured.
pub const DEFAULT_JAVA: &str = "java";
/// Location of the TLA+ tools jar used when no other is configured.
pub const DEFAULT_JAR: &str = "tla2tools.jar";
/// Where `check` writes the generated configuration unless told otherwise.
pub const DEFAULT_OUT_CFG: &str = "temporary.cfg";

/// Tool-level settings layered from defaults, `.tlacli.toml` and `TLACLI_*`
/// environment variables.
#[derive(Args, OrthoConfig, Serialize, Deserialize, Default, Debug, Clone)]
#[ortho_config(prefix = "TLACLI_")]
pub struct AppConfig {
    /// Java launcher used to run the TLA+ tools.
    #[ortho_config(default = DEFAULT_JAVA.to_owned())]
    #[arg(long, default_value_t = String::from(DEFAULT_JAVA))]
    pub java: String,
    /// Path to `tla2tools.jar`.
    #[ortho_config(default = DEFAULT_JAR.to_owned())]
    #[arg(long, default_value_t = String::from(DEFAULT_JAR))]
    pub jar: String,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Default, Debug, Clone)]
pub struct CheckArgs {
    /// The TLA+ specification file to check.
    #[arg(value_name = "SPECFILE")]
    pub spec_file: PathBuf,
    /// Specification operator; falls back to the template's, then `Spec`.
    #[arg(long, visible_alias = "specification", value_name = "NAME")]
    pub spec: Option<String>,
    /// Template configuration providing default values.
    #[arg(long, value_name = "PATH")]
    pub cfg: Option<PathBuf>,
    /// Invariants to check; may be given several times.
    #[arg(long = "invariant", value_name = "NAME", num_args = 1..)]
    pub invariants: Vec<String>,
    /// Temporal properties to check; may be given several times.
    #[arg(long = "property", value_name = "NAME", num_args = 1..)]
    pub properties: Vec<String>,
    /// Constant assignment as a `NAME VALUE` pair; may be given several times.
    #[arg(long = "constant", num_args = 2, value_names = ["NAME", "VALUE"])]
    pub constants: Vec<String>,
    /// Constants declared as model values.
    #[arg(long = "model-values", value_name = "NAME", num_args = 1..)]
    pub model_values: Vec<String>,
    /// Where to save the generated configuration.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUT_CFG)]
    pub out_cfg: PathBuf,
    /// Print the generated configuration before running TLC.
    #[arg(long)]
    pub show_cfg: bool,
    /// Print the engine command line before running it.
    #[arg(long)]
    pub show_script: bool,
    /// Disable deadlock checking.
    #[arg(long)]
    pub no_check_deadlocks: bool,
    /// Number of TLC worker threads (defaults to the available parallelism).
    #[arg(long, value_name = "N")]
    pub tlc_workers: Option<NonZeroUsize>,
}

/// Arguments for the `translate` subcommand.
#[derive(Args, Default, Debug, Clone)]
pub struct TranslateArgs {
    /// The PlusCal-annotated TLA+ file.
    #[arg(value_name = "SPECFILE")]
    pub spec_file: PathBuf,
    /// Print the engine command line before running it.
    #[arg(long)]
    pub show_script: bool,
}

/// CLI subcommands exposed by `tlacli`.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the TLC model checker on a TLA+ spec.
    #[command(name = "check", visible_alias = "tlc")]
    Check(CheckArgs),
    /// Translate PlusCal into TLA+.
    #[command(name = "translate", visible_aliases = ["pc", "pluscal"])]
    Translate(TranslateArgs),
}

/// Top-level CLI entry point consumed by the binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "tlacli", author, version, about)]
pub struct Cli {
    /// Emit debug diagnostics on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Which TLA+ tool to run.
    #[command(subcommand)]
    pub command: Commands,
}
