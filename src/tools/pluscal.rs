//! The `translate` subcommand: run the PlusCal translator.
//!
//! `-nocfg` keeps the translator from writing a `.cfg` file next to the
//! translated module.

#![expect(
    clippy::print_stdout,
    reason = "--show-script prints to the console on request"
)]

use anyhow::Result;

use super::{
    AppConfig,
    TranslateArgs,
    engine::{EngineRun, Invocation},
};

/// Class inside `tla2tools.jar` that implements the translator.
const TRANSLATOR_CLASS: &str = "pcal.trans";

/// Translator command line for `args`.
#[must_use]
pub fn translate_invocation(config: &AppConfig, args: &TranslateArgs) -> Invocation {
    Invocation::new(&config.java)
        .arg("-cp")
        .arg(&config.jar)
        .arg(TRANSLATOR_CLASS)
        .arg("-nocfg")
        .arg(&args.spec_file)
}

/// Run the `translate` subcommand.
///
/// # Errors
///
/// Returns an error if the translator cannot be launched.
pub async fn run(args: &TranslateArgs, config: &AppConfig) -> Result<EngineRun> {
    let invocation = translate_invocation(config, args);
    if args.show_script {
        println!("{invocation}");
    }
    let run = invocation.run().await?;
    run.report();
    Ok(run)
}
