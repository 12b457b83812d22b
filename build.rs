//! Build script for man page generation.
//!
//! Renders `tlacli.1` plus one page per subcommand (`tlacli-check.1`,
//! `tlacli-translate.1`) into `OUT_DIR` with `clap_mangen`. The CLI types come
//! from the `cli-defs` crate so this script does not need the rest of the
//! tool.

use std::{
    env,
    fs,
    io,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_mangen::Man;
use cli_defs::Cli;

fn render(cmd: clap::Command, out_dir: &Path, page: &str) -> io::Result<()> {
    let mut file = fs::File::create(out_dir.join(format!("{page}.1")))?;
    Man::new(cmd).render(&mut file)
}

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=cli-defs");

    // Cargo does not set OUT_DIR for IDE analysis runs.
    let Ok(out_dir) = env::var("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };
    let bin_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "tlacli".into());

    let cmd = Cli::command();
    for sub in cmd.get_subcommands() {
        let page = format!("{bin_name}-{}", sub.get_name());
        render(sub.clone(), &out_dir, &page)?;
    }
    render(cmd, &out_dir, &bin_name)
}
