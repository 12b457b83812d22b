//! Child-process plumbing for the Java-based TLA+ tools.
//!
//! An [`Invocation`] is an argv vector, never a shell string; its
//! [`Display`](fmt::Display) form is only for showing the user what will run.

#![expect(
    clippy::print_stdout,
    reason = "engine output is relayed to the user verbatim"
)]
#![expect(
    clippy::print_stderr,
    reason = "engine diagnostics are relayed to the user verbatim"
)]

use std::{
    ffi::{OsStr, OsString},
    fmt,
    process::{ExitCode, ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Command line for one run of an external tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    /// Start a command line for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program that will be launched.
    #[must_use]
    pub fn program(&self) -> &OsStr { &self.program }

    /// Arguments passed to the program, in order.
    #[must_use]
    pub fn args(&self) -> &[OsString] { &self.args }

    /// Launch the program and wait for it, capturing stdout and stderr.
    ///
    /// There is no timeout. The child is killed if the returned future is
    /// dropped before it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned (for example when
    /// `java` is not on `PATH`). A non-zero exit is not an error; inspect
    /// [`EngineRun::status`].
    pub async fn run(&self) -> Result<EngineRun> {
        debug!(script = %self, "launching engine");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to launch {}", self.program.to_string_lossy()))?;

        let run = EngineRun {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        if !run.status.success() {
            warn!(status = %run.status, "engine exited unsuccessfully");
        }
        Ok(run)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Outcome of a finished engine process.
#[derive(Debug)]
pub struct EngineRun {
    /// Exit status reported by the operating system.
    pub status: ExitStatus,
    /// Captured standard output, decoded lossily.
    pub stdout: String,
    /// Captured standard error, decoded lossily.
    pub stderr: String,
}

impl EngineRun {
    /// Relay the captured output: stderr first, then stdout.
    pub fn report(&self) {
        eprint!("{}", self.stderr);
        print!("{}", self.stdout);
    }

    /// Process exit code mirroring the engine's own.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode { ExitCode::from(exit_code_for(self.status.code())) }
}

/// Map an engine exit code onto one this process can report.
///
/// Codes that do not fit in a byte, and runs ended by a signal (`None`), map
/// to `1`.
#[must_use]
pub fn exit_code_for(code: Option<i32>) -> u8 {
    code.and_then(|code| u8::try_from(code).ok()).unwrap_or(1)
}
