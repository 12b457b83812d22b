//! Error types for reading and writing configuration files.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while moving a [`Cfg`](super::Cfg) to or from disk.
///
/// Parsing itself cannot fail; only file access can.
#[derive(Debug, Error)]
pub enum CfgError {
    /// The template configuration could not be read.
    #[error("failed to read configuration template {}", .path.display())]
    Read {
        /// Template that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The generated configuration could not be written.
    #[error("failed to write configuration to {}", .path.display())]
    Write {
        /// Destination that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl CfgError {
    /// Path of the file the failed operation targeted.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
