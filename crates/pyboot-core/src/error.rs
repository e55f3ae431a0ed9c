//! Flat error taxonomy for the bootstrap sequence.
//!
//! Every variant is fatal: the launcher never retries and never recovers
//! partially. When a step wraps an external tool, the tool's own exit status
//! is carried so the launcher can surface it as its process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The launcher's own directory could not be resolved.
    #[error("cannot resolve launcher directory: {source}")]
    PathResolution {
        #[source]
        source: std::io::Error,
    },

    /// `python -m venv` is unavailable, the venv layout is broken, or the
    /// tool exited non-zero.
    #[error("virtual environment creation failed: {reason}")]
    EnvironmentCreation {
        reason: String,
        status: Option<i32>,
    },

    /// Upgrading the package installer inside the venv failed.
    #[error("package installer upgrade failed: {reason}")]
    DependencyTool {
        reason: String,
        status: Option<i32>,
    },

    /// The manifest is missing, or `pip install -r` exited non-zero.
    #[error("dependency install failed: {reason}")]
    DependencyInstall {
        reason: String,
        status: Option<i32>,
    },

    /// Replacing the process image with the application failed.
    #[error("failed to launch {}: {source}", entry_point.display())]
    Launch {
        entry_point: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BootstrapError {
    /// Exit code to surface to the caller: the failing tool's own status
    /// when one was captured, 1 otherwise (spawn failure, signal death).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EnvironmentCreation { status, .. }
            | Self::DependencyTool { status, .. }
            | Self::DependencyInstall { status, .. } => status.unwrap_or(1),
            Self::PathResolution { .. } | Self::Launch { .. } => 1,
        }
    }
}
