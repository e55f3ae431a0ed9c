//! Application path resolution.
//!
//! The launcher binary sits next to the application it boots. Every path is
//! derived once at startup from that root and carried explicitly; nothing
//! downstream re-resolves paths on its own.

use crate::config::PathOverrides;
use crate::error::BootstrapError;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_VENV_DIR: &str = ".venv";
pub const DEFAULT_MANIFEST: &str = "requirements.txt";
pub const DEFAULT_ENTRY_POINT: &str = "app.py";

/// Resolved filesystem layout for one launcher run.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Absolute directory containing the launcher executable (or override).
    pub root: PathBuf,
    /// Virtual environment directory, reused across runs once created.
    pub venv_dir: PathBuf,
    /// Dependency manifest, read-only input to the installer.
    pub manifest: PathBuf,
    /// Application entry point handed the process image on launch.
    pub entry_point: PathBuf,
}

impl AppPaths {
    /// Resolve the layout. The root is the override when given, otherwise
    /// the directory containing the running executable.
    pub fn resolve(overrides: &PathOverrides) -> Result<Self, BootstrapError> {
        let root = match overrides.root.as_deref() {
            Some(r) => Path::new(r)
                .canonicalize()
                .map_err(|source| BootstrapError::PathResolution { source })?,
            None => launcher_root()?,
        };

        let venv = overrides.venv_dir.as_deref().unwrap_or(DEFAULT_VENV_DIR);
        let manifest = overrides
            .requirements
            .as_deref()
            .unwrap_or(DEFAULT_MANIFEST);
        let entry = overrides
            .entry_point
            .as_deref()
            .unwrap_or(DEFAULT_ENTRY_POINT);

        Ok(Self {
            venv_dir: join_or_absolute(&root, venv),
            manifest: join_or_absolute(&root, manifest),
            entry_point: join_or_absolute(&root, entry),
            root,
        })
    }
}

/// Directory containing the running executable, canonicalized.
fn launcher_root() -> Result<PathBuf, BootstrapError> {
    let exe = env::current_exe().map_err(|source| BootstrapError::PathResolution { source })?;
    let exe = exe
        .canonicalize()
        .map_err(|source| BootstrapError::PathResolution { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| BootstrapError::PathResolution {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable has no parent directory",
            ),
        })
}

/// Relative overrides are anchored at the root; absolute ones taken as-is.
fn join_or_absolute(root: &Path, p: &str) -> PathBuf {
    let p = Path::new(p);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
