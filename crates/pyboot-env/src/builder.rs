//! Venv creation. Idempotent: an existing venv is reused, never rebuilt.

use pyboot_core::error::BootstrapError;
use pyboot_core::paths::AppPaths;
use std::path::Path;
use std::process::Command;

/// True when the venv already holds an interpreter.
pub fn venv_ready(venv_dir: &Path) -> bool {
    venv_dir.join("bin").join("python").exists()
        || venv_dir.join("Scripts").join("python.exe").exists()
}

/// Create the venv if absent. Stdio is inherited so the tool's own
/// diagnostics land on the caller's terminal.
pub fn ensure_venv(paths: &AppPaths, python: &Path) -> Result<(), BootstrapError> {
    if venv_ready(&paths.venv_dir) {
        tracing::debug!("venv already present at {}", paths.venv_dir.display());
        return Ok(());
    }

    tracing::info!(
        "creating venv at {} with {}",
        paths.venv_dir.display(),
        python.display()
    );
    let status = Command::new(python)
        .arg("-m")
        .arg("venv")
        .arg(&paths.venv_dir)
        .current_dir(&paths.root)
        .status()
        .map_err(|e| BootstrapError::EnvironmentCreation {
            reason: format!("failed to run {}: {}", python.display(), e),
            status: None,
        })?;

    if !status.success() {
        return Err(BootstrapError::EnvironmentCreation {
            reason: format!("{} -m venv exited with {}", python.display(), status),
            status: status.code(),
        });
    }
    Ok(())
}
