//! Dependency install inside the venv: pip self-upgrade, then the manifest.
//!
//! Both steps run `<venv python> -m pip` with inherited stdio so pip's own
//! progress and error text stream to the caller's terminal.

use crate::activate::ActivatedEnv;
use pyboot_core::error::BootstrapError;
use std::path::Path;

/// Upgrade the package installer itself before touching the manifest.
pub fn upgrade_pip(env: &ActivatedEnv) -> Result<(), BootstrapError> {
    tracing::info!("upgrading pip in {}", env.venv_dir().display());
    let status = env
        .python_module("pip")
        .args(["install", "--upgrade", "pip"])
        .status()
        .map_err(|e| BootstrapError::DependencyTool {
            reason: format!("failed to run pip: {e}"),
            status: None,
        })?;

    if !status.success() {
        return Err(BootstrapError::DependencyTool {
            reason: format!("pip upgrade exited with {status}"),
            status: status.code(),
        });
    }
    Ok(())
}

/// Install everything the manifest lists. A missing manifest is fatal before
/// any tool is invoked.
pub fn install_requirements(env: &ActivatedEnv, manifest: &Path) -> Result<(), BootstrapError> {
    if !manifest.exists() {
        return Err(BootstrapError::DependencyInstall {
            reason: format!("manifest not found: {}", manifest.display()),
            status: None,
        });
    }

    tracing::info!("installing dependencies from {}", manifest.display());
    let status = env
        .python_module("pip")
        .arg("install")
        .arg("-r")
        .arg(manifest)
        .status()
        .map_err(|e| BootstrapError::DependencyInstall {
            reason: format!("failed to run pip: {e}"),
            status: None,
        })?;

    if !status.success() {
        return Err(BootstrapError::DependencyInstall {
            reason: format!("pip install -r exited with {status}"),
            status: status.code(),
        });
    }
    Ok(())
}
