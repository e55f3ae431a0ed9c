//! The bootstrap sequence: resolve paths, ensure the venv, install
//! dependencies, hand the process over to the application.
//!
//! Strictly sequential; every step blocks until its external tool exits and
//! every failure is fatal with the tool's exit status carried upward.

use pyboot_core::config::{InstallConfig, PathOverrides};
use pyboot_core::error::BootstrapError;
use pyboot_core::paths::AppPaths;
use pyboot_env::{builder, installer, interpreter, launcher, ActivatedEnv};

/// Run the full sequence. On Unix a successful launch replaces the process
/// image and this function never returns; elsewhere it returns the
/// application's exit code for the caller to forward.
pub fn bootstrap_and_launch(
    overrides: &PathOverrides,
    install: &InstallConfig,
) -> Result<i32, BootstrapError> {
    let paths = AppPaths::resolve(overrides)?;
    tracing::debug!("app root: {}", paths.root.display());

    if builder::venv_ready(&paths.venv_dir) {
        println!(
            "Using existing virtual environment at {}",
            paths.venv_dir.display()
        );
    } else {
        println!(
            "Creating virtual environment at {}...",
            paths.venv_dir.display()
        );
        // The base interpreter is only needed when the venv does not exist yet.
        let python = interpreter::find_base_python(install.python.as_deref())?;
        builder::ensure_venv(&paths, &python)?;
    }

    let env = ActivatedEnv::from_venv(&paths.venv_dir)?;

    if install.skip_pip_upgrade {
        tracing::debug!("pip upgrade skipped by config");
    } else {
        println!("Upgrading pip...");
        installer::upgrade_pip(&env)?;
    }

    println!(
        "Installing dependencies from {}...",
        paths.manifest.display()
    );
    installer::install_requirements(&env, &paths.manifest)?;

    println!("Launching {}...", paths.entry_point.display());
    launcher::launch(&env, &paths.entry_point)
}
