//! Layout diagnostics without booting anything.

use pyboot_core::config::{InstallConfig, PathOverrides};
use pyboot_core::error::BootstrapError;
use pyboot_core::paths::AppPaths;
use pyboot_env::{builder, interpreter};
use serde::Serialize;

/// One probe per thing the bootstrap sequence depends on.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub root: String,
    pub base_python: Option<String>,
    pub base_python_version: Option<String>,
    pub venv_ready: bool,
    pub manifest_present: bool,
    pub entry_point_present: bool,
}

impl DoctorReport {
    /// A run could succeed: an interpreter is reachable (or the venv already
    /// exists) and both input files are present.
    pub fn is_bootable(&self) -> bool {
        (self.base_python.is_some() || self.venv_ready)
            && self.manifest_present
            && self.entry_point_present
    }
}

pub fn collect(
    overrides: &PathOverrides,
    install: &InstallConfig,
) -> Result<DoctorReport, BootstrapError> {
    let paths = AppPaths::resolve(overrides)?;
    let base = interpreter::find_base_python(install.python.as_deref()).ok();
    let version = base.as_deref().and_then(interpreter::probe_version);

    Ok(DoctorReport {
        root: paths.root.display().to_string(),
        base_python: base.map(|p| p.display().to_string()),
        base_python_version: version,
        venv_ready: builder::venv_ready(&paths.venv_dir),
        manifest_present: paths.manifest.exists(),
        entry_point_present: paths.entry_point.exists(),
    })
}

pub fn print_report(report: &DoctorReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("App root:      {}", report.root);
    match (&report.base_python, &report.base_python_version) {
        (Some(p), Some(v)) => println!("Interpreter:   {p} ({v})"),
        (Some(p), None) => println!("Interpreter:   {p}"),
        (None, _) => println!("Interpreter:   not found"),
    }
    println!(
        "Venv:          {}",
        if report.venv_ready {
            "ready"
        } else {
            "missing (will be created)"
        }
    );
    println!(
        "Manifest:      {}",
        if report.manifest_present {
            "present"
        } else {
            "missing"
        }
    );
    println!(
        "Entry point:   {}",
        if report.entry_point_present {
            "present"
        } else {
            "missing"
        }
    );
    Ok(())
}
