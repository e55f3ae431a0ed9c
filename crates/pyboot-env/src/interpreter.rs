//! Base interpreter discovery.
//!
//! The base interpreter is only used to create the venv; every later step
//! goes through the venv's own interpreter.

use pyboot_core::error::BootstrapError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Find the interpreter used to create the venv. An explicit override wins;
/// otherwise probe `python3` then `python` on PATH.
pub fn find_base_python(override_path: Option<&str>) -> Result<PathBuf, BootstrapError> {
    if let Some(p) = override_path {
        let path = PathBuf::from(p);
        // Bare names are resolved through PATH like any other override.
        let resolved = if path.components().count() > 1 {
            if !path.exists() {
                return Err(BootstrapError::EnvironmentCreation {
                    reason: format!("configured interpreter not found: {}", path.display()),
                    status: None,
                });
            }
            path
        } else {
            which::which(&path).map_err(|_| BootstrapError::EnvironmentCreation {
                reason: format!("configured interpreter not found in PATH: {}", path.display()),
                status: None,
            })?
        };
        return Ok(resolved);
    }

    for name in ["python3", "python"] {
        if let Ok(found) = which::which(name) {
            return Ok(found);
        }
    }

    Err(BootstrapError::EnvironmentCreation {
        reason: "python3 or python not found in PATH".to_string(),
        status: None,
    })
}

/// Interpreter version line, for diagnostics. Older interpreters print the
/// version to stderr.
pub fn probe_version(python: &Path) -> Option<String> {
    let out = Command::new(python).arg("--version").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = if out.stdout.is_empty() {
        &out.stderr
    } else {
        &out.stdout
    };
    String::from_utf8_lossy(text)
        .lines()
        .next()
        .map(|l| l.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_with_missing_path_fails() {
        let err = find_base_python(Some("/no/such/interpreter/python3"))
            .expect_err("missing override should fail");
        assert!(matches!(err, BootstrapError::EnvironmentCreation { .. }));
    }

    #[test]
    fn test_override_with_existing_path_is_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fake = dir.path().join("python3");
        std::fs::write(&fake, "").expect("write");
        let found = find_base_python(Some(fake.to_str().expect("utf8"))).expect("find");
        assert_eq!(found, fake);
    }

    #[test]
    fn test_probe_version_on_missing_binary_is_none() {
        assert_eq!(probe_version(Path::new("/no/such/python")), None);
    }
}
