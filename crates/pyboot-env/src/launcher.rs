//! Terminal process handoff to the application entry point.

use crate::activate::ActivatedEnv;
use pyboot_core::error::BootstrapError;
use std::path::Path;

/// Hand the process over to `<venv python> <entry_point>`.
///
/// On Unix the process image is replaced and this function only returns on
/// error. Elsewhere the application runs as a child and its exit code is
/// returned for the caller to forward. No arguments are passed beyond the
/// entry-point path itself.
pub fn launch(env: &ActivatedEnv, entry_point: &Path) -> Result<i32, BootstrapError> {
    if !entry_point.exists() {
        return Err(BootstrapError::Launch {
            entry_point: entry_point.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "entry point not found"),
        });
    }

    let mut cmd = env.command(env.python());
    cmd.arg(entry_point);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // exec only returns on error
        let err = cmd.exec();
        Err(BootstrapError::Launch {
            entry_point: entry_point.to_path_buf(),
            source: err,
        })
    }

    #[cfg(not(unix))]
    {
        let status = cmd.status().map_err(|source| BootstrapError::Launch {
            entry_point: entry_point.to_path_buf(),
            source,
        })?;
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_point_fails_without_exec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bin = dir.path().join("bin");
        std::fs::create_dir_all(&bin).expect("create bin");
        std::fs::write(bin.join("python"), "").expect("write python");
        let env = ActivatedEnv::from_venv(dir.path()).expect("from_venv");

        let err = launch(&env, &dir.path().join("app.py")).expect_err("missing entry point");
        match err {
            BootstrapError::Launch { entry_point, source } => {
                assert!(entry_point.ends_with("app.py"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
