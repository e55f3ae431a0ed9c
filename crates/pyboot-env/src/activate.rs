//! Explicit activation record.
//!
//! Activation never mutates the launcher's own process environment. The
//! record stamps each child command with `VIRTUAL_ENV`, a `PATH` that
//! resolves to the venv first, and `PYTHONHOME` removed, so the package
//! tools and the application see an activated environment.

use pyboot_core::error::BootstrapError;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An existing venv, resolved to its interpreter and bin directory.
#[derive(Debug, Clone)]
pub struct ActivatedEnv {
    venv_dir: PathBuf,
    bin_dir: PathBuf,
    python: PathBuf,
}

impl ActivatedEnv {
    /// Build the record from an existing venv. Fails if the layout lacks an
    /// interpreter.
    pub fn from_venv(venv_dir: &Path) -> Result<Self, BootstrapError> {
        let unix_bin = venv_dir.join("bin");
        let windows_bin = venv_dir.join("Scripts");

        let (bin_dir, python) = if unix_bin.join("python").exists() {
            let python = unix_bin.join("python");
            (unix_bin, python)
        } else if windows_bin.join("python.exe").exists() {
            let python = windows_bin.join("python.exe");
            (windows_bin, python)
        } else {
            return Err(BootstrapError::EnvironmentCreation {
                reason: format!("no interpreter under {}", venv_dir.display()),
                status: None,
            });
        };

        Ok(Self {
            venv_dir: venv_dir.to_path_buf(),
            bin_dir,
            python,
        })
    }

    /// The venv's own interpreter.
    pub fn python(&self) -> &Path {
        &self.python
    }

    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    /// Child command with the activation environment applied.
    pub fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.env("VIRTUAL_ENV", &self.venv_dir);
        cmd.env("PATH", self.activated_path());
        cmd.env_remove("PYTHONHOME");
        cmd
    }

    /// `<venv python> -m <module>` with the activation environment applied.
    pub fn python_module(&self, module: &str) -> Command {
        let mut cmd = self.command(&self.python);
        cmd.arg("-m").arg(module);
        cmd
    }

    /// PATH with the venv bin directory prepended.
    pub fn activated_path(&self) -> OsString {
        let current = env::var_os("PATH").unwrap_or_default();
        let entries: Vec<PathBuf> = std::iter::once(self.bin_dir.clone())
            .chain(env::split_paths(&current))
            .collect();
        env::join_paths(entries).unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_venv(venv_dir: &Path) {
        let bin = venv_dir.join("bin");
        std::fs::create_dir_all(&bin).expect("create bin");
        std::fs::write(bin.join("python"), "").expect("write python");
    }

    #[test]
    fn test_from_venv_fails_without_interpreter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ActivatedEnv::from_venv(dir.path()).expect_err("empty dir is not a venv");
        assert!(matches!(err, BootstrapError::EnvironmentCreation { .. }));
    }

    #[test]
    fn test_from_venv_resolves_unix_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        fake_venv(dir.path());
        let env = ActivatedEnv::from_venv(dir.path()).expect("from_venv");
        assert_eq!(env.python(), dir.path().join("bin").join("python"));
        assert_eq!(env.venv_dir(), dir.path());
    }

    #[test]
    fn test_activated_path_puts_venv_bin_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        fake_venv(dir.path());
        let env = ActivatedEnv::from_venv(dir.path()).expect("from_venv");

        let path = env.activated_path();
        let first = std::env::split_paths(&path).next().expect("non-empty PATH");
        assert_eq!(first, dir.path().join("bin"));
    }

    #[test]
    fn test_command_stamps_activation_env() {
        let dir = tempfile::tempdir().expect("tempdir");
        fake_venv(dir.path());
        let env = ActivatedEnv::from_venv(dir.path()).expect("from_venv");

        let cmd = env.command(Path::new("true"));
        let envs: std::collections::HashMap<_, _> = cmd
            .get_envs()
            .map(|(k, v)| (k.to_os_string(), v.map(|v| v.to_os_string())))
            .collect();

        assert_eq!(
            envs.get(std::ffi::OsStr::new("VIRTUAL_ENV")).cloned(),
            Some(Some(dir.path().as_os_str().to_os_string()))
        );
        // env_remove shows up as a key with no value
        assert_eq!(envs.get(std::ffi::OsStr::new("PYTHONHOME")).cloned(), Some(None));
        assert!(envs.contains_key(std::ffi::OsStr::new("PATH")));
    }

    #[test]
    fn test_command_does_not_touch_parent_env() {
        let dir = tempfile::tempdir().expect("tempdir");
        fake_venv(dir.path());
        let env = ActivatedEnv::from_venv(dir.path()).expect("from_venv");
        let _ = env.command(Path::new("true"));
        // tolerate an outer venv in the developer's shell; ours must not leak
        assert_ne!(
            std::env::var_os("VIRTUAL_ENV"),
            Some(dir.path().as_os_str().to_os_string())
        );
    }
}
