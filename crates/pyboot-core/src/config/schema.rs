//! Per-domain config structs loaded from environment variables.
//!
//! CLI flags are merged on top via the `with_cli_overrides` / `merge_cli`
//! helpers; flags win over environment variables.

use super::env_keys::{install as install_keys, observability as obv_keys, paths as path_keys};
use super::loader::{env_bool, env_optional, env_or};

/// Filesystem layout overrides for one launcher run.
///
/// Unset fields fall back to the defaults in `paths::AppPaths` (the
/// executable's own directory, `.venv`, `requirements.txt`, `app.py`).
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub root: Option<String>,
    pub venv_dir: Option<String>,
    pub entry_point: Option<String>,
    pub requirements: Option<String>,
}

impl PathOverrides {
    pub fn from_env() -> Self {
        Self {
            root: env_optional(path_keys::PYBOOT_ROOT, &[]),
            venv_dir: env_optional(path_keys::PYBOOT_VENV_DIR, &[]),
            entry_point: env_optional(path_keys::PYBOOT_ENTRY_POINT, &[]),
            requirements: env_optional(path_keys::PYBOOT_REQUIREMENTS, &[]),
        }
    }

    /// Apply a CLI root override (flags win over env).
    pub fn merge_cli(mut self, root: Option<String>) -> Self {
        if root.is_some() {
            self.root = root;
        }
        self
    }
}

/// Interpreter discovery and installer behavior.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Base interpreter used to create the venv. None = probe PATH.
    pub python: Option<String>,
    /// Skip the `pip install --upgrade pip` step.
    pub skip_pip_upgrade: bool,
}

impl InstallConfig {
    pub fn from_env() -> Self {
        Self {
            python: env_optional(install_keys::PYBOOT_PYTHON, &[]),
            skip_pip_upgrade: env_bool(install_keys::PYBOOT_SKIP_PIP_UPGRADE, &[], false),
        }
    }

    /// Override with CLI parameters.
    pub fn with_cli_overrides(mut self, python: Option<String>, skip_pip_upgrade: bool) -> Self {
        if python.is_some() {
            self.python = python;
        }
        if skip_pip_upgrade {
            self.skip_pip_upgrade = true;
        }
        self
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// When true, only WARN and above are logged.
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::PYBOOT_QUIET, &[], false),
            log_level: env_or(obv_keys::PYBOOT_LOG_LEVEL, &[], || "pyboot=info".to_string()),
            log_json: env_bool(obv_keys::PYBOOT_LOG_JSON, &[], false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::{set_env_var, ScopedEnvGuard};

    #[test]
    fn test_path_overrides_default_to_none() {
        let o = PathOverrides::default();
        assert!(o.root.is_none());
        assert!(o.venv_dir.is_none());
        assert!(o.entry_point.is_none());
        assert!(o.requirements.is_none());
    }

    #[test]
    fn test_merge_cli_wins_over_env() {
        let o = PathOverrides {
            root: Some("/from/env".to_string()),
            ..Default::default()
        };
        let merged = o.merge_cli(Some("/from/cli".to_string()));
        assert_eq!(merged.root.as_deref(), Some("/from/cli"));
    }

    #[test]
    fn test_merge_cli_keeps_env_when_flag_absent() {
        let o = PathOverrides {
            root: Some("/from/env".to_string()),
            ..Default::default()
        };
        let merged = o.merge_cli(None);
        assert_eq!(merged.root.as_deref(), Some("/from/env"));
    }

    #[test]
    fn test_install_config_cli_overrides() {
        let cfg = InstallConfig {
            python: None,
            skip_pip_upgrade: false,
        };
        let cfg = cfg.with_cli_overrides(Some("/opt/python3".to_string()), true);
        assert_eq!(cfg.python.as_deref(), Some("/opt/python3"));
        assert!(cfg.skip_pip_upgrade);
    }

    #[test]
    fn test_install_config_reads_env() {
        let _guard = ScopedEnvGuard("PYBOOT_PYTHON");
        set_env_var("PYBOOT_PYTHON", "/usr/local/bin/python3.12");
        let cfg = InstallConfig::from_env();
        assert_eq!(cfg.python.as_deref(), Some("/usr/local/bin/python3.12"));
    }

    #[test]
    fn test_observability_defaults() {
        let cfg = ObservabilityConfig {
            quiet: false,
            log_level: "pyboot=info".to_string(),
            log_json: false,
        };
        assert!(!cfg.quiet);
        assert_eq!(cfg.log_level, "pyboot=info");
    }
}
