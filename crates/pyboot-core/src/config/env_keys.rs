//! Environment variable key constants.
//!
//! Every key the launcher reads is declared here so the full surface is
//! visible in one place.

/// Filesystem layout overrides.
pub mod paths {
    pub const PYBOOT_ROOT: &str = "PYBOOT_ROOT";

    pub const PYBOOT_VENV_DIR: &str = "PYBOOT_VENV_DIR";

    pub const PYBOOT_ENTRY_POINT: &str = "PYBOOT_ENTRY_POINT";

    pub const PYBOOT_REQUIREMENTS: &str = "PYBOOT_REQUIREMENTS";
}

/// Interpreter discovery and installer behavior.
pub mod install {
    pub const PYBOOT_PYTHON: &str = "PYBOOT_PYTHON";

    pub const PYBOOT_SKIP_PIP_UPGRADE: &str = "PYBOOT_SKIP_PIP_UPGRADE";
}

/// Logging.
pub mod observability {
    pub const PYBOOT_QUIET: &str = "PYBOOT_QUIET";

    pub const PYBOOT_LOG_LEVEL: &str = "PYBOOT_LOG_LEVEL";

    pub const PYBOOT_LOG_JSON: &str = "PYBOOT_LOG_JSON";
}
