//! Centralized configuration layer.
//!
//! All environment variable reads live in this module; business code goes
//! through structured config types instead of raw `std::env::var`.
//!
//! - `loader`: env_or, env_optional, env_bool helpers
//! - `schema`: PathOverrides, InstallConfig, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, remove_env_var, set_env_var, ScopedEnvGuard};
pub use schema::{InstallConfig, ObservabilityConfig, PathOverrides};
