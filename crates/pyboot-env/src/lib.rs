//! Bootstrap runner: interpreter discovery, venv creation, activation,
//! dependency install, and the terminal handoff to the application.
//!
//! Callers resolve `AppPaths` first (pyboot-core); this crate owns every
//! external tool invocation. All steps are synchronous and fatal on failure.

pub mod activate;
pub mod builder;
pub mod installer;
pub mod interpreter;
pub mod launcher;

pub use activate::ActivatedEnv;
