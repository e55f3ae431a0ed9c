use clap::{Parser, Subcommand};

/// pyboot - idempotent bootstrap launcher for a Python application
///
/// With no subcommand, runs the full sequence: ensure the venv next to this
/// executable, upgrade pip, install the manifest, then hand the process over
/// to the application.
#[derive(Parser, Debug)]
#[command(name = "pyboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Application root directory (default: the directory containing this
    /// executable)
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Base interpreter used to create the venv (default: python3 from PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Skip the pip self-upgrade step
    #[arg(long, default_value = "false")]
    pub skip_pip_upgrade: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the layout without booting: interpreter, venv, manifest, entry point
    Doctor {
        /// Output the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}
