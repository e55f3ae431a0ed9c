mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use pyboot_core::config::{InstallConfig, PathOverrides};
use pyboot_core::observability;

fn main() {
    observability::init_tracing();
    let cli = Cli::parse();

    let overrides = PathOverrides::from_env().merge_cli(cli.root.clone());
    let install = InstallConfig::from_env().with_cli_overrides(cli.python.clone(), cli.skip_pip_upgrade);

    match cli.command {
        Some(Commands::Doctor { json }) => match commands::doctor::collect(&overrides, &install) {
            Ok(report) => {
                if let Err(e) = commands::doctor::print_report(&report, json) {
                    eprintln!("Error: {e:#}");
                    std::process::exit(1);
                }
                if !report.is_bootable() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code());
            }
        },
        None => match commands::run::bootstrap_and_launch(&overrides, &install) {
            // Reached only on non-Unix hosts, where the application runs as a
            // child instead of replacing the launcher's process image.
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code());
            }
        },
    }
}
