//! `traq-writer`: post a message to a traQ webhook.
//!
//! The message is the positional argument, or all of stdin when it is
//! omitted.

use std::path::Path;
use std::process::ExitCode;

use traq_writer::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, run_error_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    if let Err(e) = run::execute(&config, cli.message) {
        tracing::error!("{e}");
        if let Some(hint) = run_error_hint(&e) {
            eprintln!("{hint}");
        }
        return exit_code::runtime_error();
    }

    exit_code::SUCCESS
}

/// Writes the config template for `traq-writer init`.
fn init(output: &Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }

    println!("Wrote configuration template to {}", output.display());
    exit_code::SUCCESS
}
