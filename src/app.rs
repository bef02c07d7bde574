//! Process plumbing for the binary: exit codes, log output, and hints
//! printed next to errors the user can fix.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use traq_writer::config::{ConfigError, field};
use traq_writer::webhook::WriteError;

use crate::run::RunError;

/// Process exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// The message was posted, or `init` wrote its template.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, config file, or `init` destination.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The message could not be read or posted.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Suggests `init` when the config is absent or unreadable.
pub fn print_config_hint(error: &ConfigError) {
    let suggest_init = match error {
        ConfigError::MissingRequired { field: f, .. } => *f == field::WEBHOOK_ID,
        ConfigError::FileRead { .. } => true,
        _ => false,
    };

    if suggest_init {
        eprintln!("\nRun 'traq-writer init' to generate a configuration template.");
    }
}

/// Maps the statuses traQ uses for common mistakes to a hint.
pub fn run_error_hint(error: &RunError) -> Option<&'static str> {
    let WriteError::UnexpectedStatus { status, .. } = error.write_error()? else {
        return None;
    };

    match status.as_u16() {
        400 => Some("Check the channel id and that the message is not empty."),
        401 => Some("The signature was rejected; check the webhook secret."),
        404 => Some("No webhook with this id exists on the origin."),
        _ => None,
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise INFO, or DEBUG with `--verbose`.
pub fn setup_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
