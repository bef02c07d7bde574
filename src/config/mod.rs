//! Settings for the `traq-writer` binary.
//!
//! [`Cli`] holds the command line, [`TomlConfig`] an optional config file,
//! and [`ValidatedConfig`] the merged and checked result. `traq-writer init`
//! writes a commented template through [`write_default_config`]. Fallback
//! values live in [`defaults`].
//!
//! The library types in [`crate::webhook`] take plain values and never read
//! configuration themselves.
//!
//! # Precedence
//!
//! For every setting the first source that provides it wins:
//!
//! 1. a command-line flag, or the matching `TRAQ_*` environment variable
//!    (clap fills flags from the environment)
//! 2. the `[webhook]` table of the `--config` file
//! 3. [`defaults`]
//!
//! The webhook id has no default.
//!
//! `--no-embed` can only switch embedding off: embed is off when the flag
//! is given or the file sets `embed = false`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
