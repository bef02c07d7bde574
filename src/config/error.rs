//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why the binary's configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `--config` file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// File that was requested
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Destination of the template
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value with no default was given nowhere.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// One of the names in [`field`]
        field: &'static str,
        /// Where the value can be supplied
        hint: &'static str,
    },

    /// The origin does not parse or cannot carry the API path.
    #[error("Invalid origin '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The channel id would not survive as a header value.
    #[error("Invalid channel id '{value}': {reason}")]
    InvalidChannel { value: String, reason: String },

    /// A zero duration.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration { field: &'static str, reason: String },
}

/// Names reported by [`ConfigError::MissingRequired`].
pub mod field {
    /// `--webhook-id` / `webhook.id`
    pub const WEBHOOK_ID: &str = "webhook_id";
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingRequired`].
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
