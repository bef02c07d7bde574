//! Shape of the `--config` file.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Contents of a config file. Every key is optional; unknown keys are
/// rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// `[webhook]`
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// The `[webhook]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook id
    pub id: Option<String>,

    /// Signing secret
    pub secret: Option<String>,

    /// Origin of the traQ deployment
    pub origin: Option<String>,

    /// Channel id overriding the webhook's default channel
    pub channel: Option<String>,

    /// Request embed rendering (default: true)
    pub embed: Option<bool>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileRead`] or [`ConfigError::TomlParse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        std::fs::read_to_string(path)
            .map_err(|source| ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|content| Self::parse(&content))
    }

    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TomlParse`] on malformed TOML, unknown keys, or
    /// mistyped values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Template written by `traq-writer init`; every key is commented out.
#[must_use]
pub fn default_config_template() -> String {
    r#"# traq-writer configuration file

[webhook]
# Webhook id (required, or use --webhook-id / TRAQ_WEBHOOK_ID)
# id = "00000000-0000-0000-0000-000000000000"

# Webhook secret; messages are signed with HMAC-SHA1 when set
# secret = "your-secret-here"

# Origin of the traQ deployment (default: https://q.trap.jp)
# origin = "https://q.trap.jp"

# Post to this channel instead of the webhook's default channel
# channel = "00000000-0000-0000-0000-000000000000"

# Request embed rendering (default: true)
# embed = true

# Request timeout in seconds (default: 30)
# timeout = 30
"#
    .to_string()
}
