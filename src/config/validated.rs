//! Merging of command line and config file into checked settings.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Settings the binary posts with, as produced by
/// [`from_raw`](Self::from_raw) or [`load`](Self::load).
pub struct ValidatedConfig {
    /// Webhook id (required, non-empty)
    pub webhook_id: String,

    /// Signing secret; empty disables signing
    pub secret: String,

    /// Origin of the traQ deployment
    pub origin: Url,

    /// Channel override, if any
    pub channel: Option<String>,

    /// Whether embed rendering is requested
    pub embed: bool,

    /// Request timeout
    pub timeout: Duration,

    /// `--verbose` was given
    pub verbose: bool,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("webhook_id", &self.webhook_id)
            .field("signed", &!self.secret.is_empty())
            .field("origin", &self.origin.as_str())
            .field("channel", &self.channel)
            .field("embed", &self.embed)
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ origin: {}, webhook_id: {}, signed: {}, channel: {}, embed: {}, timeout: {}s }}",
            self.origin,
            self.webhook_id,
            !self.secret.is_empty(),
            self.channel.as_deref().unwrap_or("default"),
            self.embed,
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Merges `cli` over `toml` over [`defaults`].
    ///
    /// # Errors
    ///
    /// Fails when:
    /// - The webhook id is missing or empty
    /// - The origin is not a usable base URL
    /// - The channel id is not a valid header value
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook = toml.map(|t| &t.webhook);

        let webhook_id = cli
            .webhook_id
            .as_deref()
            .or_else(|| webhook.and_then(|w| w.id.as_deref()))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_ID,
                    "Use --webhook-id, set TRAQ_WEBHOOK_ID, or set webhook.id in config file",
                )
            })?
            .to_string();

        let secret = cli
            .secret
            .clone()
            .or_else(|| webhook.and_then(|w| w.secret.clone()))
            .unwrap_or_default();

        let origin = Self::resolve_origin(cli, toml)?;
        let channel = Self::resolve_channel(cli, toml)?;

        let embed = !cli.no_embed && webhook.and_then(|w| w.embed).unwrap_or(defaults::EMBED);

        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            webhook_id,
            secret,
            origin,
            channel,
            embed,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Reads `--config` when given, then merges as [`from_raw`](Self::from_raw).
    ///
    /// # Errors
    ///
    /// Any error of [`TomlConfig::load`] or [`from_raw`](Self::from_raw).
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = cli.config.as_deref().map(TomlConfig::load).transpose()?;
        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_origin(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let origin_str = cli
            .origin
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.origin.as_deref()))
            .unwrap_or(defaults::ORIGIN);

        let origin = Url::parse(origin_str).map_err(|e| ConfigError::InvalidUrl {
            url: origin_str.to_string(),
            reason: e.to_string(),
        })?;

        if origin.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: origin_str.to_string(),
                reason: "origin cannot be used as a base URL".to_string(),
            });
        }

        Ok(origin)
    }

    fn resolve_channel(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<String>, ConfigError> {
        let channel = cli
            .channel
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.channel.as_deref()))
            .filter(|c| !c.is_empty());

        let Some(channel) = channel else {
            return Ok(None);
        };

        HeaderValue::from_str(channel).map_err(|e| ConfigError::InvalidChannel {
            value: channel.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(channel.to_string()))
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes [`default_config_template`](super::default_config_template) to
/// `path`, replacing any existing file.
///
/// # Errors
///
/// [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, super::toml::default_config_template()).map_err(|source| {
        ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
