//! Default values for configuration options.

/// Default traQ origin.
pub const ORIGIN: &str = crate::webhook::DEFAULT_ORIGIN;

/// Embed rendering is requested unless disabled.
pub const EMBED: bool = true;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

