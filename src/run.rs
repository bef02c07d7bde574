//! Message posting for the binary.
//!
//! Reads the message, builds the writer from the validated config, and
//! posts the message with a single write.

use std::io::{self, Read, Write};

use thiserror::Error;

use traq_writer::config::ValidatedConfig;
use traq_writer::webhook::{
    HttpClient, HttpError, ReqwestClient, TraqWebhook, TraqWebhookWriter, WriteError,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the message from stdin.
    #[error("Failed to read message from stdin: {0}")]
    ReadInput(#[source] io::Error),

    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientSetup(#[source] HttpError),

    /// Failed to create the writer's runtime.
    #[error("Failed to create writer: {0}")]
    WriterSetup(#[source] io::Error),

    /// The message was not accepted.
    #[error("Failed to post message: {0}")]
    Post(#[source] io::Error),
}

impl RunError {
    /// Returns the webhook error behind a failed post, if any.
    #[must_use]
    pub fn write_error(&self) -> Option<&WriteError> {
        match self {
            Self::Post(e) => e.get_ref().and_then(|inner| inner.downcast_ref()),
            _ => None,
        }
    }
}

/// Posts the message to the configured webhook.
///
/// Uses `message` if given, otherwise reads all of stdin.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, the client or writer cannot be
/// created, or the message is not accepted.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig, message: Option<String>) -> Result<usize, RunError> {
    let body = read_message(message, io::stdin().lock())?;
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientSetup)?;
    let mut writer = build_writer(config, client)?;

    post_message(&mut writer, &body)
}

/// Returns the message bytes, reading `input` to the end when no message
/// was given on the command line.
fn read_message(message: Option<String>, mut input: impl Read) -> Result<Vec<u8>, RunError> {
    if let Some(message) = message {
        return Ok(message.into_bytes());
    }

    let mut body = Vec::new();
    input.read_to_end(&mut body).map_err(RunError::ReadInput)?;
    Ok(body)
}

/// Builds a writer with the config's origin, secret, channel, and embed flag.
fn build_writer<H>(config: &ValidatedConfig, client: H) -> Result<TraqWebhookWriter<H>, RunError> {
    let mut webhook = TraqWebhook::with_origin(
        client,
        config.webhook_id.clone(),
        config.secret.clone(),
        config.origin.clone(),
    );
    if let Some(channel) = &config.channel {
        webhook.set_channel_override(channel.clone());
    }
    webhook.set_embed(config.embed);

    TraqWebhookWriter::new(webhook).map_err(RunError::WriterSetup)
}

/// Posts `body` as exactly one message.
fn post_message<H: HttpClient>(
    writer: &mut TraqWebhookWriter<H>,
    body: &[u8],
) -> Result<usize, RunError> {
    let written = writer.write(body).map_err(RunError::Post)?;
    tracing::info!(bytes = written, "Message posted");
    Ok(written)
}
