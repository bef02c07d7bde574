//! Blocking [`io::Write`] adapter over [`TraqWebhook`].

use std::{fmt, io};

use tokio::runtime::{Builder, Runtime};

use super::{HttpClient, TraqWebhook};

/// An [`io::Write`] sink that posts every `write` call as one traQ message.
///
/// Owns a single-threaded tokio runtime and blocks on
/// [`TraqWebhook::post`] for each write, so it can be passed to any code
/// expecting a byte sink.
///
/// On failure the returned [`io::Error`] wraps the
/// [`WriteError`](super::WriteError); recover it with
/// `err.get_ref().and_then(|e| e.downcast_ref::<WriteError>())`.
///
/// # One write, one message
///
/// Each `write` call and each `write!` invocation posts exactly one
/// message; formatted output is rendered in full before it is sent.
/// `write_all` skips empty buffers; call `write(&[])` to post an empty
/// message.
///
/// Must not be used from within an async context; call
/// [`TraqWebhook::post`] there instead.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use traq_writer::webhook::{ReqwestClient, TraqWebhook, TraqWebhookWriter};
///
/// # fn main() -> std::io::Result<()> {
/// let webhook = TraqWebhook::new(ReqwestClient::new(), "webhook-id", "secret");
/// let mut writer = TraqWebhookWriter::new(webhook)?;
///
/// writer.write_all(b"Hello, World!")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TraqWebhookWriter<H> {
    webhook: TraqWebhook<H>,
    runtime: Runtime,
}

impl<H> TraqWebhookWriter<H> {
    /// Wraps `webhook` in a blocking writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(webhook: TraqWebhook<H>) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { webhook, runtime })
    }

    /// See [`TraqWebhook::set_channel_override`].
    pub fn set_channel_override(&mut self, channel_id: impl Into<String>) {
        self.webhook.set_channel_override(channel_id);
    }

    /// See [`TraqWebhook::clear_channel_override`].
    pub fn clear_channel_override(&mut self) {
        self.webhook.clear_channel_override();
    }

    /// See [`TraqWebhook::set_embed`].
    pub const fn set_embed(&mut self, enabled: bool) {
        self.webhook.set_embed(enabled);
    }

    /// Returns a reference to the wrapped sender.
    #[must_use]
    pub const fn get_ref(&self) -> &TraqWebhook<H> {
        &self.webhook
    }

    /// Returns a mutable reference to the wrapped sender.
    pub const fn get_mut(&mut self) -> &mut TraqWebhook<H> {
        &mut self.webhook
    }

    /// Unwraps the sender, dropping the runtime.
    #[must_use]
    pub fn into_inner(self) -> TraqWebhook<H> {
        self.webhook
    }
}

impl<H: HttpClient> io::Write for TraqWebhookWriter<H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.runtime.block_on(self.webhook.post(buf))?)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let message = fmt::format(args);
        self.write(message.as_bytes()).map(drop)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
