//! traq-writer: post byte output to traQ as chat messages.
//!
//! The [`webhook`] module holds the sender: it signs a byte buffer with the
//! webhook secret, posts it to `{origin}/api/v3/webhooks/{id}`, and maps the
//! response to a byte count or an error. [`webhook::TraqWebhookWriter`]
//! exposes it as an [`std::io::Write`] sink.
//!
//! The [`config`] module backs the `traq-writer` binary.

pub mod config;
pub mod webhook;
