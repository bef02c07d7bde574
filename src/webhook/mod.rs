//! Webhook layer for posting messages to traQ.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Payload signing ([`compute_signature`])
//! - Posting messages ([`TraqWebhook`]) and the blocking `io::Write`
//!   adapter around it ([`TraqWebhookWriter`])

mod client;
mod error;
mod http;
mod sender;
mod signature;
mod writer;

#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod writer_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WriteError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{
    CHANNEL_ID_HEADER, CONTENT_TYPE_TEXT, DEFAULT_ORIGIN, SIGNATURE_HEADER, TraqWebhook,
    WEBHOOK_API_PATH,
};
pub use signature::compute_signature;
pub use writer::TraqWebhookWriter;
