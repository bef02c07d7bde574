//! `reqwest`-backed transport.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] on top of `reqwest::Client`.
///
/// Clones share one connection pool, so a single client can back any
/// number of webhook senders.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use traq_writer::webhook::{ReqwestClient, TraqWebhook};
///
/// # fn main() -> Result<(), traq_writer::webhook::HttpError> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let _webhook = TraqWebhook::new(client.clone(), "webhook-id", "");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with reqwest's defaults (no request timeout).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client whose requests fail with [`HttpError::Timeout`]
    /// once `timeout` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be
    /// initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::from_client)
            .map_err(|e| HttpError::Connection(Box::new(e)))
    }

    /// Wraps a preconfigured reqwest client (proxies, custom TLS, ...).
    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers)
            .body(req.body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Sorts a reqwest failure into the transport error taxonomy.
fn classify(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::Connection(Box::new(error))
    }
}
