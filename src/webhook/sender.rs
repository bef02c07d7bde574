//! traQ webhook sender: request assembly, signing, and response mapping.

use std::fmt;

use http::{HeaderName, HeaderValue, StatusCode};
use url::Url;

use super::{HttpClient, HttpRequest, WriteError, compute_signature};

/// Origin of the public traQ deployment.
pub const DEFAULT_ORIGIN: &str = "https://q.trap.jp";

/// Path segments between the origin and the webhook id.
pub const WEBHOOK_API_PATH: [&str; 3] = ["api", "v3", "webhooks"];

/// Header carrying the hex HMAC-SHA1 of the body.
pub const SIGNATURE_HEADER: &str = "X-TRAQ-Signature";

/// Header redirecting the message to another channel.
pub const CHANNEL_ID_HEADER: &str = "X-TRAQ-Channel-Id";

/// Content type of every message body.
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Posts messages to one traQ webhook.
///
/// Each call to [`post`](Self::post) sends exactly one POST request to
/// `{origin}/api/v3/webhooks/{id}?embed={1|0}` with the bytes as a plain
/// text body. When a secret is configured the body is signed with
/// [`compute_signature`] and the result sent in `X-TRAQ-Signature`.
///
/// The webhook id and origin are fixed at construction. The channel
/// override and embed flag can be changed between posts through `&mut self`
/// methods, so they can never change under an in-flight request.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use traq_writer::webhook::{ReqwestClient, TraqWebhook};
///
/// # async fn example() -> Result<(), traq_writer::webhook::WriteError> {
/// let mut webhook = TraqWebhook::new(ReqwestClient::new(), "webhook-id", "secret");
/// webhook.set_embed(false);
///
/// let written = webhook.post(b"Hello, World!").await?;
/// assert_eq!(written, 13);
/// # Ok(())
/// # }
/// ```
pub struct TraqWebhook<H> {
    client: H,
    webhook_id: String,
    secret: String,
    origin: Url,
    channel_override: Option<String>,
    embed: bool,
}

impl<H: fmt::Debug> fmt::Debug for TraqWebhook<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraqWebhook")
            .field("client", &self.client)
            .field("webhook_id", &self.webhook_id)
            .field("signed", &self.is_signed())
            .field("origin", &self.origin.as_str())
            .field("channel_override", &self.channel_override)
            .field("embed", &self.embed)
            .finish_non_exhaustive()
    }
}

impl<H> TraqWebhook<H> {
    /// Creates a sender targeting [`DEFAULT_ORIGIN`].
    ///
    /// An empty `secret` disables signing.
    #[must_use]
    pub fn new(client: H, webhook_id: impl Into<String>, secret: impl Into<String>) -> Self {
        let origin = Url::parse(DEFAULT_ORIGIN).expect("DEFAULT_ORIGIN is a valid URL");
        Self::with_origin(client, webhook_id, secret, origin)
    }

    /// Creates a sender targeting a specific traQ deployment.
    #[must_use]
    pub fn with_origin(
        client: H,
        webhook_id: impl Into<String>,
        secret: impl Into<String>,
        origin: Url,
    ) -> Self {
        Self {
            client,
            webhook_id: webhook_id.into(),
            secret: secret.into(),
            origin,
            channel_override: None,
            embed: true,
        }
    }

    /// Posts subsequent messages to `channel_id` instead of the webhook's
    /// default channel. An empty id clears the override.
    pub fn set_channel_override(&mut self, channel_id: impl Into<String>) {
        let channel_id = channel_id.into();
        self.channel_override = (!channel_id.is_empty()).then_some(channel_id);
    }

    /// Posts subsequent messages to the webhook's default channel.
    pub fn clear_channel_override(&mut self) {
        self.channel_override = None;
    }

    /// Enables or disables server-side embed rendering for subsequent messages.
    pub const fn set_embed(&mut self, enabled: bool) {
        self.embed = enabled;
    }

    /// Returns the webhook id.
    #[must_use]
    pub fn webhook_id(&self) -> &str {
        &self.webhook_id
    }

    /// Returns the configured origin.
    #[must_use]
    pub const fn origin(&self) -> &Url {
        &self.origin
    }

    /// Returns the channel override, if any.
    #[must_use]
    pub fn channel_override(&self) -> Option<&str> {
        self.channel_override.as_deref()
    }

    /// Returns whether embed rendering is requested.
    #[must_use]
    pub const fn embed(&self) -> bool {
        self.embed
    }

    /// Returns whether posts are signed.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Returns a reference to the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Builds the endpoint URL for the current embed setting.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::RequestConstruction`] if the webhook id is
    /// empty or the origin cannot carry a path.
    pub fn endpoint(&self) -> Result<Url, WriteError> {
        if self.webhook_id.is_empty() {
            return Err(WriteError::RequestConstruction(
                "webhook id is empty".to_string(),
            ));
        }

        let mut url = self.origin.clone();
        url.path_segments_mut()
            .map_err(|()| {
                WriteError::RequestConstruction(format!(
                    "origin '{}' cannot be used as a base URL",
                    self.origin
                ))
            })?
            .pop_if_empty()
            .extend(WEBHOOK_API_PATH)
            .push(&self.webhook_id);
        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .append_pair("embed", if self.embed { "1" } else { "0" });

        Ok(url)
    }

    /// Builds the request that [`post`](Self::post) would send for `body`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::RequestConstruction`] if the URL cannot be
    /// assembled or the channel override is not a valid header value.
    pub fn build_request(&self, body: &[u8]) -> Result<HttpRequest, WriteError> {
        let mut request = HttpRequest::post(self.endpoint()?, body.to_vec()).with_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_TEXT),
        );

        if self.is_signed() {
            let signature = compute_signature(&self.secret, body);
            request = request.with_header(
                HeaderName::from_static("x-traq-signature"),
                header_value(&signature, SIGNATURE_HEADER)?,
            );
        }

        if let Some(channel_id) = &self.channel_override {
            request = request.with_header(
                HeaderName::from_static("x-traq-channel-id"),
                header_value(channel_id, CHANNEL_ID_HEADER)?,
            );
        }

        Ok(request)
    }
}

impl<H: HttpClient> TraqWebhook<H> {
    /// Posts `body` as one message.
    ///
    /// Returns `body.len()` when the service answers `204 No Content`.
    /// Nothing is retried; on any error no bytes count as written.
    ///
    /// # Errors
    ///
    /// - [`WriteError::RequestConstruction`] if the request cannot be built
    /// - [`WriteError::Transport`] if the request gets no response
    /// - [`WriteError::UnexpectedStatus`] for any status other than 204
    pub async fn post(&self, body: &[u8]) -> Result<usize, WriteError> {
        let request = self.build_request(body)?;

        tracing::debug!(
            url = %request.url,
            signed = self.is_signed(),
            channel = self.channel_override.as_deref().unwrap_or("default"),
            bytes = body.len(),
            "Posting message to traQ webhook"
        );

        let response = self.client.request(request).await?;
        tracing::debug!(status = %response.status, "traQ webhook responded");

        if response.status != StatusCode::NO_CONTENT {
            return Err(WriteError::UnexpectedStatus {
                status: response.status,
                body: response.reason().map(ToString::to_string),
            });
        }

        Ok(body.len())
    }
}

fn header_value(value: &str, header: &str) -> Result<HeaderValue, WriteError> {
    HeaderValue::from_str(value)
        .map_err(|e| WriteError::RequestConstruction(format!("invalid {header} value: {e}")))
}
