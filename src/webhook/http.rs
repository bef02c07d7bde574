//! Transport-neutral request and response types, and the client seam.

use super::HttpError;

/// A fully assembled outbound request.
///
/// Built fresh for every message by [`TraqWebhook`](super::TraqWebhook).
/// The body is always sent, even when empty.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method; the webhook sender always uses POST
    pub method: http::Method,
    /// Target URL including the `embed` query
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Raw message bytes
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST request carrying `body`.
    #[must_use]
    pub fn post(url: url::Url, body: Vec<u8>) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body,
        }
    }

    /// Sets a header, replacing any previous value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Looks up a header by case-insensitive name.
    ///
    /// Returns `None` if the header is missing or not visible ASCII.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Status and buffered body of a response.
///
/// traQ answers an accepted webhook post with `204` and no body; rejections
/// carry a short plain-text reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: http::StatusCode,
    /// Buffered body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Creates an empty `204 No Content` response.
    #[must_use]
    pub const fn no_content() -> Self {
        Self::new(http::StatusCode::NO_CONTENT, Vec::new())
    }

    /// Returns the body as text, if it is non-empty UTF-8.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        std::str::from_utf8(&self.body)
            .ok()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Transport seam for the webhook sender.
///
/// Implementations deliver one request and buffer the response. Timeouts,
/// connection pooling and TLS all belong to the implementation; the sender
/// adds none of its own and never calls `request` more than once per
/// message. Tests swap in mocks here.
///
/// # Example
///
/// ```ignore
/// use traq_writer::webhook::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct AlwaysAccepts;
///
/// impl HttpClient for AlwaysAccepts {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::no_content())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req` and returns the buffered response.
    ///
    /// # Errors
    ///
    /// [`HttpError`] when no response was received. Error statuses are
    /// responses, not errors.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
