//! Payload signing for traQ webhooks.
//!
//! traQ verifies signed webhook posts by recomputing an HMAC-SHA1 of the raw
//! body with the webhook secret and comparing it to the `X-TRAQ-Signature`
//! header. SHA-1 is what the server checks against, so it is kept as is.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Computes the lowercase hex HMAC-SHA1 of `body` keyed by `secret`.
///
/// The result is always 40 characters long.
///
/// # Example
///
/// ```
/// use traq_writer::webhook::compute_signature;
///
/// let signature = compute_signature("s3cr3t", b"Hello, World!");
/// assert_eq!(signature, "7847667212feea76b5d78bfc3caf2d55a0c4ab38");
/// ```
#[must_use]
pub fn compute_signature(secret: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}
