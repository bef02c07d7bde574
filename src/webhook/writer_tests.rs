//! Tests for the blocking `TraqWebhookWriter`.
//!
//! These are plain `#[test]` functions: the writer owns its own runtime and
//! must not be driven from inside another one.

use super::sender::{CHANNEL_ID_HEADER, SIGNATURE_HEADER};
use super::{
    HttpClient, HttpError, HttpRequest, HttpResponse, TraqWebhook, TraqWebhookWriter, WriteError,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Mock HTTP client answering every request with the same outcome.
#[derive(Debug, Default)]
struct RecordingClient {
    status: Option<http::StatusCode>,
    fail_with_timeout: bool,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingClient {
    fn answering(status: http::StatusCode) -> Arc<Self> {
        Arc::new(Self {
            status: Some(status),
            ..Self::default()
        })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            fail_with_timeout: true,
            ..Self::default()
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for Arc<RecordingClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);

        if self.fail_with_timeout {
            return Err(HttpError::Timeout);
        }

        let status = self.status.unwrap_or(http::StatusCode::NO_CONTENT);
        Ok(HttpResponse::new(status, Vec::new()))
    }
}

fn writer_for(
    client: &Arc<RecordingClient>,
    secret: &str,
) -> TraqWebhookWriter<Arc<RecordingClient>> {
    let origin = url::Url::parse("https://example.test").unwrap();
    let webhook = TraqWebhook::with_origin(Arc::clone(client), "abc123", secret, origin);
    TraqWebhookWriter::new(webhook).unwrap()
}

fn write_error(error: &io::Error) -> &WriteError {
    error
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<WriteError>())
        .expect("io::Error should wrap a WriteError")
}

mod write {
    use super::*;

    #[test]
    fn no_content_reports_full_length() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        let written = writer.write(b"Hello").unwrap();

        assert_eq!(written, 5);
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn write_all_posts_one_message() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "s3cr3t");

        writer.write_all(b"Hello, World!").unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, b"Hello, World!");
        assert_eq!(
            requests[0].header_str(SIGNATURE_HEADER),
            Some("7847667212feea76b5d78bfc3caf2d55a0c4ab38")
        );
    }

    #[test]
    fn empty_write_still_posts() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        assert_eq!(writer.write(&[]).unwrap(), 0);
        assert_eq!(client.requests().len(), 1);
        assert!(client.requests()[0].body.is_empty());
    }

    #[test]
    fn server_error_wraps_unexpected_status() {
        let client = RecordingClient::answering(http::StatusCode::INTERNAL_SERVER_ERROR);
        let mut writer = writer_for(&client, "");

        let error = writer.write(b"Hello").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::Other);
        assert_eq!(
            write_error(&error).status(),
            Some(http::StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn timeout_maps_to_timed_out_kind() {
        let client = RecordingClient::timing_out();
        let mut writer = writer_for(&client, "");

        let error = writer.write(b"Hello").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::TimedOut);
        assert!(matches!(
            write_error(&error),
            WriteError::Transport(HttpError::Timeout)
        ));
    }

    #[test]
    fn construction_error_maps_to_invalid_input() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let origin = url::Url::parse("https://example.test").unwrap();
        let webhook = TraqWebhook::with_origin(Arc::clone(&client), "", "", origin);
        let mut writer = TraqWebhookWriter::new(webhook).unwrap();

        let error = writer.write(b"Hello").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
        assert!(client.requests().is_empty());
    }

    #[test]
    fn write_macro_posts_one_message() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "s3cr3t");
        let name = "World";

        write!(writer, "Hello, {name}!").unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, b"Hello, World!");
        assert_eq!(
            requests[0].header_str(SIGNATURE_HEADER),
            Some("7847667212feea76b5d78bfc3caf2d55a0c4ab38")
        );
    }

    #[test]
    fn write_macro_failure_is_reported_once() {
        let client = RecordingClient::answering(http::StatusCode::BAD_REQUEST);
        let mut writer = writer_for(&client, "");

        let error = write!(writer, "{} + {} = {}", 1, 2, 3).unwrap_err();

        assert_eq!(client.requests().len(), 1);
        assert_eq!(
            write_error(&error).status(),
            Some(http::StatusCode::BAD_REQUEST)
        );
    }

    #[test]
    fn flush_is_a_no_op() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        writer.flush().unwrap();

        assert!(client.requests().is_empty());
    }

    #[test]
    fn usable_as_generic_sink() {
        fn emit(sink: &mut impl Write, a: u32, b: u32) -> io::Result<()> {
            write!(sink, "{a} + {b} = {}", a + b)
        }

        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        emit(&mut writer, 1, 2).unwrap();

        assert_eq!(client.requests().len(), 1);
        assert_eq!(client.requests()[0].body, b"1 + 2 = 3");
    }
}

mod mutators {
    use super::*;

    #[test]
    fn embed_and_channel_apply_to_next_write() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        writer.set_embed(false);
        writer.set_channel_override("channel-1");
        writer.write_all(b"first").unwrap();

        writer.set_embed(true);
        writer.clear_channel_override();
        writer.write_all(b"second").unwrap();

        let requests = client.requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://example.test/api/v3/webhooks/abc123?embed=0"
        );
        assert_eq!(requests[0].header_str(CHANNEL_ID_HEADER), Some("channel-1"));
        assert_eq!(
            requests[1].url.as_str(),
            "https://example.test/api/v3/webhooks/abc123?embed=1"
        );
        assert!(!requests[1].headers.contains_key(CHANNEL_ID_HEADER));
    }

    #[test]
    fn get_mut_reaches_sender() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");

        writer.get_mut().set_embed(false);

        assert!(!writer.get_ref().embed());
    }

    #[test]
    fn into_inner_returns_sender() {
        let client = RecordingClient::answering(http::StatusCode::NO_CONTENT);
        let mut writer = writer_for(&client, "");
        writer.set_channel_override("channel-1");

        let webhook = writer.into_inner();

        assert_eq!(webhook.webhook_id(), "abc123");
        assert_eq!(webhook.channel_override(), Some("channel-1"));
    }
}
