//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn webhook_url() -> url::Url {
    url::Url::parse("https://example.test/api/v3/webhooks/abc123?embed=1").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_starts_without_headers() {
        let req = HttpRequest::post(webhook_url(), b"Hello".to_vec());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, webhook_url());
        assert!(req.headers.is_empty());
        assert_eq!(req.body, b"Hello");
    }

    #[test]
    fn empty_body_is_kept() {
        let req = HttpRequest::post(webhook_url(), Vec::new());

        assert!(req.body.is_empty());
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let req = HttpRequest::post(webhook_url(), Vec::new())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain; charset=utf-8"),
            );

        assert_eq!(req.headers.get_all(http::header::CONTENT_TYPE).iter().count(), 1);
        assert_eq!(
            req.header_str("Content-Type"),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn header_str_is_case_insensitive() {
        let req = HttpRequest::post(webhook_url(), Vec::new()).with_header(
            http::HeaderName::from_static("x-traq-channel-id"),
            http::HeaderValue::from_static("channel-1"),
        );

        assert_eq!(req.header_str("X-TRAQ-Channel-Id"), Some("channel-1"));
        assert_eq!(req.header_str("x-traq-signature"), None);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn no_content_is_empty_204() {
        let resp = HttpResponse::no_content();

        assert_eq!(resp.status, http::StatusCode::NO_CONTENT);
        assert!(resp.body.is_empty());
        assert_eq!(resp.reason(), None);
    }

    #[test]
    fn reason_trims_text_body() {
        let resp = HttpResponse::new(http::StatusCode::BAD_REQUEST, b"  invalid channel\n".to_vec());

        assert_eq!(resp.reason(), Some("invalid channel"));
    }

    #[test]
    fn whitespace_body_has_no_reason() {
        let resp = HttpResponse::new(http::StatusCode::NOT_FOUND, b" \r\n".to_vec());

        assert_eq!(resp.reason(), None);
    }

    #[test]
    fn invalid_utf8_has_no_reason() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![0xFF, 0xFE]);

        assert_eq!(resp.reason(), None);
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("network unavailable");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        let error = HttpError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn invalid_url_displays_message() {
        let error = HttpError::InvalidUrl("missing scheme".to_string());

        assert!(error.to_string().contains("Invalid URL"));
        assert!(error.to_string().contains("missing scheme"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;

    /// Answers 200 with the request body echoed back.
    struct EchoClient;

    impl HttpClient for EchoClient {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::new(http::StatusCode::OK, req.body))
        }
    }

    #[tokio::test]
    async fn client_receives_full_body() {
        let req = HttpRequest::post(webhook_url(), b"Hello".to_vec());

        let resp = EchoClient.request(req).await.unwrap();

        assert_eq!(resp.reason(), Some("Hello"));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_client<T: HttpClient>() {}
        assert_client::<EchoClient>();
    }
}
