//! HTTP transport tests against a local mockito server

use std::time::Duration;

use mockito::Server;
use rpclite_providers::transport::HttpTransport;
use rpclite_providers::{Error, Transport};

fn transport() -> HttpTransport {
    HttpTransport::with_timeout(Duration::from_secs(5)).expect("client builds")
}

#[test]
fn test_send_posts_payload_and_returns_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/octet-stream")
        .with_status(200)
        .with_body(vec![9_u8, 8, 7])
        .create();

    let body = transport().send(&server.url(), &[1, 2, 3]).unwrap();

    assert_eq!(body, vec![9, 8, 7]);
    mock.assert();
}

#[test]
fn test_error_status_is_a_transport_error() {
    let mut server = Server::new();
    let _mock = server.mock("POST", "/").with_status(503).create();

    let err = transport().send(&server.url(), b"x").unwrap_err();
    match err {
        Error::Transport { address, message, .. } => {
            assert_eq!(address, server.url());
            assert!(message.contains("503"), "unexpected message: {message}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_unreachable_provider_is_a_transport_error() {
    let err = transport().send("http://127.0.0.1:1", b"x").unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
}
