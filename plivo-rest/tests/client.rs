use std::cell::RefCell;
use std::io;

use plivo_rest::{Config, HttpRequest, HttpResponse, Method, RestClient, RestError, Transport};

// ── In-memory transport ───────────────────────────────────────────────────────

struct MemTransport {
    sent:     RefCell<Vec<HttpRequest>>,
    status:   u16,
    body:     Vec<u8>,
    fail:     bool,
}

impl MemTransport {
    fn answering(status: u16, body: &[u8]) -> Self {
        Self { sent: RefCell::new(Vec::new()), status, body: body.to_vec(), fail: false }
    }

    fn failing() -> Self {
        Self { fail: true, ..Self::answering(200, b"") }
    }

    fn last(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().unwrap()
    }
}

impl Transport for MemTransport {
    type Error = io::Error;

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.sent.borrow_mut().push(request.clone());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
        }
        Ok(HttpResponse { status: self.status, body: self.body.clone() })
    }
}

fn config() -> Config {
    Config {
        base_url:   "http://127.0.0.1:8088".into(),
        auth_id:    "MAXXXXXXXXXXXXXXXXXX".into(),
        auth_token: "token123".into(),
    }
}

const NONE: [(&str, &str); 0] = [];

// ── Request building ──────────────────────────────────────────────────────────

#[test]
fn post_sends_form_body_and_basic_auth() {
    let client = RestClient::new(config(), MemTransport::answering(201, b"<Response/>"));
    let body = client.request("/v0.1/Call/", Method::Post, [("From", "1000"), ("To", "2000")]).unwrap();
    assert_eq!(body, b"<Response/>");

    let req = client.transport().last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://127.0.0.1:8088/v0.1/Call/");
    assert_eq!(req.body.as_deref(), Some("From=1000&To=2000"));
    assert_eq!(req.header("Content-Type"), Some("application/x-www-form-urlencoded"));
    // base64("MAXXXXXXXXXXXXXXXXXX:token123")
    assert_eq!(req.header("Authorization"), Some("Basic TUFYWFhYWFhYWFhYWFhYWFhYWFg6dG9rZW4xMjM="));
}

#[test]
fn relative_path_gets_a_slash() {
    let client = RestClient::new(config(), MemTransport::answering(200, b""));
    let req = client.build_request("v0.1/Call/", Method::Post, NONE).unwrap();
    assert_eq!(req.url, "http://127.0.0.1:8088/v0.1/Call/");
}

#[test]
fn empty_path_is_rejected() {
    let client = RestClient::new(config(), MemTransport::answering(200, b""));
    assert!(matches!(client.request("", Method::Get, NONE), Err(RestError::InvalidPath)));
    assert!(client.transport().sent.borrow().is_empty());
}

#[test]
fn get_puts_fields_in_query() {
    let client = RestClient::new(config(), MemTransport::answering(200, b"ok"));
    let req = client.build_request("/v0.1/ScheduleHangup/", Method::Get, [("CallUUID", "abc"), ("Time", "30")]).unwrap();
    assert_eq!(req.url, "http://127.0.0.1:8088/v0.1/ScheduleHangup/?CallUUID=abc&Time=30");
    assert_eq!(req.body, None);
    assert_eq!(req.header("Content-Type"), None);

    let plain = client.build_request("/v0.1/HangupAllCalls/", Method::Get, NONE).unwrap();
    assert_eq!(plain.url, "http://127.0.0.1:8088/v0.1/HangupAllCalls/");
}

#[test]
fn get_extends_an_existing_query() {
    let client = RestClient::new(config(), MemTransport::answering(200, b""));
    let req = client.build_request("/v0.1/Info/?verbose=1", Method::Get, [("a", "b c")]).unwrap();
    assert_eq!(req.url, "http://127.0.0.1:8088/v0.1/Info/?verbose=1&a=b+c");
}

#[test]
fn put_and_delete_carry_a_body() {
    let client = RestClient::new(config(), MemTransport::answering(200, b""));
    for method in [Method::Put, Method::Delete] {
        let req = client.build_request("/x", method, [("k", "v")]).unwrap();
        assert_eq!(req.method, method);
        assert_eq!(req.body.as_deref(), Some("k=v"));
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[test]
fn status_300_and_above_is_an_error() {
    let client = RestClient::new(config(), MemTransport::answering(401, b"unauthorized"));
    match client.hangup_all_calls() {
        Err(RestError::Http { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, b"unauthorized");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[test]
fn transport_failures_pass_through() {
    let client = RestClient::new(config(), MemTransport::failing());
    let err = client.call(NONE).unwrap_err();
    assert!(matches!(err, RestError::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

// ── Helper endpoints ──────────────────────────────────────────────────────────

#[test]
fn helpers_hit_their_endpoints() {
    let t = MemTransport::answering(200, b"");
    let client = RestClient::new(config(), &t);
    let params = [("CallUUID", "abc")];

    client.call(params).unwrap();
    client.bulk_call(params).unwrap();
    client.transfer_call(params).unwrap();
    client.hangup_call(params).unwrap();
    client.hangup_all_calls().unwrap();
    client.schedule_hangup(params).unwrap();
    client.cancel_scheduled_hangup(params).unwrap();

    let seen: Vec<(Method, String)> = t
        .sent
        .borrow()
        .iter()
        .map(|r| (r.method, r.url.trim_start_matches("http://127.0.0.1:8088").to_owned()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Method::Post, "/v0.1/Call/".to_owned()),
            (Method::Post, "/v0.1/BulkCalls/".to_owned()),
            (Method::Post, "/v0.1/TransferCall/".to_owned()),
            (Method::Post, "/v0.1/HangupCall/".to_owned()),
            (Method::Get, "/v0.1/HangupAllCalls/".to_owned()),
            (Method::Get, "/v0.1/ScheduleHangup/?CallUUID=abc".to_owned()),
            (Method::Get, "/v0.1/CancelScheduledHangup/?CallUUID=abc".to_owned()),
        ],
    );
}
