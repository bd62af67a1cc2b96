//! End-to-end checks of `HttpTransport` + `SessionClient` against a canned HTTP
//! responder running on a local `TcpListener`.
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, unbounded};
use policy_client::{HttpTransport, SessionClient, Transport};
use policy_common::{PhoneNumber, PolicyError};

const WAIT: Duration = Duration::from_secs(5);

/// Serves exactly one request with `status_line` and `body`, reporting the raw request text.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
    serve_once_with_headers(status_line, "", body)
}

/// Like `serve_once`, with `extra_headers` (each ending in `\r\n`) added to the response.
fn serve_once_with_headers(
    status_line: &'static str,
    extra_headers: &'static str,
    body: &'static str,
) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        tx.send(request).unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\n{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            extra_headers,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{}", addr), rx)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(end) = find_header_end(&data) {
            let head = String::from_utf8_lossy(&data[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Transport that talks to the local responder directly, ignoring proxy settings.
fn transport(base_url: &str, timeout: Duration) -> HttpTransport {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    HttpTransport::with_client(client, base_url)
}

fn client(base_url: &str) -> SessionClient<HttpTransport> {
    SessionClient::new(transport(base_url, WAIT))
}

#[test]
fn request_otp_posts_json_body() {
    let (base, requests) = serve_once("200 OK", r#"{"message":"OTP sent"}"#);

    let phone = client(&base).request_otp("1234567890").unwrap();

    assert_eq!(phone.as_str(), "1234567890");
    let request = requests.recv_timeout(WAIT).unwrap();
    assert!(request.starts_with("POST /auth/request-otp HTTP/1.1\r\n"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"phoneNumber":"1234567890"}"#));
}

#[test]
fn verify_otp_returns_session_with_token() {
    let (base, requests) = serve_once(
        "200 OK",
        r#"{"tokenType":"Bearer","accessToken":"eyJhbGciOi.abc","expiresIn":900}"#,
    );
    let phone = PhoneNumber::parse("1234567890").unwrap();

    let session = client(&base).verify_otp(&phone, "4321").unwrap();

    assert_eq!(session.token(), "eyJhbGciOi.abc");
    let request = requests.recv_timeout(WAIT).unwrap();
    assert!(request.starts_with("POST /auth/verify-otp HTTP/1.1\r\n"));
    assert!(request.ends_with(r#"{"phoneNumber":"1234567890","otp":"4321"}"#));
}

#[test]
fn fetch_sends_authorization_header() {
    let payload = r#"[{"policyNumber":101,"holder":"A"}]"#;
    let (base, requests) = serve_once("200 OK", payload);

    let body = client(&base).fetch_authorized_data("Bearer abc123").unwrap();

    assert_eq!(body, payload);
    let request = requests.recv_timeout(WAIT).unwrap();
    assert!(request.starts_with("GET /api/details HTTP/1.1\r\n"));
    assert!(request.to_lowercase().contains("authorization: bearer abc123"));
}

#[test]
fn non_200_status_is_http_failure_with_body() {
    let (base, _requests) = serve_once("401 Unauthorized", r#"{"error":"invalid otp"}"#);
    let phone = PhoneNumber::parse("1234567890").unwrap();

    match client(&base).verify_otp(&phone, "0000") {
        Err(PolicyError::HttpFailure { code, body }) => {
            assert_eq!(code, 401);
            assert_eq!(body, r#"{"error":"invalid otp"}"#);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn transport_returns_non_200_as_response() {
    let (base, _requests) = serve_once("500 Internal Server Error", "oops");
    let http = transport(&base, WAIT);

    let response = http.get_authorized("/api/details", "Bearer x").unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.body, "oops");
}

#[test]
fn redirect_is_reported_as_http_failure() {
    let (base, requests) = serve_once_with_headers(
        "303 See Other",
        "Location: /login-page\r\n",
        "<html></html>",
    );
    let transport = HttpTransport::new(&base, Some(WAIT)).unwrap();
    let phone = PhoneNumber::parse("1234567890").unwrap();

    match SessionClient::new(transport).verify_otp(&phone, "4321") {
        Err(PolicyError::HttpFailure { code, body }) => {
            assert_eq!(code, 303);
            assert_eq!(body, "<html></html>");
        }
        other => panic!("unexpected: {:?}", other),
    }
    let request = requests.recv_timeout(WAIT).unwrap();
    assert!(request.starts_with("POST /auth/verify-otp HTTP/1.1\r\n"));
}

#[test]
fn temporary_redirect_on_fetch_is_not_followed() {
    let (base, _requests) =
        serve_once_with_headers("302 Found", "Location: /elsewhere\r\n", "");
    let transport = HttpTransport::new(&base, Some(WAIT)).unwrap();

    let response = transport.get_authorized("/api/details", "Bearer x").unwrap();

    assert_eq!(response.status, 302);
    assert!(!response.is_success());
}

#[test]
fn new_builds_transport_for_base_url() {
    let transport = HttpTransport::new("http://localhost:8080", None).unwrap();
    assert_eq!(transport.base_url(), "http://localhost:8080");
}

#[test]
fn refused_connection_is_connection_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let result = client(&format!("http://{}", addr)).request_otp("1234567890");

    assert!(matches!(result, Err(PolicyError::Connection(_))));
}

#[test]
fn stalled_backend_times_out_when_configured() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
    });
    let http = transport(&format!("http://{}", addr), Duration::from_millis(300));

    let result = SessionClient::new(http).fetch_authorized_data("Bearer x");

    assert!(matches!(result, Err(PolicyError::Connection(_))));
}
