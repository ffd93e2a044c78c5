//! Minimal HTTP/1.1 server for upload tests.
//!
//! Answers every request with one fixed status and body, and records what it
//! received so tests can inspect headers and the multipart payload.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct CannedHttpServer {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CannedHttpServer {
    pub fn take_request(&self) -> Option<CapturedRequest> {
        let mut requests = self.requests.lock().unwrap();
        if requests.is_empty() {
            None
        } else {
            Some(requests.remove(0))
        }
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(status: u16, response_body: &str) -> CannedHttpServer {
    start_with_missing_bytes(status, response_body, 0)
}

/// Like `start`, but declares `missing_bytes` more body than it sends before
/// closing the connection, so reading the response body fails.
pub fn start_with_missing_bytes(
    status: u16,
    response_body: &str,
    missing_bytes: usize,
) -> CannedHttpServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let response_body = response_body.to_string();

    let server_requests = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            if let Some(request) = read_request(&stream) {
                server_requests.lock().unwrap().push(request);
            }
            write_response(stream, status, &response_body, missing_bytes);
        }
    });

    CannedHttpServer {
        url: format!("http://127.0.0.1:{}/api/1/upload", port),
        requests,
    }
}

fn read_request(mut stream: &TcpStream) -> Option<CapturedRequest> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));

    let mut received = Vec::new();
    let mut buf = [0u8; 8192];
    let header_end = loop {
        if let Some(position) = find_header_end(&received) {
            break position;
        }
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        received.extend_from_slice(&buf[..n]);
    };

    let head = std::str::from_utf8(&received[..header_end]).ok()?;
    let mut lines = head.split("\r\n");
    let method = lines.next()?.split_whitespace().next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while received.len() < body_start + content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        received.extend_from_slice(&buf[..n]);
    }

    let body_end = (body_start + content_length).min(received.len());
    Some(CapturedRequest {
        method,
        headers,
        body: received[body_start..body_end].to_vec(),
    })
}

fn find_header_end(received: &[u8]) -> Option<usize> {
    received.windows(4).position(|window| window == b"\r\n\r\n")
}

fn write_response(mut stream: TcpStream, status: u16, body: &str, missing_bytes: usize) {
    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len() + missing_bytes,
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
