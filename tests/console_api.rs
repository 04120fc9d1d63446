use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use magpie::api::{ApiError, Client};
use magpie::types::{ArticleFilter, DateRange};

fn client(base: &str) -> Client {
    Client::new(base, "test-key-123", Duration::from_secs(5))
}

/// Serve exactly one canned HTTP response on an ephemeral port, handing the
/// captured request text back through the join handle.
fn canned_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });
    (format!("http://{addr}"), handle)
}

/// Read the request head plus any Content-Length bytes of body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let content_length = parse_content_length(&String::from_utf8_lossy(&buf[..header_end]));
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn parse_content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

#[test]
fn sections_sends_key_and_decodes_payload() {
    let body = r#"{"code":0,"message":"success","data":[{"name":"movies","count":1200,"categories":["bluray","remux"]},{"name":"tv","count":80}]}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let sections = client(&base).sections().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, "movies");
    assert_eq!(sections[0].categories, vec!["bluray", "remux"]);
    assert_eq!(sections[1].count, 80);
    assert!(sections[1].categories.is_empty());

    let request = handle.join().unwrap();
    assert!(request.starts_with("GET /articles/sections HTTP/1.1\r\n"));
    assert!(request.to_lowercase().contains("x-api-key: test-key-123"));
}

#[test]
fn search_posts_filter_as_json() {
    let body = r#"{"code":0,"message":"success","data":{"total":64,"items":[{"tid":7,"website":"south","section":"movies","category":"bluray","title":"Example Release","size":870.0,"publish_date":"2024-05-01","magnet":"magnet:?xt=urn:btih:abc","preview_images":"","in_stock":true}]}}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let filter = ArticleFilter {
        page: 2,
        page_size: 30,
        keyword: "remux".into(),
        website: String::new(),
        section: "movies".into(),
        category: String::new(),
        date_range: DateRange::default(),
    };
    let result = client(&base).search_articles(&filter).unwrap();
    assert_eq!(result.total, 64);
    assert_eq!(result.items[0].tid, 7);
    assert!(result.items[0].in_stock);

    let request = handle.join().unwrap();
    assert!(request.starts_with("POST /articles/search HTTP/1.1\r\n"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.contains(r#""keyword":"remux""#));
    assert!(request.contains(r#""page":2"#));
    assert!(request.contains(r#""date_range""#));
}

#[test]
fn nonzero_code_surfaces_as_server_error() {
    let body = r#"{"code":1002,"message":"invalid api key"}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let err = client(&base).list_rules().unwrap_err();
    match err {
        ApiError::Server { code, message } => {
            assert_eq!(code, 1002);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    handle.join().unwrap();
}

#[test]
fn http_failure_status_maps_to_http_error() {
    let (base, handle) = canned_server("HTTP/1.1 500 Internal Server Error", "boom");

    let err = client(&base).sections().unwrap_err();
    match err {
        ApiError::Http { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
    handle.join().unwrap();
}

#[test]
fn delete_returns_the_ack_message() {
    let body = r#"{"code":0,"message":"delete success","data":null}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let message = client(&base).delete_rule(12).unwrap();
    assert_eq!(message, "delete success");

    let request = handle.join().unwrap();
    assert!(request.starts_with("DELETE /rules/12 HTTP/1.1\r\n"));
}

#[test]
fn login_posts_a_form_without_api_key_header() {
    let body = r#"{"code":0,"message":"success","data":{"username":"admin","token":"fresh-key"}}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let user = client(&base).login("admin", "pa ss").unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.api_key, "fresh-key");

    let request = handle.join().unwrap();
    assert!(request.starts_with("POST /users/login HTTP/1.1\r\n"));
    assert!(!request.to_lowercase().contains("x-api-key"));
    assert!(request.contains("username=admin"));
    assert!(request.contains("password=pa+ss") || request.contains("password=pa%20ss"));
}

#[test]
fn manual_push_posts_the_target() {
    let body = r#"{"code":0,"message":"push success"}"#;
    let (base, handle) = canned_server("HTTP/1.1 200 OK", body);

    let message = client(&base)
        .push_article_to(99123, "qbit-main", "/downloads/movies")
        .unwrap();
    assert_eq!(message, "push success");

    let request = handle.join().unwrap();
    assert!(request.starts_with("POST /articles/download/99123 HTTP/1.1\r\n"));
    assert!(request.contains(r#""downloader":"qbit-main""#));
    assert!(request.contains(r#""save_path":"/downloads/movies""#));
}
