use minihttp::http::parser::{ParseError, parse_request, request_line_complete};
use minihttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_nested_path() {
    let parsed = parse_request(b"GET /css/site/main.css HTTP/1.0\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/css/site/main.css");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_bare_newlines() {
    let parsed = parse_request(b"GET /a.html HTTP/1.1\nHost: x\n\n").unwrap();

    assert_eq!(parsed.path, "/a.html");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_query_string_is_kept_verbatim() {
    let parsed = parse_request(b"GET /search?q=rust HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_does_not_decode_percent_escapes() {
    let parsed = parse_request(b"GET /a%20b.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/a%20b.html");
}

#[test]
fn test_parse_only_first_line_matters() {
    let req = b"GET /first HTTP/1.1\r\nReferer: /second thing\r\n\r\nbody / more";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.path, "/first");
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::Unsupported("POST".to_string())),
        ("PUT", Method::Unsupported("PUT".to_string())),
        ("DELETE", Method::Unsupported("DELETE".to_string())),
        ("HEAD", Method::Unsupported("HEAD".to_string())),
        ("OPTIONS", Method::Unsupported("OPTIONS".to_string())),
        ("PATCH", Method::Unsupported("PATCH".to_string())),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_unknown_method_is_not_an_error() {
    let parsed = parse_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Unsupported("BREW".to_string()));
    assert_eq!(parsed.path, "/pot");
}

#[test]
fn test_parse_missing_slash_is_malformed() {
    let result = parse_request(b"GET index.html\r\n\r\n");

    assert_eq!(result, Err(ParseError::MalformedRequest));
}

#[test]
fn test_parse_truncated_line_is_malformed() {
    // Path present but never terminated by a space.
    assert_eq!(parse_request(b"GET /index.html"), Err(ParseError::MalformedRequest));
    assert_eq!(
        parse_request(b"GET /index.html\r\n\r\n"),
        Err(ParseError::MalformedRequest)
    );
}

#[test]
fn test_parse_empty_buffer_is_malformed() {
    assert_eq!(parse_request(b""), Err(ParseError::MalformedRequest));
}

#[test]
fn test_parse_non_utf8_path_is_decoded_lossily() {
    let parsed = parse_request(b"GET /caf\xe9.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/caf\u{FFFD}.html");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_non_utf8_method_is_unsupported() {
    let parsed = parse_request(b"P\xffST /index.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Unsupported("P\u{FFFD}ST".to_string()));
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_invalid_utf8_after_first_line_is_ignored() {
    let parsed = parse_request(b"GET / HTTP/1.1\r\nX: \xff\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/");
}

#[test]
fn test_request_line_complete() {
    assert!(request_line_complete(b"GET / HTTP/1.1\r\n"));
    assert!(request_line_complete(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"));
    assert!(!request_line_complete(b"GET / HTTP/1.1"));
    assert!(!request_line_complete(b""));
}
