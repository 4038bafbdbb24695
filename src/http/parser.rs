use std::fmt;

use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has no path, or the path is not followed by a space
    /// (truncated line, or not HTTP at all).
    MalformedRequest,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRequest => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line out of a raw request buffer.
///
/// Only the first line is inspected; headers and body are ignored. The method
/// is whatever precedes the first space and never causes a failure on its own.
/// The path runs from the first `/` on the line up to the next space.
///
/// Bytes are split before any decoding, and invalid UTF-8 in the method or
/// path is replaced lossily instead of rejected.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let line = request_line(buf);

    let method_end = line.iter().position(|&b| b == b' ').unwrap_or(line.len());
    let method = Method::from_token(&String::from_utf8_lossy(&line[..method_end]));

    let path_start = line
        .iter()
        .position(|&b| b == b'/')
        .ok_or(ParseError::MalformedRequest)?;
    let rest = &line[path_start..];
    let path_len = rest
        .iter()
        .position(|&b| b == b' ')
        .ok_or(ParseError::MalformedRequest)?;

    let path = String::from_utf8_lossy(&rest[..path_len]).into_owned();
    let version = String::from_utf8_lossy(&rest[path_len + 1..])
        .trim()
        .to_string();

    Ok(Request {
        method,
        path,
        version,
    })
}

fn request_line(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == b'\n').unwrap_or(buf.len());
    let line = &buf[..end];
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Whether the buffer already holds the whole request line.
pub fn request_line_complete(buf: &[u8]) -> bool {
    buf.contains(&b'\n')
}
