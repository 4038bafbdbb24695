use std::fmt;

/// HTTP request methods.
///
/// Only GET is served. Any other token is kept verbatim in `Unsupported` so
/// it shows up by name in logs; those requests are answered with 405 Method
/// Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Whatever was found where the method should be, possibly empty
    Unsupported(String),
}

/// Represents a parsed HTTP request line.
///
/// Headers and body are never looked at, so only the request line survives
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path, always starting with `/` (e.g. "/index.html")
    pub path: String,
    /// Whatever followed the path on the request line (typically "HTTP/1.1")
    pub version: String,
}

impl Method {
    /// Maps a method token; never fails.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Unsupported("get".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            other => Method::Unsupported(other.to_string()),
        }
    }

    /// Whether the server answers this method with content.
    pub fn is_supported(&self) -> bool {
        *self == Method::GET
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Unsupported(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: "HTTP/1.1".to_string(),
        }
    }

    /// Shorthand for a GET request, mostly useful when driving the composer directly.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }
}
