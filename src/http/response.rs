use std::fmt;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): file served
/// - `BadRequest` (400): request line could not be parsed
/// - `Forbidden` (403): path tried to leave the server root
/// - `NotFound` (404): no such file
/// - `MethodNotAllowed` (405): anything but GET
/// - `InternalServerError` (500): the `/error.html` hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// The fixed page sent when there is no file to serve for this status.
    pub fn default_page(&self) -> Vec<u8> {
        format!("<h1>{}</h1>", self).into_bytes()
    }
}

impl fmt::Display for StatusCode {
    /// Formats as `"<code> <reason>"`, e.g. `404 Not Found`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A complete HTTP response: a status and a body.
///
/// Headers are not stored here; whether any are emitted depends on the
/// framing chosen by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Replaces the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// `<h1>404 Not Found</h1>`
    pub fn not_found() -> Self {
        Self::default_page(StatusCode::NotFound)
    }

    /// `<h1>405 Method Not Allowed</h1>`
    pub fn method_not_allowed() -> Self {
        Self::default_page(StatusCode::MethodNotAllowed)
    }

    /// `<h1>400 Bad Request</h1>`
    pub fn bad_request() -> Self {
        Self::default_page(StatusCode::BadRequest)
    }

    /// `<h1>403 Forbidden</h1>`
    pub fn forbidden() -> Self {
        Self::default_page(StatusCode::Forbidden)
    }

    fn default_page(status: StatusCode) -> Self {
        Self::new(status).with_body(status.default_page())
    }

    /// The status line without any terminator, e.g. `HTTP/1.1 200 OK`.
    pub fn status_line(&self) -> String {
        format!("{} {}", crate::http::HTTP_VERSION, self.status)
    }
}
