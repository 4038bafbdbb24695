//! Turns a parsed request into a response.
//!
//! The branch order is fixed:
//!
//! 1. anything but GET gets 405;
//! 2. `/` is served as `/index.html`;
//! 3. `/error.html`, when present and the hook is on, is served with 500;
//! 4. any other path is served with 200;
//! 5. a missing target falls back to `/404.html`, then to a built-in page,
//!    always with 404 (this wins over the 500 of step 3).

use crate::content::loader::{self, FileContent};
use crate::content::resolver::{self, ResolveError, ServerRoot};
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

const INDEX_PAGE: &str = "/index.html";
const ERROR_PAGE: &str = "/error.html";
const NOT_FOUND_PAGE: &str = "/404.html";

/// Serves files from one [`ServerRoot`].
///
/// Holds no mutable state, so a single instance can be shared between
/// connections behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Composer {
    root: ServerRoot,
    error_hook: bool,
}

impl Composer {
    pub fn new(root: ServerRoot) -> Self {
        Self {
            root,
            error_hook: true,
        }
    }

    /// Toggles serving `/error.html` with a 500 status. On by default.
    pub fn with_error_hook(mut self, enabled: bool) -> Self {
        self.error_hook = enabled;
        self
    }

    pub fn root(&self) -> &ServerRoot {
        &self.root
    }

    /// Parses a raw request and composes the answer. A request line that
    /// cannot be parsed gets 400.
    pub async fn respond(&self, raw: &[u8]) -> Response {
        match parse_request(raw) {
            Ok(request) => self.compose(&request).await,
            Err(e) => {
                tracing::warn!(error = %e, bytes = raw.len(), "rejecting request");
                Response::bad_request()
            }
        }
    }

    pub async fn compose(&self, request: &Request) -> Response {
        let response = self.select(request).await;

        tracing::info!(
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "request served"
        );

        response
    }

    async fn select(&self, request: &Request) -> Response {
        if !request.method.is_supported() {
            return Response::method_not_allowed();
        }

        let target = effective_path(&request.path);

        let status = if self.error_hook && target == ERROR_PAGE {
            StatusCode::InternalServerError
        } else {
            StatusCode::Ok
        };

        match self.lookup(target).await {
            Ok(Some(content)) => Response::new(status).with_body(content.into_bytes()),
            Ok(None) => self.not_found().await,
            Err(ResolveError::Traversal) => {
                tracing::warn!(path = %request.path, "path traversal rejected");
                Response::forbidden()
            }
        }
    }

    async fn not_found(&self) -> Response {
        match self.lookup(NOT_FOUND_PAGE).await {
            Ok(Some(page)) => Response::new(StatusCode::NotFound).with_body(page.into_bytes()),
            _ => Response::not_found(),
        }
    }

    async fn lookup(&self, url_path: &str) -> Result<Option<FileContent>, ResolveError> {
        let path = resolver::resolve(url_path, &self.root)?;
        Ok(loader::load(&path).await)
    }
}

/// `/` and `/index.html` both mean the index page; everything else is used verbatim.
pub fn effective_path(path: &str) -> &str {
    match path {
        "/" | INDEX_PAGE => INDEX_PAGE,
        other => other,
    }
}
