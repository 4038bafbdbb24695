//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve static files: one request per connection,
//! only the request line is read, and responses are a status line plus body.
//!
//! # Architecture
//!
//! - **`connection`**: drives one client through the request-response state machine
//! - **`parser`**: extracts method and path from the raw request bytes
//! - **`request`**: the parsed request line
//! - **`response`**: status codes and the response value
//! - **`writer`**: serializes a response (legacy or standard framing) and writes it out
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer the request
//!        └──────┬──────┘
//!               │ Request line complete / EOF / size cap
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse + compose the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down write half
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use minihttp::content::composer::Composer;
//! use minihttp::content::resolver::ServerRoot;
//! use minihttp::http::connection::Connection;
//! use minihttp::http::writer::Framing;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let composer = Arc::new(Composer::new(ServerRoot::new("./www")?));
//!     let listener = TcpListener::bind("127.0.0.1:3000").await?;
//!     let (socket, _addr) = listener.accept().await?;
//!     Connection::new(socket, composer, Framing::Legacy).run().await
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// The only protocol version the server speaks.
pub const HTTP_VERSION: &str = "HTTP/1.1";
