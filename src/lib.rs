//! minihttp - a tiny static file server
//!
//! Answers GET requests with files from a server root, one request per
//! connection.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
