use serde::Deserialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// How a response is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// `HTTP/1.1 200 OK\n\n<body>`: bare newlines, no headers. Byte-compatible
    /// with the old single-shot server.
    #[default]
    Legacy,
    /// CRLF line endings with `Content-Length` and `Connection: close`.
    Standard,
}

impl Framing {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(Framing::Legacy),
            "standard" => Some(Framing::Standard),
            _ => None,
        }
    }
}

pub fn serialize_response(resp: &Response, framing: Framing) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64 + resp.body.len());

    buf.extend_from_slice(resp.status_line().as_bytes());

    match framing {
        Framing::Legacy => {
            buf.extend_from_slice(b"\n\n");
        }
        Framing::Standard => {
            buf.extend_from_slice(b"\r\n");
            let headers = format!(
                "Content-Length: {}\r\nConnection: close\r\n",
                resp.body.len()
            );
            buf.extend_from_slice(headers.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
    }

    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, framing: Framing) -> Self {
        Self {
            buffer: serialize_response(response, framing),
            written: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
