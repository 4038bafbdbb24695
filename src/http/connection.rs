use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::content::composer::Composer;
use crate::http::parser::request_line_complete;
use crate::http::writer::{Framing, ResponseWriter};

/// Upper bound on how much of a request is buffered before it is handled.
pub const MAX_REQUEST_BYTES: usize = 20_000;

/// One client connection, serving exactly one request.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    composer: Arc<Composer>,
    framing: Framing,
}

pub enum ConnectionState {
    Reading,
    Processing,
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, composer: Arc<Composer>, framing: Framing) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            composer,
            framing,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    if self.read_request().await? {
                        self.state = ConnectionState::Processing;
                    } else {
                        tracing::debug!("client closed connection before sending anything");
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Processing => {
                    let response = self.composer.respond(&self.buffer).await;
                    let writer = ResponseWriter::new(&response, self.framing);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("send failed")?;
                    tracing::debug!(bytes = writer.len(), "response sent");

                    self.stream.shutdown().await.context("shutdown failed")?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Buffers the request until the request line is complete, the client
    /// stops sending, or `MAX_REQUEST_BYTES` is reached. Headers are not
    /// waited for.
    ///
    /// Returns `false` if the client sent nothing at all.
    pub async fn read_request(&mut self) -> anyhow::Result<bool> {
        while self.buffer.len() < MAX_REQUEST_BYTES {
            if request_line_complete(&self.buffer) {
                break;
            }

            let n = (&mut self.stream)
                .take((MAX_REQUEST_BYTES - self.buffer.len()) as u64)
                .read_buf(&mut self.buffer)
                .await
                .context("recv failed")?;

            if n == 0 {
                break;
            }
        }

        Ok(!self.buffer.is_empty())
    }
}
