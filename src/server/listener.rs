use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ServeMode};
use crate::content::composer::Composer;
use crate::content::resolver::ServerRoot;
use crate::http::connection::Connection;
use crate::http::writer::Framing;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = ServerRoot::new(&cfg.server_root)
        .with_context(|| format!("invalid server root {}", cfg.server_root.display()))?;
    if !root.as_path().is_dir() {
        tracing::warn!(root = %root, "server root is not a directory, every request will 404");
    }

    let composer = Arc::new(Composer::new(root).with_error_hook(cfg.error_hook));

    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("bind to {} failed", cfg.listen_addr))?;
    info!(
        "Listening on {} serving {}",
        cfg.listen_addr,
        composer.root()
    );

    serve(listener, composer, cfg.serve_mode, cfg.framing).await
}

/// Runs the accept side on an already bound listener.
///
/// In `Once` mode every failure is returned to the caller. In `Forever` mode
/// only accept failures are; a failing connection is logged and dropped.
pub async fn serve(
    listener: TcpListener,
    composer: Arc<Composer>,
    mode: ServeMode,
    framing: Framing,
) -> anyhow::Result<()> {
    match mode {
        ServeMode::Once => {
            let (socket, peer) = listener.accept().await.context("accept failed")?;
            info!("Accepted connection from {}", peer);
            drop(listener);

            Connection::new(socket, composer, framing).run().await?;
            info!("Response sent, shutting down");
            Ok(())
        }

        ServeMode::Forever => loop {
            let (socket, peer) = listener.accept().await.context("accept failed")?;
            info!("Accepted connection from {}", peer);

            let composer = Arc::clone(&composer);
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, composer, framing);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
            });
        },
    }
}
