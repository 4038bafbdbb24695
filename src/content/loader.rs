use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// A whole file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent(Vec<u8>);

impl FileContent {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Reads the file at `path` in one go.
///
/// Returns `None` if the file cannot be served for any reason: missing,
/// unreadable, or not a regular file. The cause is only logged.
pub async fn load(path: &Path) -> Option<FileContent> {
    match read_whole(path).await {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "file unavailable");
            None
        }
    }
}

async fn read_whole(path: &Path) -> std::io::Result<FileContent> {
    let file = File::open(path).await?;
    let metadata = file.metadata().await?;

    if !metadata.is_file() {
        return Err(std::io::Error::other("not a regular file"));
    }

    // Sized to the length at open time; later growth is not picked up.
    let len = metadata.len();
    let capacity = usize::try_from(len).map_err(std::io::Error::other)?;
    let mut buf = Vec::with_capacity(capacity);
    file.take(len).read_to_end(&mut buf).await?;

    Ok(FileContent(buf))
}
