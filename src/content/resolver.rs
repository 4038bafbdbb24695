//! URL path to filesystem path mapping.

use std::ffi::OsString;
use std::fmt;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// The directory every served file lives under.
///
/// Always absolute; fixed for the lifetime of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRoot(PathBuf);

impl ServerRoot {
    /// Makes `dir` absolute against the current directory. Does not touch the
    /// filesystem, so the directory need not exist yet.
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self(std::path::absolute(dir.as_ref())?))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ServerRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A `..` segment would step outside the server root.
    Traversal,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Traversal => f.write_str("path escapes the server root"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Maps a URL path onto the filesystem under `root`.
///
/// Each `/` becomes the native separator and the result is appended to the
/// root as-is: no normalization and no existence check. Paths containing a
/// `..` segment are rejected.
pub fn resolve(url_path: &str, root: &ServerRoot) -> Result<PathBuf, ResolveError> {
    if url_path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ResolveError::Traversal);
    }

    let translated: String = url_path
        .chars()
        .map(|c| if c == '/' { MAIN_SEPARATOR } else { c })
        .collect();

    let mut full: OsString = root.as_path().as_os_str().to_os_string();
    full.push(translated);
    Ok(PathBuf::from(full))
}
