#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use minihttp::content::resolver::ServerRoot;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch server root under the system temp dir, removed on drop.
pub struct TempRoot {
    dir: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("minihttp-test-{}-{}", std::process::id(), id));
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn with_file(self, name: &str, content: &[u8]) -> Self {
        let path = self.dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn server_root(&self) -> ServerRoot {
        ServerRoot::new(&self.dir).unwrap()
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
