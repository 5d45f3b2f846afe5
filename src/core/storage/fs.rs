//! Filesystem-backed storage.

use std::fs;
use std::io;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Storage;

/// A single text file on disk.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
    private: bool,
}

impl Filesystem {
    /// Storage at `path` with default permissions.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private: false,
        }
    }

    /// Storage at `path` readable only by the owner (0600 on Unix).
    pub fn private(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private: true,
        }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for Filesystem {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        #[cfg(unix)]
        {
            if self.private {
                use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

                let mut file = fs::OpenOptions::new()
                    .create(true)
                    .truncate(true)
                    .write(true)
                    .mode(0o600)
                    .open(&self.path)?;
                file.write_all(contents.as_bytes())?;
                file.flush()?;

                // Also tighten files created before this version.
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
                return Ok(());
            }
        }

        fs::write(&self.path, contents)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
