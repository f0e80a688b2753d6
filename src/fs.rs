//! Text file access used by the generator.
//! The generator only ever needs whole-file reads, whole-file writes and
//! existence checks, so that is all this abstraction offers.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Whole-file text access to the project tree.
pub trait FileSystem {
    /// Reads the file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes `content` to `path`, creating missing parent directories.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Returns whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(Error::IoError)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        fs::write(path, content).map_err(Error::IoError)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
