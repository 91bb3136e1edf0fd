use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FolderForgeError, Result};

/// Create a single directory. An existing directory at `path` is accepted.
pub fn create_folder(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Created folder");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            tracing::debug!(path = %path.display(), "Folder already exists");
            Ok(())
        }
        Err(e) => Err(FolderForgeError::io(path, e)),
    }
}

/// A folder created during this session and the number shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFolder {
    pub index: usize,
    pub path: PathBuf,
}

/// Numbered list of folders created in one create-mode session.
///
/// Numbers start at 1 and follow creation order.
#[derive(Debug, Default)]
pub struct FolderRegistry {
    folders: Vec<RegisteredFolder>,
}

impl FolderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` and return its number.
    pub fn register(&mut self, path: PathBuf) -> usize {
        let index = self.folders.len() + 1;
        self.folders.push(RegisteredFolder { index, path });
        index
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        index
            .checked_sub(1)
            .and_then(|i| self.folders.get(i))
            .map(|f| f.path.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFolder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
