//! Local image store implementation
//!
//! Lists and copies image files on the local filesystem.

use crate::domain::entities::{EntryKind, ImageFile};
use crate::domain::repositories::{ImageStore, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Local file system store
///
/// Symlinks are followed when classifying entries and when copying, so a
/// link to an image behaves like the image itself. Broken links are
/// listed as `EntryKind::Other`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalImageStore;

impl LocalImageStore {
    pub fn new() -> Self {
        Self
    }

    fn classify(path: &Path) -> EntryKind {
        if path.is_file() {
            EntryKind::File
        } else if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

impl ImageStore for LocalImageStore {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list(&self, dir: &Path) -> Result<Vec<ImageFile>, StoreError> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir).map_err(|e| StoreError::from_io(e, dir))? {
            let path = entry?.path();
            let kind = Self::classify(&path);
            entries.push(ImageFile::new(path, kind));
        }

        entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
        Ok(entries)
    }

    fn ensure_directory(&self, dir: &Path) -> Result<(), StoreError> {
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|e| StoreError::from_io(e, dir))?;
        }
        Ok(())
    }

    fn copy_into(&self, file: &ImageFile, dest_dir: &Path) -> Result<PathBuf, StoreError> {
        let file_name = file
            .path()
            .file_name()
            .ok_or_else(|| StoreError::NotFound(file.path().display().to_string()))?;
        let dest = dest_dir.join(file_name);

        // fs::copy truncates the destination before reading the source
        if dest.exists() && is_same_file(file.path(), &dest)? {
            return Err(StoreError::SameFile(dest.display().to_string()));
        }

        let bytes = fs::copy(file.path(), &dest).map_err(|e| StoreError::from_io(e, file.path()))?;
        tracing::debug!("Copied {} ({} bytes) to {}", file.file_name(), bytes, dest.display());

        Ok(dest)
    }
}

fn is_same_file(a: &Path, b: &Path) -> Result<bool, StoreError> {
    let a = fs::canonicalize(a).map_err(|e| StoreError::from_io(e, a))?;
    let b = fs::canonicalize(b).map_err(|e| StoreError::from_io(e, b))?;
    Ok(a == b)
}
