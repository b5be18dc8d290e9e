//! Image store trait
//!
//! Defines the interface for listing and copying image files.

use crate::domain::entities::ImageFile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when accessing the image store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Source and destination are the same file: {0}")]
    SameFile(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    /// Classifies an I/O error raised while touching `path`
    pub fn from_io(e: std::io::Error, path: &Path) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StoreError::PermissionDenied(path.display().to_string())
            }
            _ => StoreError::IoError(e),
        }
    }
}

/// Trait for the storage holding the compared directories
///
/// Listing is never recursive: subdirectories come back as single
/// entries of kind `Directory`.
pub trait ImageStore {
    /// Returns true if `path` exists and is a directory
    fn is_directory(&self, path: &Path) -> bool;

    /// Lists the direct entries of `dir`, sorted by file name
    fn list(&self, dir: &Path) -> Result<Vec<ImageFile>, StoreError>;

    /// Creates `dir` and any missing parents
    fn ensure_directory(&self, dir: &Path) -> Result<(), StoreError>;

    /// Copies `file` into `dest_dir` under its original name
    ///
    /// An existing file with the same name is overwritten. Copying a file
    /// onto itself fails with `StoreError::SameFile` and leaves it intact.
    /// Returns the destination path.
    fn copy_into(&self, file: &ImageFile, dest_dir: &Path) -> Result<PathBuf, StoreError>;
}
