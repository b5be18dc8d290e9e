//! Errors that abort a resolve run

use crate::domain::repositories::StoreError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input directory an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    Source,
    Upscaled,
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryRole::Source => write!(f, "source"),
            DirectoryRole::Upscaled => write!(f, "upscaled"),
        }
    }
}

/// Errors that stop a resolve run
///
/// Failures on individual files are not errors at this level; they are
/// collected in the `CopyReport`.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Source or upscaled directory is invalid: {role} directory {} is not a directory", path.display())]
    InvalidDirectory { role: DirectoryRole, path: PathBuf },

    #[error("Failed to create missing directory {}: {source}", path.display())]
    CreateMissingDir {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    #[error("Failed to list directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

impl ResolveError {
    /// True for input validation failures, which happen before anything
    /// is created or copied
    pub fn is_validation(&self) -> bool {
        matches!(self, ResolveError::InvalidDirectory { .. })
    }
}
