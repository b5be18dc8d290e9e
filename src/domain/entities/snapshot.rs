//! Directory snapshot entity

use super::image_file::ImageFile;
use std::collections::HashSet;

/// Base names captured from one directory listing
///
/// The snapshot is not kept in sync with the filesystem; it reflects the
/// directory at the moment it was captured.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    base_names: HashSet<String>,
}

impl DirectorySnapshot {
    /// Captures the base names of every entry, subdirectories included
    pub fn capture<'a>(entries: impl IntoIterator<Item = &'a ImageFile>) -> Self {
        Self {
            base_names: entries
                .into_iter()
                .map(|e| e.base_name().to_string())
                .collect(),
        }
    }

    /// Checks whether a base name is present
    ///
    /// The lookup is case-insensitive.
    pub fn contains(&self, base_name: &str) -> bool {
        self.base_names.contains(&base_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.base_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_names.is_empty()
    }
}
