//! Image file entity
//!
//! A single direct entry of a scanned directory.

use std::path::{Path, PathBuf};

/// What kind of filesystem object an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// A directory entry, identified by its path
///
/// The base name is the file stem, lower-cased, and is what entries are
/// compared by across directories. `photo.PNG` and `Photo.jpg` share the
/// base name `photo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
    file_name: String,
    base_name: String,
    extension: String,
    kind: EntryKind,
}

impl ImageFile {
    /// Creates an entry for `path`
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (stem, extension) = split_extension(&file_name);
        let base_name = stem.to_lowercase();
        let extension = extension.to_owned();

        Self {
            path,
            file_name,
            base_name,
            extension,
            kind,
        }
    }

    /// Creates a regular-file entry
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the original file name, extension included
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the case-folded stem
    ///
    /// Names that are not valid UTF-8 are converted lossily first, so two
    /// stems differing only in their invalid bytes share a base name.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the extension without the dot (empty if there is none)
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Splits a file name at its last dot, ignoring dots that lead the name
///
/// `..abc` has no extension and `.hidden.png` has the stem `.hidden`.
fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(dot) => (&name[..leading + dot], &name[leading + dot + 1..]),
        None => (name, ""),
    }
}
