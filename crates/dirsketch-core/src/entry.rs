//! Parsed tree entry types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Whether an entry names a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file, possibly carrying scaffold content.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A single entry of a parsed tree diagram, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Cleaned display name. Directories may keep their trailing `/`.
    pub name: CompactString,

    /// Inferred nesting depth, 0 = top.
    pub level: usize,

    /// File or directory.
    pub kind: EntryKind,

    /// Slash-joined path from the root, directory names with trailing
    /// slashes stripped.
    pub full_path: String,

    /// Literal scaffold content captured from a trailing `[...]` annotation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl TreeEntry {
    /// Create a new file entry.
    pub fn new_file(
        name: impl Into<CompactString>,
        level: usize,
        full_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            kind: EntryKind::File,
            full_path: full_path.into(),
            content: content.into(),
        }
    }

    /// Create a new directory entry.
    pub fn new_directory(
        name: impl Into<CompactString>,
        level: usize,
        full_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            kind: EntryKind::Directory,
            full_path: full_path.into(),
            content: String::new(),
        }
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this entry carries scaffold content.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
