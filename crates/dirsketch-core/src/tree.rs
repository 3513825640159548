//! Parsed tree container and statistics.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::entry::TreeEntry;

/// Fallback root name when a diagram has no usable first entry.
pub const DEFAULT_ROOT_NAME: &str = "project";

/// Summary statistics for a parsed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of file entries.
    pub total_files: u64,
    /// Total number of directory entries.
    pub total_dirs: u64,
    /// Maximum nesting depth seen.
    pub max_depth: usize,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file entry at the given level.
    pub fn record_file(&mut self, level: usize) {
        self.total_files += 1;
        self.max_depth = self.max_depth.max(level);
    }

    /// Record a directory entry at the given level.
    pub fn record_dir(&mut self, level: usize) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(level);
    }

    /// Compute stats from a finished entry sequence.
    pub fn from_entries(entries: &[TreeEntry]) -> Self {
        let mut stats = Self::new();
        for entry in entries {
            if entry.is_file() {
                stats.record_file(entry.level);
            } else {
                stats.record_dir(entry.level);
            }
        }
        stats
    }
}

/// Canonical result of parsing one tree diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchTree {
    /// Entries in document order (depth-first, pre-order).
    pub structure: Vec<TreeEntry>,

    /// Unique directory paths, in first-seen order.
    pub directories: IndexSet<String>,

    /// Unique file paths mapped to their scaffold content, in first-seen
    /// order. Entries without a content annotation map to an empty string.
    pub files: IndexMap<String, String>,

    /// Name of the first parsed entry, trailing slash stripped. Empty when
    /// every line was filtered out.
    pub root_dir: String,

    /// True when the first entry is a level-0 directory enclosing every
    /// other entry in the document.
    pub has_root_wrapper: bool,

    /// Summary statistics.
    pub stats: TreeStats,
}

impl SketchTree {
    /// Check if nothing survived parsing.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// Get the total number of file entries.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Get the total number of directory entries.
    pub fn total_dirs(&self) -> u64 {
        self.stats.total_dirs
    }

    /// Resolve the root name generators should join ahead of every path.
    ///
    /// An explicit non-blank request wins. Otherwise a tree that already
    /// carries its own root wrapper needs no extra prefix, and a flat
    /// listing falls back to the first entry's name or [`DEFAULT_ROOT_NAME`].
    pub fn effective_root(&self, requested: Option<&str>) -> String {
        if let Some(name) = requested {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
        if self.has_root_wrapper {
            String::new()
        } else if self.root_dir.is_empty() {
            DEFAULT_ROOT_NAME.to_string()
        } else {
            self.root_dir.clone()
        }
    }
}
