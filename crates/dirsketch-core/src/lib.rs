//! Core types for dirsketch.
//!
//! This crate provides the fundamental data structures used throughout
//! the dirsketch ecosystem, including tree entries, parsed trees, and
//! configuration.

mod config;
mod entry;
mod error;
mod tree;

pub use config::{EXTENSIONLESS_FILES, KNOWN_EXTENSIONS, ParseConfig, ParseConfigBuilder};
pub use entry::{EntryKind, TreeEntry};
pub use error::ParseError;
pub use tree::{DEFAULT_ROOT_NAME, SketchTree, TreeStats};
