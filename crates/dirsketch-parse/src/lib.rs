//! Tree diagram parsing engine for dirsketch.
//!
//! This crate turns free-form textual tree diagrams into the canonical
//! [`SketchTree`] model.
//!
//! # Overview
//!
//! `dirsketch-parse` is responsible for tokenizing diagram lines and
//! folding them into a hierarchy. Key features:
//!
//! - **Glyph and plain-indent lines** recognized per line, mixed freely
//! - **Comment stripping** for `#` and `//` trailers
//! - **Content annotations** captured from trailing `[...]` blocks
//! - **Configurable** classifier tables and indentation width
//!
//! # Example
//!
//! ```rust
//! use dirsketch_parse::TreeParser;
//!
//! let diagram = "\
//! app/
//! ├── main.py
//! └── docs/
//!     └── index.md";
//!
//! let parser = TreeParser::new();
//! let tree = parser.parse(diagram).unwrap();
//!
//! println!("Total files: {}", tree.total_files());
//! println!("Total dirs: {}", tree.total_dirs());
//! ```

mod classify;
mod parser;
mod tokenizer;

pub use classify::classify;
pub use parser::{TreeParser, parse};
pub use tokenizer::{LineToken, LineTokenizer};

// Re-export core types for convenience
pub use dirsketch_core::{
    EntryKind, ParseConfig, ParseError, SketchTree, TreeEntry, TreeStats,
};
