//! Output generation engine for dirsketch.
//!
//! Turns a parsed [`SketchTree`] into the artifacts the parser exists to
//! drive: scaffolding scripts in several target languages, in-memory
//! archive images of the tree, and a plain-text listing suitable for
//! pasting into an AI assistant.

mod archive;
mod content;
mod error;
mod prompt;
mod script;

pub use archive::{generate_archive, ArchiveFormat};
pub use content::unescape_content;
pub use error::EmitError;
pub use prompt::generate_prompt;
pub use script::{generate_script, ScriptFlavor};

// Re-export the model types generators consume, for convenience.
pub use dirsketch_core::{SketchTree, TreeEntry};

/// Banner line embedded in every generated script.
pub const GENERATED_BY: &str = "Generated by dirsketch";
