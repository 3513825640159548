//! Error types for artifact generation.

use thiserror::Error;

/// An error raised while assembling an archive.
///
/// Script and prompt generation are infallible string building; only the
/// archive writers have failure modes.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The zip writer rejected an entry or failed to finalize.
    #[error("Zip assembly failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The tar or gzip encoder reported an I/O failure.
    #[error("Archive I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
