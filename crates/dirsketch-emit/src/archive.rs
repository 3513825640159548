//! In-memory archive assembly.
//!
//! Archives carry the scaffolded tree directly: one entry per directory,
//! one per file with its content unescaped into real bytes. Nothing is
//! written to disk here.

use std::io::{Cursor, Write};

use flate2::write::GzEncoder;
use flate2::Compression;
use strum::{Display, EnumString};
use zip::write::SimpleFileOptions;

use dirsketch_core::SketchTree;

use crate::content::unescape_content;
use crate::error::EmitError;
use crate::script::posix_path;

/// Container format for a materialized tree image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ArchiveFormat {
    /// Deflate-compressed zip archive.
    Zip,
    /// Gzip-compressed tarball.
    TarGz,
}

impl ArchiveFormat {
    /// File extension of the archive, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }
}

/// Assemble an in-memory archive image of the scaffolded tree.
///
/// Uses the same root-prefix contract as script generation: the resolved
/// root name is joined ahead of every entry path.
pub fn generate_archive(
    tree: &SketchTree,
    format: ArchiveFormat,
    root_name: Option<&str>,
) -> Result<Vec<u8>, EmitError> {
    let root = tree.effective_root(root_name);
    tracing::debug!(
        format = %format,
        directories = tree.total_dirs(),
        files = tree.total_files(),
        "assembling archive"
    );
    match format {
        ArchiveFormat::Zip => write_zip(tree, &root),
        ArchiveFormat::TarGz => write_tar_gz(tree, &root),
    }
}

fn write_zip(tree: &SketchTree, root: &str) -> Result<Vec<u8>, EmitError> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for dir in &tree.directories {
        zip.add_directory(posix_path(root, dir), options)?;
    }
    for (path, content) in &tree.files {
        zip.start_file(posix_path(root, path), options)?;
        zip.write_all(unescape_content(content).as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn write_tar_gz(tree: &SketchTree, root: &str) -> Result<Vec<u8>, EmitError> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for dir in &tree.directories {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::dir());
        header.set_mode(0o755);
        header.set_size(0);
        header.set_cksum();
        let name = format!("{}/", posix_path(root, dir));
        builder.append_data(&mut header, name, std::io::empty())?;
    }

    for (path, content) in &tree.files {
        let bytes = unescape_content(content).into_bytes();
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::file());
        header.set_mode(0o644);
        header.set_size(bytes.len() as u64);
        header.set_cksum();
        builder.append_data(&mut header, posix_path(root, path), bytes.as_slice())?;
    }

    let encoder = builder.into_inner()?;
    Ok(encoder.finish()?)
}
