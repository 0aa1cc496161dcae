//! Archive handling.
//!
//! Expands a dropped archive into its destination folder using native
//! crates: ZIP through the `zip` crate and RAR through `unrar`. The format
//! is picked from the file extension; anything else is rejected before a
//! destination folder is created.

pub mod rarfile;
pub mod zipfile;

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

pub use rarfile::{extract_rar, EntryWriter};
pub use zipfile::extract_zip;

/// Archive formats this tool can expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// ZIP archive (`.zip`)
    Zip,
    /// RAR archive (`.rar`)
    Rar,
}

impl ArchiveFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "zip" => Ok(ArchiveFormat::Zip),
            "rar" => Ok(ArchiveFormat::Rar),
            _ => Err(ExtractError::UnsupportedFormat(extension)),
        }
    }

    /// Upper-case name used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "ZIP",
            ArchiveFormat::Rar => "RAR",
        }
    }
}

/// Errors raised while expanding an archive.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unsupported file format (.{0}). Only .zip and .rar are supported.")]
    UnsupportedFormat(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read RAR archive: {0}")]
    Rar(String),

    #[error("Archive entry escapes the destination folder: {0}")]
    UnsafePath(String),
}

impl ExtractError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> ExtractError + '_ {
        move |source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Expand `archive_path` into `destination`, returning the number of files written.
pub fn extract(
    format: ArchiveFormat,
    archive_path: &Path,
    destination: &Path,
) -> Result<usize, ExtractError> {
    info!(
        "Extracting {} archive {} into {}",
        format.label(),
        archive_path.display(),
        destination.display()
    );

    let count = match format {
        ArchiveFormat::Zip => extract_zip(archive_path, destination)?,
        ArchiveFormat::Rar => extract_rar(archive_path, destination)?,
    };

    info!("Extracted {} files from {}", count, archive_path.display());
    Ok(count)
}

/// Count regular files below `dir`.
pub(crate) fn count_files(dir: &Path) -> usize {
    crate::locator::walk_readable(walkdir::WalkDir::new(dir))
        .filter(|e| e.file_type().is_file())
        .count()
}
