//! RAR extraction.
//!
//! `unrar` hands out one header at a time. Directory entries only make
//! sure the folder exists; file entries are streamed by unrar straight to
//! the path an [`EntryWriter`] resolves, which also rejects recorded paths
//! that would leave the destination.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::ExtractError;

/// Writes archive entries below a destination root.
pub struct EntryWriter<'a> {
    root: &'a Path,
    files_written: usize,
}

impl<'a> EntryWriter<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            files_written: 0,
        }
    }

    /// Map a recorded entry path to its location below the root.
    ///
    /// Both `/` and `\` separate components. Absolute paths, drive
    /// prefixes and `..` components are refused.
    pub fn resolve(&self, entry_name: &str) -> Result<PathBuf, ExtractError> {
        let unsafe_path = || ExtractError::UnsafePath(entry_name.to_string());

        if entry_name.starts_with(['/', '\\']) {
            return Err(unsafe_path());
        }

        let mut relative = PathBuf::new();
        for part in entry_name.split(['/', '\\']) {
            match part {
                "" | "." => continue,
                ".." => return Err(unsafe_path()),
                p if relative.as_os_str().is_empty() && is_drive_prefix(p) => {
                    return Err(unsafe_path())
                }
                p => relative.push(p),
            }
        }

        Ok(self.root.join(relative))
    }

    /// Record a directory entry. No file is written.
    pub fn directory(&mut self, entry_name: &str) -> Result<(), ExtractError> {
        let path = self.resolve(entry_name)?;
        fs::create_dir_all(&path).map_err(ExtractError::io(&path))
    }

    /// Resolve a file entry and create its parent directories.
    pub fn prepare_file(&self, entry_name: &str) -> Result<PathBuf, ExtractError> {
        let path = self.resolve(entry_name)?;
        if path == self.root {
            return Err(ExtractError::UnsafePath(entry_name.to_string()));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ExtractError::io(parent))?;
        }
        Ok(path)
    }

    /// Count a file that has been written to a prepared path.
    pub fn record_file(&mut self, path: &Path) {
        trace!("Wrote {}", path.display());
        self.files_written += 1;
    }

    pub fn files_written(&self) -> usize {
        self.files_written
    }
}

/// `C:` style first component
fn is_drive_prefix(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn rar_error(err: impl std::fmt::Display) -> ExtractError {
    ExtractError::Rar(err.to_string())
}

/// Expand every entry of a RAR archive into `destination`.
pub fn extract_rar(archive_path: &Path, destination: &Path) -> Result<usize, ExtractError> {
    fs::create_dir_all(destination).map_err(ExtractError::io(destination))?;

    let mut writer = EntryWriter::new(destination);
    let mut archive = unrar::Archive::new(archive_path)
        .open_for_processing()
        .map_err(rar_error)?;

    while let Some(header) = archive.read_header().map_err(rar_error)? {
        let entry = header.entry();
        let entry_name = entry.filename.to_string_lossy().to_string();
        let is_directory = entry.is_directory();

        archive = if is_directory {
            debug!("RAR directory entry: {}", entry_name);
            writer.directory(&entry_name)?;
            header.skip().map_err(rar_error)?
        } else {
            let path = writer.prepare_file(&entry_name)?;
            let rest = header.extract_to(&path).map_err(rar_error)?;
            writer.record_file(&path);
            rest
        };
    }

    Ok(writer.files_written())
}
