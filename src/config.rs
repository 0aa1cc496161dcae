//! Run configuration
//!
//! Defines the configuration for a single extract-and-open run and the
//! checks that must pass before anything touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Folder name used when none is configured
pub const DEFAULT_FOLDER_NAME: &str = "QHelper";

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Archive dropped onto the tool (first positional argument)
    pub archive_path: Option<PathBuf>,

    /// Base name for the destination folder next to the archive
    pub folder_name: String,

    /// Launch the marker files that were found
    pub open_files: bool,

    /// Program used instead of the platform default handler
    pub opener: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            archive_path: None,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            open_files: true,
            opener: None,
        }
    }
}

impl RunConfig {
    /// Config for a single archive with every other setting at its default
    pub fn for_archive(path: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Validate the configuration, returning the archive path on success
    pub fn validate(&self) -> Result<&Path, ConfigError> {
        let archive = self.archive_path.as_deref().ok_or(ConfigError::NoArchive)?;

        if !archive.exists() {
            return Err(ConfigError::ArchiveNotFound(archive.to_path_buf()));
        }

        if !archive.is_file() {
            return Err(ConfigError::NotAFile(archive.to_path_buf()));
        }

        if self.folder_name.trim().is_empty() {
            return Err(ConfigError::EmptyFolderName);
        }

        // Must be a single plain path component
        let mut components = Path::new(&self.folder_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(ConfigError::InvalidFolderName(self.folder_name.clone())),
        }

        Ok(archive)
    }

    /// Directory the destination folder is created in
    ///
    /// A bare file name like `project.zip` has an empty parent, which maps
    /// to the current directory.
    pub fn parent_dir(archive: &Path) -> PathBuf {
        match archive.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No file specified. Drag and drop a .zip or .rar file onto this application.")]
    NoArchive,

    #[error("The specified file does not exist: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("The specified path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Destination folder name must not be empty")]
    EmptyFolderName,

    #[error("Destination folder name must be a single path component: {0}")]
    InvalidFolderName(String),
}
