//! The extract-and-open pipeline
//!
//! validate input -> pick destination -> extract -> locate markers -> launch.
//! Progress goes to stdout as plain lines; every failure ends the run.

use std::path::PathBuf;

use tracing::info;

use crate::archive::{self, ArchiveFormat, ExtractError};
use crate::config::{ConfigError, RunConfig};
use crate::destination;
use crate::launcher::{launch_all, Opener};
use crate::locator::{self, Discovery};

/// Anything that ends a run early
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl RunError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Config(_) => 2,
            RunError::Extract(ExtractError::UnsupportedFormat(_)) => 3,
            RunError::Extract(_) => 1,
        }
    }

    /// Line printed to the console for this failure
    pub fn user_message(&self) -> String {
        match self {
            RunError::Config(e) => e.to_string(),
            RunError::Extract(e @ ExtractError::UnsupportedFormat(_)) => e.to_string(),
            RunError::Extract(e) => format!("An error occurred: {}", e),
        }
    }
}

/// What a completed run did
#[derive(Debug)]
pub struct RunReport {
    pub destination: PathBuf,
    pub files_extracted: usize,
    pub discovery: Option<Discovery>,
    pub launch_failures: usize,
}

/// Run the whole pipeline for one archive.
pub fn run(config: &RunConfig, opener: &dyn Opener) -> Result<RunReport, RunError> {
    let archive_path = config.validate()?;
    let format = ArchiveFormat::from_path(archive_path)?;

    let parent = RunConfig::parent_dir(archive_path);
    let destination = destination::create_destination(&parent, &config.folder_name)
        .map_err(ExtractError::io(&parent))?;

    println!("Extracting {} file to: {}", format.label(), destination.display());
    let files_extracted = archive::extract(format, archive_path, &destination)?;
    println!("Extraction complete.");

    println!("Searching for .sln or .csproj files...");
    let discovery = locator::locate(&destination);
    let mut launch_failures = 0;

    match &discovery {
        Some(found) => {
            if found.tier.recursive {
                println!("No .sln or .csproj file found in the root directory. Searching in subdirectories...");
            }
            println!("{}", found.tier.announcement());
            for file in &found.files {
                println!("{}", file.display());
            }

            if config.open_files {
                let failures = launch_all(opener, &found.files);
                for failure in &failures {
                    println!("Could not open file: {}", failure);
                }
                launch_failures = failures.len();
            }
        }
        None => {
            println!("No .sln or .csproj file found in the root directory. Searching in subdirectories...");
            println!("No .sln or .csproj files found.");
        }
    }

    info!(
        "Run finished: {} files extracted to {}, {} launch failure(s)",
        files_extracted,
        destination.display(),
        launch_failures
    );

    Ok(RunReport {
        destination,
        files_extracted,
        discovery,
        launch_failures,
    })
}
