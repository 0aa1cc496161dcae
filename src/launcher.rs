//! Opening files with their default application
//!
//! The OS decides which program handles a `.sln` or `.csproj`. We only spawn
//! the platform's "open" helper and never wait for it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

/// Helpers tried in order on unix desktops other than macOS.
#[cfg(all(unix, not(target_os = "macos")))]
const UNIX_OPENERS: &[(&str, &[&str])] = &[
    ("xdg-open", &[]),
    ("gio", &["open"]),
    ("kde-open", &[]),
    ("gnome-open", &[]),
];

/// Launch errors
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("No program available to open files on this system")]
    NoOpener,

    #[error("Failed to start {program} for {}: {source}", path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can open a file in its associated application.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Opens files through the operating system shell.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Program used instead of the platform default
    program: Option<String>,
}

impl SystemOpener {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }

    /// Resolve the program and leading arguments for this platform.
    fn command(&self) -> Result<(String, Vec<String>), LaunchError> {
        if let Some(program) = &self.program {
            return Ok((program.clone(), Vec::new()));
        }
        platform_command()
    }
}

#[cfg(windows)]
fn platform_command() -> Result<(String, Vec<String>), LaunchError> {
    Ok(("explorer".to_string(), Vec::new()))
}

#[cfg(target_os = "macos")]
fn platform_command() -> Result<(String, Vec<String>), LaunchError> {
    Ok(("open".to_string(), Vec::new()))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_command() -> Result<(String, Vec<String>), LaunchError> {
    UNIX_OPENERS
        .iter()
        .find_map(|(program, args)| {
            which::which(program).ok().map(|resolved| {
                (
                    resolved.to_string_lossy().to_string(),
                    args.iter().map(|a| a.to_string()).collect(),
                )
            })
        })
        .ok_or(LaunchError::NoOpener)
}

#[cfg(not(any(windows, unix)))]
fn platform_command() -> Result<(String, Vec<String>), LaunchError> {
    Err(LaunchError::NoOpener)
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        let (program, args) = self.command()?;
        debug!("Opening {} with {}", path.display(), program);

        // Fire and forget: the child is never waited on
        Command::new(&program)
            .args(&args)
            .arg(path)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program,
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }
}

/// Open every file in `files`, continuing past failures.
///
/// Returns the failures so the caller can report them.
pub fn launch_all(opener: &dyn Opener, files: &[PathBuf]) -> Vec<LaunchError> {
    let mut failures = Vec::new();

    for file in files {
        if let Err(e) = opener.open(file) {
            warn!("Could not open {}: {}", file.display(), e);
            failures.push(e);
        }
    }

    failures
}
