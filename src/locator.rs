//! Solution/project discovery
//!
//! After extraction, the tree is searched for `.sln` and `.csproj` files.
//! Search tiers are tried in a fixed order and the first tier with any hit
//! wins; later tiers are never consulted.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walk entries, logging and skipping the ones that cannot be read.
pub(crate) fn walk_readable(walker: WalkDir) -> impl Iterator<Item = DirEntry> {
    walker.into_iter().filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Skipping unreadable entry: {}", e);
            None
        }
    })
}

/// One step of the marker search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTier {
    /// File extension to match, without the dot
    pub extension: &'static str,
    /// Descend into subdirectories
    pub recursive: bool,
}

/// Search order: top-level solutions, top-level projects, then the same
/// two patterns across the whole tree.
pub const SEARCH_TIERS: [SearchTier; 4] = [
    SearchTier { extension: "sln", recursive: false },
    SearchTier { extension: "csproj", recursive: false },
    SearchTier { extension: "sln", recursive: true },
    SearchTier { extension: "csproj", recursive: true },
];

impl SearchTier {
    /// Collect every file under `root` this tier matches.
    ///
    /// Order is whatever the directory walk yields.
    pub fn find(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(root).min_depth(1);
        let walker = if self.recursive { walker } else { walker.max_depth(1) };

        walk_readable(walker)
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.into_path())
            .collect()
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.extension))
    }

    /// Header printed before the files of a winning tier are listed.
    pub fn announcement(&self) -> &'static str {
        match (self.extension, self.recursive) {
            ("sln", false) => "Found .sln file(s):",
            ("sln", true) => "Found .sln file(s) in subdirectories:",
            (_, false) => "No .sln file found. Found .csproj file(s):",
            (_, true) => "No .sln file found. Found .csproj file(s) in subdirectories:",
        }
    }
}

/// Marker files found by the first productive tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub tier: SearchTier,
    pub files: Vec<PathBuf>,
}

/// Run the tiers in order against `root`, stopping at the first non-empty one.
pub fn locate(root: &Path) -> Option<Discovery> {
    for tier in SEARCH_TIERS {
        let files = tier.find(root);
        debug!(
            "*.{} ({}) matched {} file(s)",
            tier.extension,
            if tier.recursive { "recursive" } else { "top level" },
            files.len()
        );

        if !files.is_empty() {
            return Some(Discovery { tier, files });
        }
    }

    None
}
