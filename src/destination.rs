//! Destination folder naming
//!
//! The archive is expanded into a fresh folder next to it. The first free
//! name out of `base`, `base (1)`, `base (2)`, ... is used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Candidate folder name for a given collision index
///
/// Index 0 is the bare base name.
pub fn candidate_name(base_name: &str, index: usize) -> String {
    if index == 0 {
        base_name.to_string()
    } else {
        format!("{} ({})", base_name, index)
    }
}

/// Find the first candidate path under `parent` that does not exist yet.
///
/// Every candidate is checked against the filesystem as it is generated;
/// nothing is cached between calls. Plain files count as taken too, since
/// a folder cannot be created over them.
pub fn unique_folder_path(parent: &Path, base_name: &str) -> PathBuf {
    let mut index = 0;
    loop {
        let candidate = parent.join(candidate_name(base_name, index));
        if !candidate.exists() {
            return candidate;
        }
        debug!("Destination {} already exists", candidate.display());
        index += 1;
    }
}

/// Pick a unique destination under `parent` and create it.
///
/// Uses `create_dir` rather than `create_dir_all` so a folder that appeared
/// between the check and the creation is reported instead of reused.
pub fn create_destination(parent: &Path, base_name: &str) -> io::Result<PathBuf> {
    let destination = unique_folder_path(parent, base_name);
    fs::create_dir(&destination)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_candidate_name() {
        assert_eq!(candidate_name("QHelper", 0), "QHelper");
        assert_eq!(candidate_name("QHelper", 1), "QHelper (1)");
        assert_eq!(candidate_name("QHelper", 12), "QHelper (12)");
    }

    #[test]
    fn test_empty_parent_uses_base_name() {
        let dir = tempdir().unwrap();
        assert_eq!(unique_folder_path(dir.path(), "QHelper"), dir.path().join("QHelper"));
    }

    #[test]
    fn test_skips_existing_directories() {
        let dir = tempdir().unwrap();
        for n in 0..4 {
            fs::create_dir(dir.path().join(candidate_name("QHelper", n))).unwrap();
        }

        assert_eq!(
            unique_folder_path(dir.path(), "QHelper"),
            dir.path().join("QHelper (4)")
        );
    }

    #[test]
    fn test_gap_in_sequence_is_reused() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("QHelper")).unwrap();
        fs::create_dir(dir.path().join("QHelper (2)")).unwrap();

        assert_eq!(
            unique_folder_path(dir.path(), "QHelper"),
            dir.path().join("QHelper (1)")
        );
    }

    #[test]
    fn test_plain_file_counts_as_taken() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("QHelper"), b"not a folder").unwrap();

        assert_eq!(
            unique_folder_path(dir.path(), "QHelper"),
            dir.path().join("QHelper (1)")
        );
    }

    #[test]
    fn test_create_destination() {
        let dir = tempdir().unwrap();
        let first = create_destination(dir.path(), "QHelper").unwrap();
        let second = create_destination(dir.path(), "QHelper").unwrap();

        assert!(first.is_dir());
        assert!(second.is_dir());
        assert_eq!(second, dir.path().join("QHelper (1)"));
    }

    #[test]
    fn test_search_is_not_cached() {
        let dir = tempdir().unwrap();
        let before = unique_folder_path(dir.path(), "Out");
        fs::create_dir(&before).unwrap();
        let after = unique_folder_path(dir.path(), "Out");

        assert_ne!(before, after);
        assert_eq!(after, dir.path().join("Out (1)"));
    }
}
