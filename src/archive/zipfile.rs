//! ZIP extraction.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use super::{count_files, ExtractError};

/// Expand every entry of a ZIP archive into `destination`.
///
/// Relative paths and directories are preserved. Entries that would land
/// outside `destination` make the `zip` crate fail the whole extraction.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<usize, ExtractError> {
    fs::create_dir_all(destination).map_err(ExtractError::io(destination))?;

    let file = File::open(archive_path).map_err(ExtractError::io(archive_path))?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    debug!("{} holds {} entries", archive_path.display(), archive.len());

    archive.extract(destination)?;

    Ok(count_files(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) -> Result<()> {
        let file = File::create(path)?;
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for (name, data) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(data)?;
        }

        zip.finish()?;
        Ok(())
    }

    #[test]
    fn test_extract_preserves_layout() -> Result<()> {
        let dir = tempdir()?;
        let zip_path = dir.path().join("drop.zip");
        write_zip(&zip_path, &[("a/b.txt", b"nested"), ("c.txt", b"top level")])?;

        let dest = dir.path().join("QHelper");
        let count = extract_zip(&zip_path, &dest)?;

        assert_eq!(count, 2);
        assert_eq!(fs::read(dest.join("a/b.txt"))?, b"nested");
        assert_eq!(fs::read(dest.join("c.txt"))?, b"top level");
        Ok(())
    }

    #[test]
    fn test_extract_directory_entries() -> Result<()> {
        let dir = tempdir()?;
        let zip_path = dir.path().join("drop.zip");
        {
            let file = File::create(&zip_path)?;
            let mut zip = zip::ZipWriter::new(file);
            let options = zip::write::SimpleFileOptions::default();

            zip.add_directory("empty/", options)?;
            zip.start_file("src/App/App.csproj", options)?;
            zip.write_all(b"<Project />")?;
            zip.finish()?;
        }

        let dest = dir.path().join("out");
        let count = extract_zip(&zip_path, &dest)?;

        assert_eq!(count, 1);
        assert!(dest.join("empty").is_dir());
        assert_eq!(fs::read(dest.join("src/App/App.csproj"))?, b"<Project />");
        Ok(())
    }

    #[test]
    fn test_corrupt_zip_fails() -> Result<()> {
        let dir = tempdir()?;
        let zip_path = dir.path().join("broken.zip");
        fs::write(&zip_path, b"this is not a zip archive")?;

        let result = extract_zip(&zip_path, &dir.path().join("out"));
        assert!(matches!(result, Err(ExtractError::Zip(_))));
        Ok(())
    }

    #[test]
    fn test_missing_zip_is_io_error() {
        let dir = tempdir().unwrap();
        let result = extract_zip(&dir.path().join("gone.zip"), &dir.path().join("out"));
        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }
}
