//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use siteforge_core::{error::CoreResult, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))
    }

    fn list_dir(&self, path: &Path) -> CoreResult<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| map_io_error(path, e))? {
            let entry = entry.map_err(|e| map_io_error(path, e))?;
            entries.push(entry.path());
        }
        // read_dir order is platform-dependent; sort for stable reports.
        entries.sort();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e))
    }
}

fn map_io_error(path: &Path, e: io::Error) -> siteforge_core::error::CoreError {
    siteforge_core::error::CoreError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_temp_dir() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("nested/dir");
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("a.txt"), "hello").unwrap();

        assert!(fs.exists(&dir.join("a.txt")));
        assert_eq!(fs.read_to_string(&dir.join("a.txt")).unwrap(), "hello");
        assert_eq!(fs.list_dir(&dir).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let fs = LocalFilesystem::new();
        let err = fs
            .read_to_string(Path::new("/nonexistent/siteforge-test"))
            .unwrap_err();
        assert!(matches!(err, siteforge_core::error::CoreError::Io { .. }));
    }
}
