//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use siteforge_core::{
    error::{CoreError, CoreResult},
    ports::Filesystem,
};

/// In-memory filesystem for testing.
///
/// Builder-style helpers make project-tree fixtures terse:
///
/// ```
/// use siteforge_adapters::MemoryFilesystem;
///
/// let fs = MemoryFilesystem::new()
///     .with_file("project.config.json", "{}")
///     .with_dir("app/migrations");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file (and its parent directories), consuming and returning self.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add an empty directory, consuming and returning self.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Add a file in place (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Add a directory in place (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn file_content(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| CoreError::Io {
            path: path.to_path_buf(),
            reason: "No such file".into(),
        })
    }

    fn list_dir(&self, path: &Path) -> CoreResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        if !inner.directories.contains(path) {
            return Err(CoreError::Io {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            });
        }
        let mut entries: Vec<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        entries.sort();
        entries.dedup();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        self.add_dir(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.add_file(path, content);
        Ok(())
    }
}
