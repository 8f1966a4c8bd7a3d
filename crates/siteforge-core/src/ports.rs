//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the check pipeline and the scaffolder need from
//! external systems. The `siteforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `siteforge_adapters::filesystem::LocalFilesystem` (production)
/// - `siteforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Stage checks only read; the scaffolder also writes.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// List the direct entries of a directory.
    fn list_dir(&self, path: &Path) -> CoreResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;
}

/// Port for the external infrastructure syntax validator.
///
/// Implemented by:
/// - `siteforge_adapters::probe::TerraformProbe` (production, blocking)
/// - `siteforge_adapters::probe::StubProbe` (testing)
///
/// The call is synchronous with no timeout; only the pass/fail signal is
/// observed, never the tool's output. A single failed invocation becomes a
/// single finding — there are no retries.
pub trait SyntaxProbe: Send + Sync {
    /// Run the syntax validator against a directory; `true` means it passed.
    fn validate(&self, dir: &Path) -> bool;
}

/// Port for environment-variable lookup.
///
/// Implemented by:
/// - `siteforge_adapters::env::SystemEnv` (production)
/// - `siteforge_adapters::env::StaticEnv` (testing)
pub trait EnvSource: Send + Sync {
    /// `true` if the named variable is set (to any value).
    fn is_set(&self, name: &str) -> bool;
}
