//! Infrastructure adapters for Siteforge.
//!
//! This crate implements the ports defined in `siteforge_core::ports`.
//! It contains all external dependencies and I/O operations.

pub mod env;
pub mod filesystem;
pub mod probe;

// Re-export commonly used adapters
pub use env::{StaticEnv, SystemEnv};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use probe::{StubProbe, TerraformProbe};
