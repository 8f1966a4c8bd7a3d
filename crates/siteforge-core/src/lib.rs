//! Siteforge Core - scaffolding and validation logic
//!
//! This crate provides the domain and application layers for the Siteforge
//! project tool, following a ports-and-adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         siteforge-cli (CLI)             │
//! │   (argument parsing, report output)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Check pipeline / Scaffolder      │
//! │  (run_pipeline, five stage checks,      │
//! │   ScaffoldService)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           Ports (Traits)                │
//! │  (Filesystem, SyntaxProbe, EnvSource)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   siteforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TerraformProbe, env)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use siteforge_core::checks::{CheckContext, run_pipeline};
//!
//! // Adapters implement the ports; see siteforge-adapters.
//! # fn demo(fs: &dyn siteforge_core::ports::Filesystem,
//! #         probe: &dyn siteforge_core::ports::SyntaxProbe,
//! #         env: &dyn siteforge_core::ports::EnvSource) {
//! let ctx = CheckContext::new(Path::new("."), fs, probe, env);
//! let store = run_pipeline(&ctx);
//! if store.has_failures() {
//!     // render report, exit non-zero
//! }
//! # }
//! ```

// Project configuration model and naming conventions
pub mod config;

// Diagnostic records accumulated during a validation run
pub mod findings;

// The five stage checks and the pipeline driver
pub mod checks;

// Driven ports implemented by siteforge-adapters
pub mod ports;

// Artifact generation (setup half of the tool)
pub mod scaffold;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::checks::{CheckContext, StageCheck, run_pipeline, stages};
    pub use crate::config::{CONFIG_FILE, ProjectConfig};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::findings::{Finding, FindingStore, Severity};
    pub use crate::ports::{EnvSource, Filesystem, SyntaxProbe};
    pub use crate::scaffold::ScaffoldService;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
