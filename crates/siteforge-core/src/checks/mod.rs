//! The validation pipeline: five stage checks and the driver that runs them.
//!
//! Each stage inspects one concern of the project tree and appends findings
//! to the shared [`FindingStore`]. Stages are independent — none reads
//! another's findings — and run strictly in a fixed order chosen for report
//! readability.
//!
//! Error containment is per stage: a stage that hits an unexpected error
//! (I/O failure, malformed JSON) is cut short and summarized as a single
//! `Failed` finding under its own category, and the remaining stages still
//! run.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::CoreResult;
use crate::findings::FindingStore;
use crate::ports::{EnvSource, Filesystem, SyntaxProbe};

pub mod application;
pub mod configuration;
pub mod content;
pub mod deploy;
pub mod gateway;
pub mod infrastructure;

pub use application::ApplicationCheck;
pub use configuration::ConfigurationCheck;
pub use deploy::DeployCheck;
pub use gateway::GatewayCheck;
pub use infrastructure::InfrastructureCheck;

/// Read-only view of the project tree handed to every stage.
pub struct CheckContext<'a> {
    root: &'a Path,
    pub fs: &'a dyn Filesystem,
    pub probe: &'a dyn SyntaxProbe,
    pub env: &'a dyn EnvSource,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        root: &'a Path,
        fs: &'a dyn Filesystem,
        probe: &'a dyn SyntaxProbe,
        env: &'a dyn EnvSource,
    ) -> Self {
        Self {
            root,
            fs,
            probe,
            env,
        }
    }

    /// Resolve a path relative to the project root.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }
}

/// One independent unit inspecting a single concern of the project tree.
///
/// A stage records zero or more findings; the driver consumes nothing from
/// it beyond completion. Micro-checks inside a stage do not short-circuit
/// each other — every one runs even if an earlier one failed — except where
/// a stage's root artifact is missing and the remaining checks would be
/// meaningless (documented on the stage).
pub trait StageCheck {
    /// Category tag recorded on every finding this stage produces.
    fn category(&self) -> &'static str;

    /// Human-readable stage name for the report and error summaries.
    fn title(&self) -> &'static str;

    /// Inspect the tree and record findings.
    ///
    /// `Err` means the stage hit an unexpected error; the driver records it
    /// as a single `Failed` finding and moves on to the next stage.
    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()>;
}

/// The five stages in their fixed execution order.
pub fn stages() -> Vec<&'static dyn StageCheck> {
    vec![
        &ConfigurationCheck,
        &InfrastructureCheck,
        &ApplicationCheck,
        &GatewayCheck,
        &DeployCheck,
    ]
}

/// Run every stage in order, containing per-stage errors, and return the
/// accumulated findings.
#[instrument(skip_all, fields(root = %ctx.root.display()))]
pub fn run_pipeline(ctx: &CheckContext<'_>) -> FindingStore {
    let mut store = FindingStore::new();

    for stage in stages() {
        debug!(stage = stage.title(), "running stage check");
        if let Err(e) = stage.run(ctx, &mut store) {
            store.fail(stage.category(), format!("{} error: {e}", stage.title()), None);
        }
    }

    debug!(
        passed = store.counts().passed,
        warnings = store.counts().warnings,
        failed = store.counts().failed,
        "pipeline complete"
    );

    store
}
