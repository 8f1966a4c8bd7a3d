//! Stage 5: deploy pipeline.
//!
//! Pipeline automation is optional, so a missing workflow file is only a
//! warning. When the workflow exists it must target the single-app layout
//! and carry the placeholder substitution step.

use crate::checks::content::{
    LEGACY_APP_PATHS, PLACEHOLDER_D1, PLACEHOLDER_KV, has_placeholder, mentions,
};
use crate::checks::{CheckContext, StageCheck};
use crate::error::CoreResult;
use crate::findings::FindingStore;

const CATEGORY: &str = "deploy";

/// Fixed workflow path checked by this stage.
pub const DEPLOY_WORKFLOW: &str = ".github/workflows/deploy.yml";

pub struct DeployCheck;

impl StageCheck for DeployCheck {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn title(&self) -> &'static str {
        "Deploy pipeline"
    }

    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()> {
        let path = ctx.path(DEPLOY_WORKFLOW);
        if !ctx.fs.exists(&path) {
            store.warn(
                CATEGORY,
                "GitHub Actions deploy workflow not found",
                Some(format!("Create {DEPLOY_WORKFLOW} for automated deployment")),
            );
            return Ok(());
        }

        let text = ctx.fs.read_to_string(&path)?;

        let single_app = mentions(&text, "working-directory: app")
            && !LEGACY_APP_PATHS.iter().any(|p| mentions(&text, p));
        if single_app {
            store.pass(CATEGORY, "deploy workflow uses single-worker architecture");
        } else {
            store.fail(
                CATEGORY,
                "deploy workflow still references the multi-worker setup",
                Some("Update deploy.yml to use the single app/ directory".into()),
            );
        }

        let substitution = has_placeholder(&text, PLACEHOLDER_D1)
            && has_placeholder(&text, PLACEHOLDER_KV)
            && mentions(&text, "sed -i");
        if substitution {
            store.pass(CATEGORY, "placeholder substitution logic present");
        } else {
            store.fail(
                CATEGORY,
                "missing placeholder substitution in deploy workflow",
                Some("Add sed commands to substitute placeholders in CI".into()),
            );
        }

        store.pass(CATEGORY, "deploy pipeline validation completed");
        Ok(())
    }
}
