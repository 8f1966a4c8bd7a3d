//! Stage 3: application structure.
//!
//! The canonical layout is a single `app/` directory; the plural `apps/`
//! layout is retired. This is the one stage with an intentional early
//! return: when `app/` itself is missing the remaining sub-checks would be
//! meaningless, so the stage stops after recording the failure.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::checks::{CheckContext, StageCheck};
use crate::error::{CoreError, CoreResult};
use crate::findings::FindingStore;

const CATEGORY: &str = "app";

/// Canonical single application directory.
pub const APP_DIR: &str = "app";

/// Retired multi-worker layout.
pub const LEGACY_APPS_DIR: &str = "apps";

/// Sub-paths the canonical directory must contain.
const REQUIRED_PATHS: [&str; 3] = ["app/package.json", "app/wrangler.toml", "app/migrations"];

/// Script entries the application manifest must define.
const REQUIRED_SCRIPTS: [&str; 4] = ["dev", "build", "deploy", "db:migrate"];

/// The slice of the application manifest the validator cares about.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

pub struct ApplicationCheck;

impl StageCheck for ApplicationCheck {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn title(&self) -> &'static str {
        "Application structure"
    }

    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()> {
        if ctx.fs.exists(&ctx.path(LEGACY_APPS_DIR)) {
            store.fail(
                CATEGORY,
                "old apps/ directory found",
                Some("Remove apps/ - the project should use a single app/ directory".into()),
            );
        }

        if !ctx.fs.exists(&ctx.path(APP_DIR)) {
            store.fail(
                CATEGORY,
                "app/ directory not found",
                Some("Create the app/ directory structure".into()),
            );
            return Ok(());
        }

        store.pass(CATEGORY, "single app/ directory structure confirmed");

        for rel in REQUIRED_PATHS {
            if ctx.fs.exists(&ctx.path(rel)) {
                store.pass(CATEGORY, format!("required file/directory exists: {rel}"));
            } else {
                store.fail(
                    CATEGORY,
                    format!("missing required file/directory: {rel}"),
                    Some("Create the missing application structure".into()),
                );
            }
        }

        let manifest_path = ctx.path(APP_DIR).join("package.json");
        if ctx.fs.exists(&manifest_path) {
            let text = ctx.fs.read_to_string(&manifest_path)?;
            let manifest: PackageManifest =
                serde_json::from_str(&text).map_err(|e| CoreError::Parse {
                    path: manifest_path.clone(),
                    reason: e.to_string(),
                })?;

            for script in REQUIRED_SCRIPTS {
                if manifest.scripts.contains_key(script) {
                    store.pass(CATEGORY, format!("required script defined: {script}"));
                } else {
                    store.fail(
                        CATEGORY,
                        format!("missing package.json script: {script}"),
                        Some("Add the required scripts to app/package.json".into()),
                    );
                }
            }
        }

        let migrations_dir = ctx.path(APP_DIR).join("migrations");
        if ctx.fs.exists(&migrations_dir) {
            let sql_files = ctx
                .fs
                .list_dir(&migrations_dir)?
                .into_iter()
                .filter(|p| p.extension().is_some_and(|ext| ext == "sql"))
                .count();
            if sql_files > 0 {
                store.pass(CATEGORY, format!("database migrations found: {sql_files} files"));
            } else {
                // A fresh project legitimately has none yet.
                store.warn(
                    CATEGORY,
                    "no database migration files found",
                    Some("Create an initial database schema migration".into()),
                );
            }
        }

        store.pass(CATEGORY, "application structure validation completed");
        Ok(())
    }
}
