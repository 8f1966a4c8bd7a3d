//! Stage 4: gateway configuration.
//!
//! Scans `app/wrangler.toml` for the CI substitution placeholders, the
//! three resource binding sections, and a worker name assignment. Each item
//! is its own finding; a missing file stops the stage since there is
//! nothing to scan.

use crate::checks::content::{
    BINDING_SECTIONS, PLACEHOLDER_D1, PLACEHOLDER_KV, has_binding, has_placeholder,
    has_worker_name,
};
use crate::checks::{CheckContext, StageCheck};
use crate::error::CoreResult;
use crate::findings::FindingStore;

const CATEGORY: &str = "wrangler";

/// Gateway configuration file inside the canonical app directory.
pub const WRANGLER_FILE: &str = "app/wrangler.toml";

pub struct GatewayCheck;

impl StageCheck for GatewayCheck {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn title(&self) -> &'static str {
        "Wrangler configuration"
    }

    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()> {
        let path = ctx.path(WRANGLER_FILE);
        if !ctx.fs.exists(&path) {
            store.fail(CATEGORY, "wrangler.toml not found", None);
            return Ok(());
        }

        let text = ctx.fs.read_to_string(&path)?;

        for token in [PLACEHOLDER_D1, PLACEHOLDER_KV] {
            if has_placeholder(&text, token) {
                store.pass(CATEGORY, format!("placeholder found: {token}"));
            } else {
                store.fail(
                    CATEGORY,
                    format!("missing placeholder: {token}"),
                    Some("Use placeholders in wrangler.toml for CI substitution".into()),
                );
            }
        }

        for section in BINDING_SECTIONS {
            if has_binding(&text, section) {
                store.pass(CATEGORY, format!("binding section found: {section}"));
            } else {
                store.fail(
                    CATEGORY,
                    format!("missing binding section: {section}"),
                    Some(format!("Add the {section} resource binding to wrangler.toml")),
                );
            }
        }

        if has_worker_name(&text) {
            store.pass(CATEGORY, "worker name defined");
        } else {
            store.fail(
                CATEGORY,
                "worker name not defined",
                Some("Add name = \"<project>-worker\" to wrangler.toml".into()),
            );
        }

        store.pass(CATEGORY, "wrangler configuration validation completed");
        Ok(())
    }
}
