//! Stage 2: infrastructure files.
//!
//! Verifies the four Terraform files exist, runs the external syntax probe
//! over `infra/`, checks the deployment environment variables, and scans
//! `outputs.tf` for leftovers of the retired dual-hostname scheme.

use crate::checks::content::{LEGACY_HOSTNAME_TOKENS, mentions};
use crate::checks::{CheckContext, StageCheck};
use crate::error::CoreResult;
use crate::findings::FindingStore;

const CATEGORY: &str = "terraform";

/// Directory holding the infrastructure-as-code files.
pub const INFRA_DIR: &str = "infra";

/// The fixed set of Terraform files the scaffolder emits.
pub const TERRAFORM_FILES: [&str; 4] = ["main.tf", "variables.tf", "outputs.tf", "versions.tf"];

/// Variables the deployment needs; unset is a warning, not a failure —
/// CI may supply them later.
pub const REQUIRED_ENV_VARS: [&str; 3] =
    ["TF_VAR_cloudflare_api_token", "CF_ACCOUNT_ID", "CF_ZONE_ID"];

pub struct InfrastructureCheck;

impl StageCheck for InfrastructureCheck {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn title(&self) -> &'static str {
        "Infrastructure"
    }

    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()> {
        for file in TERRAFORM_FILES {
            let path = ctx.path(INFRA_DIR).join(file);
            if ctx.fs.exists(&path) {
                store.pass(CATEGORY, format!("Terraform file exists: {file}"));
            } else {
                store.fail(CATEGORY, format!("missing Terraform file: {file}"), None);
            }
        }

        // Pass/fail only; the validator's own output is not captured.
        if ctx.probe.validate(&ctx.path(INFRA_DIR)) {
            store.pass(CATEGORY, "Terraform configuration is valid");
        } else {
            store.fail(
                CATEGORY,
                "Terraform validation failed",
                Some("Check terraform validate output for syntax errors".into()),
            );
        }

        for var in REQUIRED_ENV_VARS {
            if ctx.env.is_set(var) {
                store.pass(CATEGORY, format!("environment variable set: {var}"));
            } else {
                store.warn(
                    CATEGORY,
                    format!("environment variable not set: {var}"),
                    Some("Set it in your shell or CI/CD environment".into()),
                );
            }
        }

        let outputs = ctx.fs.read_to_string(&ctx.path(INFRA_DIR).join("outputs.tf"))?;
        if LEGACY_HOSTNAME_TOKENS.iter().any(|t| mentions(&outputs, t)) {
            store.fail(
                CATEGORY,
                "outputs.tf contains old dual-hostname references",
                Some("Update to use a single hostname variable".into()),
            );
        } else {
            store.pass(CATEGORY, "outputs.tf uses correct single-hostname architecture");
        }

        store.pass(CATEGORY, "infrastructure validation completed");
        Ok(())
    }
}
