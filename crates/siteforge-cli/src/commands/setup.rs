//! Implementation of the `siteforge setup` command.
//!
//! Responsibility: derive the project configuration from the domain, write
//! every artifact through the scaffold service, and show the user what was
//! generated.  Name derivation and templating live in `siteforge-core`.

use std::process::ExitCode;

use tracing::{info, instrument};

use siteforge_adapters::LocalFilesystem;
use siteforge_core::{config::ProjectConfig, scaffold::ScaffoldService};

use crate::{
    cli::{SetupArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli as _},
    output::OutputManager,
};

const DEFAULT_DESCRIPTION: &str = "An edge-deployed site";

/// Execute the `siteforge setup` command.
#[instrument(skip_all, fields(domain = %args.domain))]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<ExitCode> {
    // Domains are case-insensitive; normalise before validation so
    // `MySite.COM` works the same as `mysite.com`.
    let domain = args.domain.trim().to_lowercase();

    let description = args
        .description
        .or(config.defaults.description)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    // Validation failures surface as user errors (exit 2).
    let project = ProjectConfig::generate(&domain, &description)?;

    output.header(&format!("Configuring project for {domain}..."))?;

    let root = std::env::current_dir().with_cli_context(|| "could not determine the current directory")?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.generate(&root, &project)?;

    for path in &report.written {
        output.success(&format!("Generated {}", path.display()))?;
    }
    if report.wrangler_skipped {
        output.warning("app/ directory not found - run setup again once it exists to generate app/wrangler.toml")?;
    }

    info!(files = report.written.len(), "setup complete");

    if !global.quiet {
        output.print("")?;
        output.header("Project configuration:")?;
        output.print(&format!("  Domain:       {}", project.domain))?;
        output.print(&format!("  Project name: {}", project.project.name))?;
        if let Some(db) = &project.resources.database {
            output.print(&format!("  Database:     {db}"))?;
        }
        if let Some(kv) = &project.resources.kv_namespace {
            output.print(&format!("  KV namespace: {kv}"))?;
        }
        if let Some(bucket) = &project.resources.r2_bucket {
            output.print(&format!("  R2 bucket:    {bucket}"))?;
        }
        if let Some(worker) = &project.resources.worker {
            output.print(&format!("  Worker:       {worker}"))?;
        }

        output.print("")?;
        output.print("Next steps:")?;
        output.print("  1. Fill in your Cloudflare account and zone IDs")?;
        output.print("  2. cd infra && terraform init && terraform apply")?;
        output.print("  3. siteforge check")?;
    }

    Ok(ExitCode::SUCCESS)
}
