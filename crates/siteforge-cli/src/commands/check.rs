//! Implementation of the `siteforge check` command.
//!
//! Responsibility: wire the real adapters into a [`CheckContext`], run the
//! pipeline, and render the report.  The exit code is decided here: 1 when
//! any check failed, 0 otherwise.  Warnings never affect the exit code.

use std::process::ExitCode;

use tracing::{debug, info, instrument};

use siteforge_adapters::{LocalFilesystem, SystemEnv, TerraformProbe};
use siteforge_core::checks::{CheckContext, run_pipeline};

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    error::{CliResult, IntoCli as _},
    output::OutputManager,
    report,
};

/// Execute the `siteforge check` command.
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<ExitCode> {
    if args.fix {
        // Accepted for forward compatibility; checks are report-only today.
        debug!("--fix requested; fixes are reported as text only");
    }

    let root = std::env::current_dir().with_cli_context(|| "could not determine the current directory")?;
    info!(root = %root.display(), "validation started");

    let fs = LocalFilesystem::new();
    let probe = TerraformProbe::new();
    let env = SystemEnv;
    let ctx = CheckContext::new(&root, &fs, &probe, &env);

    let store = run_pipeline(&ctx);
    report::render(&store, &output)?;

    let counts = store.counts();
    info!(
        passed = counts.passed,
        warnings = counts.warnings,
        failed = counts.failed,
        "validation finished"
    );

    if store.has_failures() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
