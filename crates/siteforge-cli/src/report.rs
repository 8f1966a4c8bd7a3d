//! Human-readable rendering of a validation run.
//!
//! Writes all three severity partitions in a fixed order (passed, warnings,
//! failed); a run with no failures finishes with a ready-to-deploy banner.
//! All terminal concerns live in [`OutputManager`]; this module only decides
//! *what* gets printed.

use std::io;

use siteforge_core::findings::{FindingStore, Severity};

use crate::output::OutputManager;

/// Render a full validation report.
pub fn render(store: &FindingStore, output: &OutputManager) -> io::Result<()> {
    let counts = store.counts();

    output.print("")?;
    output.header("Validation Report")?;
    output.print("")?;

    for finding in store.all(Severity::Passed) {
        output.success(&format!("[{}] {}", finding.category, finding.message))?;
    }

    if counts.warnings > 0 {
        output.print("")?;
        for finding in store.all(Severity::Warning) {
            output.warning(&format!("[{}] {}", finding.category, finding.message))?;
            if let Some(fix) = &finding.fix {
                output.detail(&format!("Fix: {fix}"))?;
            }
        }
    }

    if counts.failed > 0 {
        output.print("")?;
        for finding in store.all(Severity::Failed) {
            output.error(&format!("[{}] {}", finding.category, finding.message))?;
            if let Some(fix) = &finding.fix {
                output.detail(&format!("Fix: {fix}"))?;
            }
        }
    }

    // Banner only on the all-clear path; a failed run ends with its last
    // finding and the exit code says the rest.
    if !store.has_failures() {
        output.print("")?;
        output.header("🎉 Project validation passed!")?;
        output.print("")?;
        output.print("Ready for:")?;
        output.print("  1. terraform apply       (provision infrastructure)")?;
        output.print("  2. npm run db:migrate    (apply database migrations)")?;
        output.print("  3. npm run deploy        (deploy the worker)")?;
    }

    Ok(())
}
