//! External syntax-validator adapter.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use siteforge_core::ports::SyntaxProbe;

/// Runs `terraform validate` in the infrastructure directory.
///
/// The invocation is synchronous and blocking, with no timeout and no
/// retries; only the exit status is observed. A missing binary counts as a
/// failed validation — the finding's fix text points the user at the tool.
#[derive(Debug, Clone)]
pub struct TerraformProbe {
    command: String,
}

impl TerraformProbe {
    pub fn new() -> Self {
        Self {
            command: "terraform".into(),
        }
    }

    /// Override the binary name (e.g. `tofu`).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for TerraformProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxProbe for TerraformProbe {
    fn validate(&self, dir: &Path) -> bool {
        let result = Command::new(&self.command)
            .arg("validate")
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                debug!(dir = %dir.display(), success = status.success(), "syntax probe finished");
                status.success()
            }
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "syntax probe could not run");
                false
            }
        }
    }
}

/// Fixed-outcome probe for tests.
#[derive(Debug, Clone, Copy)]
pub struct StubProbe {
    pub result: bool,
}

impl StubProbe {
    pub fn passing() -> Self {
        Self { result: true }
    }

    pub fn failing() -> Self {
        Self { result: false }
    }
}

impl SyntaxProbe for StubProbe {
    fn validate(&self, _dir: &Path) -> bool {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_failure() {
        let probe = TerraformProbe::with_command("siteforge-no-such-binary");
        assert!(!probe.validate(Path::new(".")));
    }

    #[test]
    fn stub_probe_is_fixed() {
        assert!(StubProbe::passing().validate(Path::new(".")));
        assert!(!StubProbe::failing().validate(Path::new(".")));
    }
}
