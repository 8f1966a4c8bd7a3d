//! Diagnostic records accumulated during a validation run.
//!
//! # Design
//!
//! One [`FindingStore`] exists per run, created and owned by the pipeline
//! driver and discarded afterwards — no ambient/static state, so individual
//! stages stay testable against an isolated store. The store is append-only:
//! findings are never removed or reordered.

use std::fmt;

/// How serious a finding is.
///
/// `Failed` is worse than `Warning` is worse than `Passed`, but only for
/// exit-code purposes: the run fails iff at least one `Failed` finding was
/// recorded, regardless of warning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Passed,
    Warning,
    Failed,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Warning => "warning",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// Short tag identifying which stage produced the finding.
    pub category: String,
    /// Human-readable description of the condition found.
    pub message: String,
    /// Remediation hint; present only when actionable.
    pub fix: Option<String>,
}

/// Append-only collection of findings, partitioned by severity.
///
/// Insertion order is preserved within each partition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindingStore {
    passed: Vec<Finding>,
    warnings: Vec<Finding>,
    failed: Vec<Finding>,
}

/// Partition sizes returned by [`FindingStore::counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl FindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to the partition matching its severity.
    pub fn record(
        &mut self,
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
        fix: Option<String>,
    ) {
        let finding = Finding {
            severity,
            category: category.into(),
            message: message.into(),
            fix,
        };
        match severity {
            Severity::Passed => self.passed.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Failed => self.failed.push(finding),
        }
    }

    /// Record a `Passed` finding. Passed findings carry no fix.
    pub fn pass(&mut self, category: impl Into<String>, message: impl Into<String>) {
        self.record(Severity::Passed, category, message, None);
    }

    /// Record a `Warning` finding with an optional remediation hint.
    pub fn warn(
        &mut self,
        category: impl Into<String>,
        message: impl Into<String>,
        fix: Option<String>,
    ) {
        self.record(Severity::Warning, category, message, fix);
    }

    /// Record a `Failed` finding with an optional remediation hint.
    pub fn fail(
        &mut self,
        category: impl Into<String>,
        message: impl Into<String>,
        fix: Option<String>,
    ) {
        self.record(Severity::Failed, category, message, fix);
    }

    /// Findings of one severity, in insertion order.
    ///
    /// The iterator is lazy and restartable — callers may walk a partition
    /// any number of times.
    pub fn all(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        match severity {
            Severity::Passed => self.passed.iter(),
            Severity::Warning => self.warnings.iter(),
            Severity::Failed => self.failed.iter(),
        }
    }

    /// Size of each partition.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            passed: self.passed.len(),
            warnings: self.warnings.len(),
            failed: self.failed.len(),
        }
    }

    /// `true` iff at least one `Failed` finding was recorded.
    ///
    /// The process exit decision is a pure function of this value.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
