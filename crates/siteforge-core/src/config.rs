//! Project configuration model and naming conventions.
//!
//! # Design
//!
//! The configuration record is an explicit schema, not a bag of dynamic JSON
//! keys: resource names are typed optional fields, so a missing field shows
//! up as a naming-convention finding rather than an untyped runtime failure.
//!
//! All derived names are functions of the domain's first label. Keeping the
//! derivations here, next to the schema, means the scaffolder and the
//! configuration stage check can never drift apart.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Well-known configuration file name at the project root.
pub const CONFIG_FILE: &str = "project.config.json";

/// Lowercase labels separated by dots, final label of at least two letters.
static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+\.[a-z]{2,}$").expect("domain pattern is valid"));

/// The persisted project configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub domain: String,
    pub project: ProjectInfo,
    #[serde(default)]
    pub cloudflare: CloudflareIds,
    #[serde(default)]
    pub resources: ResourceNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0.0".into()
}

/// Account identifiers, left as placeholder tokens until the user fills
/// them in (or CI substitutes them).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudflareIds {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
}

/// Derived resource names. All optional so that one missing key degrades to
/// a convention finding instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNames {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub kv_namespace: Option<String>,
    #[serde(default)]
    pub r2_bucket: Option<String>,
    #[serde(default)]
    pub worker: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
}

impl ProjectConfig {
    /// Parse a configuration record from JSON text.
    ///
    /// The `path` is only used to give parse errors a location.
    pub fn from_json(path: &Path, text: &str) -> CoreResult<Self> {
        serde_json::from_str(text).map_err(|e| CoreError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Derive a full configuration record from a domain and description.
    ///
    /// This is the single source of the naming scheme: every resource name
    /// is a function of the domain's first label.
    pub fn generate(domain: &str, description: &str) -> CoreResult<Self> {
        validate_domain(domain)?;
        let name = project_name_for(domain);

        Ok(Self {
            domain: domain.to_string(),
            project: ProjectInfo {
                name: name.clone(),
                description: if description.is_empty() {
                    format!("An edge deployment for {domain}")
                } else {
                    description.to_string()
                },
                version: default_version(),
            },
            cloudflare: CloudflareIds {
                account_id: Some("{{CLOUDFLARE_ACCOUNT_ID}}".into()),
                zone_id: Some("{{CLOUDFLARE_ZONE_ID}}".into()),
            },
            resources: ResourceNames {
                database: Some(database_name_for(&name)),
                kv_namespace: Some(kv_namespace_for(&name)),
                r2_bucket: Some(r2_bucket_for(&name)),
                worker: Some(worker_name_for(&name)),
                hostname: Some(domain.to_string()),
            },
        })
    }

    /// Serialize to pretty JSON for writing to [`CONFIG_FILE`].
    pub fn to_pretty_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Internal {
            message: format!("failed to serialize project config: {e}"),
        })
    }
}

// ── naming rules ──────────────────────────────────────────────────────────────

/// `true` if the domain matches the required pattern.
pub fn domain_is_valid(domain: &str) -> bool {
    DOMAIN_PATTERN.is_match(domain)
}

/// The project identifier derived from a domain: the first label,
/// lowercased, with non-alphanumeric characters stripped.
pub fn project_name_for(domain: &str) -> String {
    domain
        .split('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Storage resource name: `{project}_db`.
pub fn database_name_for(project: &str) -> String {
    format!("{project}_db")
}

/// KV namespace name: `{PROJECT}_PUBLISHED`.
pub fn kv_namespace_for(project: &str) -> String {
    format!("{}_PUBLISHED", project.to_ascii_uppercase())
}

/// Media bucket name: `{project}-media`.
pub fn r2_bucket_for(project: &str) -> String {
    format!("{project}-media")
}

/// Worker/service name: `{project}-worker`.
pub fn worker_name_for(project: &str) -> String {
    format!("{project}-worker")
}

/// Validate a user-supplied domain for the scaffolder.
///
/// Stricter than [`domain_is_valid`]: also rejects domains whose first label
/// strips down to nothing (e.g. `--.com`), which would derive an empty
/// project name.
pub fn validate_domain(domain: &str) -> CoreResult<()> {
    if !domain_is_valid(domain) {
        return Err(CoreError::InvalidDomain {
            domain: domain.to_string(),
            reason: "expected a lowercase domain like \"example.com\"".into(),
        });
    }
    if project_name_for(domain).is_empty() {
        return Err(CoreError::InvalidDomain {
            domain: domain.to_string(),
            reason: "first label must contain at least one alphanumeric character".into(),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn plain_domains_are_valid() {
        for domain in ["example.com", "my-site.io", "a.b.co", "site123.org"] {
            assert!(domain_is_valid(domain), "should be valid: {domain}");
        }
    }

    #[test]
    fn bad_domains_are_rejected() {
        for domain in ["Example.com", "nodot", "example.c", "example.", "spaces .com"] {
            assert!(!domain_is_valid(domain), "should be invalid: {domain}");
        }
    }

    #[test]
    fn project_name_uses_only_first_label() {
        assert_eq!(project_name_for("example.com"), "example");
        assert_eq!(project_name_for("sub.example.com"), "sub");
    }

    #[test]
    fn project_name_strips_non_alphanumerics() {
        assert_eq!(project_name_for("my-site.com"), "mysite");
        assert_eq!(project_name_for("a_b-c1.org"), "abc1");
    }

    #[test]
    fn derived_names_follow_conventions() {
        assert_eq!(database_name_for("example"), "example_db");
        assert_eq!(kv_namespace_for("example"), "EXAMPLE_PUBLISHED");
        assert_eq!(r2_bucket_for("example"), "example-media");
        assert_eq!(worker_name_for("example"), "example-worker");
    }

    #[test]
    fn generate_produces_consistent_record() {
        let config = ProjectConfig::generate("example.com", "Test site").unwrap();
        assert_eq!(config.project.name, "example");
        assert_eq!(config.resources.database.as_deref(), Some("example_db"));
        assert_eq!(config.resources.hostname.as_deref(), Some("example.com"));
        assert_eq!(config.project.description, "Test site");
    }

    #[test]
    fn generate_rejects_invalid_domain() {
        assert!(matches!(
            ProjectConfig::generate("NotADomain", ""),
            Err(CoreError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn generate_rejects_empty_first_label() {
        assert!(matches!(
            ProjectConfig::generate("--.com", ""),
            Err(CoreError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn json_round_trip() {
        let config = ProjectConfig::generate("example.com", "").unwrap();
        let text = config.to_pretty_json().unwrap();
        let parsed = ProjectConfig::from_json(&PathBuf::from(CONFIG_FILE), &text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_resource_keys_parse_as_none() {
        let text = r#"{"domain":"example.com","project":{"name":"example"}}"#;
        let config = ProjectConfig::from_json(&PathBuf::from(CONFIG_FILE), text).unwrap();
        assert_eq!(config.resources.database, None);
        assert_eq!(config.project.version, "1.0.0");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err =
            ProjectConfig::from_json(&PathBuf::from(CONFIG_FILE), "{not json").unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
    }
}
