//! Artifact generation - the setup half of the tool.
//!
//! Deterministic text generation from a [`ProjectConfig`]: the persisted
//! configuration record, the four Terraform files, and (when the app
//! directory already exists) the gateway configuration. No branching logic
//! lives here beyond "does app/ exist"; everything else is templating.
//!
//! The emitted text and the stage checks agree by construction: both draw
//! their tokens from [`crate::checks::content`] and their names from
//! [`crate::config`].

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::checks::content::{PLACEHOLDER_D1, PLACEHOLDER_KV};
use crate::checks::infrastructure::INFRA_DIR;
use crate::config::{CONFIG_FILE, ProjectConfig};
use crate::error::CoreResult;
use crate::ports::Filesystem;

/// What a scaffold run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Paths written, relative to the project root.
    pub written: Vec<PathBuf>,
    /// `true` when the gateway config was skipped because `app/` is absent.
    pub wrangler_skipped: bool,
}

/// Writes the generated artifacts through the filesystem port.
pub struct ScaffoldService {
    fs: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Generate every artifact for `config` under `root`.
    ///
    /// Existing files are overwritten — re-running setup refreshes the
    /// generated artifacts to the current naming scheme.
    #[instrument(skip_all, fields(domain = %config.domain))]
    pub fn generate(&self, root: &Path, config: &ProjectConfig) -> CoreResult<ScaffoldReport> {
        let mut written = Vec::new();

        let config_path = root.join(CONFIG_FILE);
        self.fs.write_file(&config_path, &config.to_pretty_json()?)?;
        written.push(PathBuf::from(CONFIG_FILE));

        let infra = root.join(INFRA_DIR);
        self.fs.create_dir_all(&infra)?;
        for (name, content) in terraform_files(config) {
            self.fs.write_file(&infra.join(name), &content)?;
            written.push(Path::new(INFRA_DIR).join(name));
        }

        let mut wrangler_skipped = false;
        let app_dir = root.join("app");
        if self.fs.exists(&app_dir) {
            self.fs
                .write_file(&app_dir.join("wrangler.toml"), &render_wrangler(config))?;
            written.push(PathBuf::from("app/wrangler.toml"));
        } else {
            warn!("app/ directory not found - wrangler.toml will be generated once it exists");
            wrangler_skipped = true;
        }

        info!(files = written.len(), "scaffold complete");
        Ok(ScaffoldReport {
            written,
            wrangler_skipped,
        })
    }
}

/// The four Terraform files in emission order.
pub fn terraform_files(config: &ProjectConfig) -> [(&'static str, String); 4] {
    [
        ("versions.tf", render_versions_tf()),
        ("variables.tf", render_variables_tf(config)),
        ("main.tf", render_main_tf()),
        ("outputs.tf", render_outputs_tf()),
    ]
}

fn render_versions_tf() -> String {
    r#"terraform {
  required_version = ">= 1.6.0"
  required_providers {
    cloudflare = {
      source  = "cloudflare/cloudflare"
      version = ">= 5.0"
    }
  }
}
"#
    .to_string()
}

fn render_variables_tf(config: &ProjectConfig) -> String {
    let project = &config.project.name;
    let database = config.resources.database.as_deref().unwrap_or_default();
    let kv = config.resources.kv_namespace.as_deref().unwrap_or_default();
    let bucket = config.resources.r2_bucket.as_deref().unwrap_or_default();
    format!(
        r#"# Cloudflare configuration
variable "cloudflare_api_token" {{
  type        = string
  sensitive   = true
  description = "Cloudflare API token with Worker, D1, R2, KV, and DNS permissions"
}}

variable "account_id" {{
  type        = string
  description = "Cloudflare account ID"
}}

variable "zone_id" {{
  type        = string
  description = "Cloudflare zone ID for {domain}"
}}

# Project configuration
variable "project_name" {{
  type        = string
  default     = "{project}"
  description = "Base project name"
}}

# Resource names (derived from the project config)
variable "database_name" {{
  type        = string
  default     = "{database}"
  description = "D1 database name"
}}

variable "kv_namespace_name" {{
  type        = string
  default     = "{kv}"
  description = "KV namespace name"
}}

variable "r2_bucket_name" {{
  type        = string
  default     = "{bucket}"
  description = "R2 bucket name"
}}

# Hostname (admin served at /admin on the same host)
variable "hostname" {{
  type        = string
  default     = "{domain}"
  description = "Domain hostname"
}}
"#,
        domain = config.domain,
    )
}

fn render_main_tf() -> String {
    r#"provider "cloudflare" {
  api_token = var.cloudflare_api_token
}

data "cloudflare_zone" "main" {
  zone_id = var.zone_id
}

# --- Storage resources ---
resource "cloudflare_workers_kv_namespace" "published" {
  account_id = var.account_id
  title      = var.kv_namespace_name
}

resource "cloudflare_d1_database" "main" {
  account_id = var.account_id
  name       = var.database_name
}

resource "cloudflare_r2_bucket" "media" {
  account_id = var.account_id
  name       = var.r2_bucket_name
}

# --- DNS records ---
resource "cloudflare_record" "root" {
  zone_id = var.zone_id
  name    = "@"
  type    = "A"
  content = "192.0.2.1" # placeholder IP; proxied so origin is hidden
  proxied = true
  comment = "Root domain for ${var.project_name} application"
}
"#
    .to_string()
}

fn render_outputs_tf() -> String {
    // Single-hostname architecture: these outputs must never mention the
    // retired root_hostname/admin_hostname pair.
    r#"# Resource IDs for the Wrangler configuration
output "kv_namespace_id" {
  value       = cloudflare_workers_kv_namespace.published.id
  description = "KV namespace ID for content caching"
}

output "d1_database_id" {
  value       = cloudflare_d1_database.main.id
  description = "D1 database ID"
}

output "r2_bucket_name" {
  value       = cloudflare_r2_bucket.media.name
  description = "R2 bucket name for media storage"
}

output "project_info" {
  value = {
    project_name = var.project_name
    hostname     = var.hostname
    admin_url    = "https://${var.hostname}/admin"
    zone_name    = data.cloudflare_zone.main.name
  }
  description = "Project configuration summary"
}

output "resource_names" {
  value = {
    database     = var.database_name
    kv_namespace = var.kv_namespace_name
    r2_bucket    = var.r2_bucket_name
  }
  description = "Generated resource names"
}
"#
    .to_string()
}

/// Gateway configuration with CI substitution placeholders.
pub fn render_wrangler(config: &ProjectConfig) -> String {
    let worker = config.resources.worker.as_deref().unwrap_or_default();
    let database = config.resources.database.as_deref().unwrap_or_default();
    let bucket = config.resources.r2_bucket.as_deref().unwrap_or_default();
    let hostname = config.resources.hostname.as_deref().unwrap_or(&config.domain);
    format!(
        r#"name = "{worker}"
main = "dist/_worker.js"
compatibility_date = "2025-09-17"
compatibility_flags = ["nodejs_compat"]

# Bindings - IDs filled from Terraform outputs
[[d1_databases]]
binding = "D1"
database_name = "{database}"
database_id = "{PLACEHOLDER_D1}" # replaced by CI/CD

[[kv_namespaces]]
binding = "KV"
id = "{PLACEHOLDER_KV}" # replaced by CI/CD

[[r2_buckets]]
binding = "R2"
bucket_name = "{bucket}"

[vars]
PROJECT_NAME = "{project}"
SITE_URL = "https://{hostname}"
ADMIN_URL = "https://{hostname}/admin"
"#,
        project = config.project.name,
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::content::{
        BINDING_SECTIONS, LEGACY_HOSTNAME_TOKENS, has_binding, has_placeholder, has_worker_name,
    };

    fn config() -> ProjectConfig {
        ProjectConfig::generate("example.com", "Test").unwrap()
    }

    #[test]
    fn outputs_avoid_dual_hostname_tokens() {
        let outputs = render_outputs_tf();
        for token in LEGACY_HOSTNAME_TOKENS {
            assert!(!outputs.contains(token), "outputs.tf leaked {token}");
        }
    }

    #[test]
    fn variables_carry_derived_names() {
        let text = render_variables_tf(&config());
        assert!(text.contains("example_db"));
        assert!(text.contains("EXAMPLE_PUBLISHED"));
        assert!(text.contains("example-media"));
        assert!(text.contains("example.com"));
    }

    #[test]
    fn wrangler_satisfies_gateway_checks() {
        let text = render_wrangler(&config());
        assert!(has_placeholder(&text, PLACEHOLDER_D1));
        assert!(has_placeholder(&text, PLACEHOLDER_KV));
        for section in BINDING_SECTIONS {
            assert!(has_binding(&text, section), "missing binding: {section}");
        }
        assert!(has_worker_name(&text));
        assert!(text.contains("name = \"example-worker\""));
    }

    #[test]
    fn terraform_files_emit_the_fixed_set() {
        let names: Vec<_> = terraform_files(&config()).iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["versions.tf", "variables.tf", "main.tf", "outputs.tf"]);
    }
}
