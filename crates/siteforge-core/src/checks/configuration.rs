//! Stage 1: project configuration.
//!
//! Loads `project.config.json` and verifies the naming scheme: domain
//! format, project identifier, database name, and the single-hostname
//! architecture. Each rule is independent; all run regardless of prior
//! failures within the stage.

use crate::checks::{CheckContext, StageCheck};
use crate::config::{
    CONFIG_FILE, ProjectConfig, database_name_for, domain_is_valid, project_name_for,
};
use crate::error::CoreResult;
use crate::findings::FindingStore;

const CATEGORY: &str = "config";

pub struct ConfigurationCheck;

impl StageCheck for ConfigurationCheck {
    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn title(&self) -> &'static str {
        "Project configuration"
    }

    fn run(&self, ctx: &CheckContext<'_>, store: &mut FindingStore) -> CoreResult<()> {
        let path = ctx.path(CONFIG_FILE);
        if !ctx.fs.exists(&path) {
            store.fail(
                CATEGORY,
                format!("{CONFIG_FILE} not found"),
                Some("Run: siteforge setup <domain> \"Your description\"".into()),
            );
            return Ok(());
        }

        let text = ctx.fs.read_to_string(&path)?;
        let config = ProjectConfig::from_json(&path, &text)?;
        store.pass(CATEGORY, "project config loaded successfully");

        check_domain_format(&config, store);
        check_project_name(&config, store);
        check_database_name(&config, store);
        check_hostname(&config, store);

        store.pass(CATEGORY, "project configuration validation completed");
        Ok(())
    }
}

fn check_domain_format(config: &ProjectConfig, store: &mut FindingStore) {
    if domain_is_valid(&config.domain) {
        store.pass(CATEGORY, format!("domain format valid: {}", config.domain));
    } else {
        store.fail(
            CATEGORY,
            format!("invalid domain format: {}", config.domain),
            Some("Use a lowercase domain like \"example.com\"".into()),
        );
    }
}

fn check_project_name(config: &ProjectConfig, store: &mut FindingStore) {
    let expected = project_name_for(&config.domain);
    if config.project.name == expected {
        store.pass(CATEGORY, "project name follows domain convention");
    } else {
        store.fail(
            CATEGORY,
            "project name doesn't match domain",
            Some(format!("Expected: {expected}, Got: {}", config.project.name)),
        );
    }
}

fn check_database_name(config: &ProjectConfig, store: &mut FindingStore) {
    let expected = database_name_for(&config.project.name);
    let actual = config.resources.database.as_deref().unwrap_or("(unset)");
    if actual == expected {
        store.pass(CATEGORY, "database name follows convention");
    } else {
        store.fail(
            CATEGORY,
            "database name doesn't follow convention",
            Some(format!("Expected: {expected}, Got: {actual}")),
        );
    }
}

fn check_hostname(config: &ProjectConfig, store: &mut FindingStore) {
    // Single hostname, admin served under /admin — no separate admin subdomain.
    if config.resources.hostname.as_deref() == Some(config.domain.as_str()) {
        store.pass(CATEGORY, "single hostname architecture confirmed");
    } else {
        store.fail(
            CATEGORY,
            "hostname architecture mismatch",
            Some("Use a single hostname with /admin routes".into()),
        );
    }
}
