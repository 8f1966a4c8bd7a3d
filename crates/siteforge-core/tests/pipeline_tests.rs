//! End-to-end tests for the validation pipeline against an in-memory tree.

use std::path::Path;

use siteforge_adapters::{MemoryFilesystem, StaticEnv, StubProbe};
use siteforge_core::checks::{CheckContext, run_pipeline};
use siteforge_core::config::{CONFIG_FILE, ProjectConfig};
use siteforge_core::findings::{FindingStore, Severity};
use siteforge_core::ports::EnvSource;
use siteforge_core::scaffold::{ScaffoldService, render_wrangler, terraform_files};

const PACKAGE_JSON: &str = r#"{
  "name": "example-app",
  "scripts": {
    "dev": "wrangler dev",
    "build": "astro build",
    "deploy": "wrangler deploy",
    "db:migrate": "wrangler d1 migrations apply example_db"
  }
}"#;

const DEPLOY_YML: &str = "jobs:\n  deploy:\n    defaults:\n      run:\n        working-directory: app\n    steps:\n      - run: sed -i \"s/{{D1_DATABASE_ID}}/$D1_ID/\" wrangler.toml\n      - run: sed -i \"s/{{KV_NAMESPACE_ID}}/$KV_ID/\" wrangler.toml\n";

fn run(fs: &MemoryFilesystem, probe: StubProbe, env: &StaticEnv) -> FindingStore {
    let ctx = CheckContext::new(Path::new(""), fs, &probe, env);
    run_pipeline(&ctx)
}

fn env_all_set() -> StaticEnv {
    StaticEnv::empty()
        .with("TF_VAR_cloudflare_api_token")
        .with("CF_ACCOUNT_ID")
        .with("CF_ZONE_ID")
}

/// A tree the way `siteforge setup` leaves it, plus a complete app directory
/// and deploy workflow.
fn healthy_tree() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new()
        .with_dir("app")
        .with_file("app/package.json", PACKAGE_JSON)
        .with_file("app/migrations/0001_init.sql", "CREATE TABLE posts (id INTEGER);")
        .with_file(".github/workflows/deploy.yml", DEPLOY_YML);

    let config = ProjectConfig::generate("example.com", "Test site").unwrap();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    service.generate(Path::new(""), &config).unwrap();
    fs
}

#[test]
fn healthy_tree_has_zero_failures() {
    let store = run(&healthy_tree(), StubProbe::passing(), &env_all_set());
    let failed: Vec<_> = store.all(Severity::Failed).collect();
    assert!(failed.is_empty(), "unexpected failures: {failed:#?}");
    assert_eq!(store.counts().warnings, 0);
}

#[test]
fn pipeline_is_idempotent_on_an_unchanged_tree() {
    let fs = healthy_tree();
    let env = env_all_set();
    let first = run(&fs, StubProbe::passing(), &env);
    let second = run(&fs, StubProbe::passing(), &env);
    assert_eq!(first, second);
}

#[test]
fn warnings_alone_do_not_fail_the_run() {
    // Unset env vars and an empty migrations dir produce warnings only.
    let fs = MemoryFilesystem::new()
        .with_dir("app")
        .with_dir("app/migrations")
        .with_file("app/package.json", PACKAGE_JSON)
        .with_file(".github/workflows/deploy.yml", DEPLOY_YML);
    let config = ProjectConfig::generate("example.com", "").unwrap();
    ScaffoldService::new(Box::new(fs.clone()))
        .generate(Path::new(""), &config)
        .unwrap();

    let store = run(&fs, StubProbe::passing(), &StaticEnv::empty());
    assert!(!store.has_failures());
    // Three env vars + empty migrations directory.
    assert_eq!(store.counts().warnings, 4);
}

#[test]
fn missing_config_is_a_single_failed_finding_and_stops_the_stage() {
    let store = run(&MemoryFilesystem::new(), StubProbe::failing(), &StaticEnv::empty());

    let config_failures: Vec<_> = store
        .all(Severity::Failed)
        .filter(|f| f.category == "config")
        .collect();
    assert_eq!(config_failures.len(), 1);
    assert!(config_failures[0].message.contains(CONFIG_FILE));
    assert!(config_failures[0].fix.as_deref().unwrap().contains("siteforge setup"));

    // No naming checks ran: the config category recorded nothing else.
    assert_eq!(
        store.all(Severity::Passed).filter(|f| f.category == "config").count(),
        0
    );
    assert!(store.has_failures());
}

#[test]
fn invalid_domain_yields_exactly_one_domain_finding() {
    let fs = MemoryFilesystem::new().with_file(
        CONFIG_FILE,
        r#"{"domain":"Not_A_Domain","project":{"name":"notadomain"}}"#,
    );
    let store = run(&fs, StubProbe::failing(), &StaticEnv::empty());

    let domain_failures: Vec<_> = store
        .all(Severity::Failed)
        .filter(|f| f.message.contains("invalid domain format"))
        .collect();
    assert_eq!(domain_failures.len(), 1);
}

#[test]
fn malformed_config_is_contained_to_one_stage_error() {
    let fs = MemoryFilesystem::new().with_file(CONFIG_FILE, "{broken json");
    let store = run(&fs, StubProbe::failing(), &StaticEnv::empty());

    let config_failures: Vec<_> = store
        .all(Severity::Failed)
        .filter(|f| f.category == "config")
        .collect();
    assert_eq!(config_failures.len(), 1);
    assert!(config_failures[0].message.contains("Project configuration error"));

    // Later stages still ran.
    assert!(store.all(Severity::Failed).any(|f| f.category == "app"));
}

#[test]
fn legacy_apps_directory_is_failed_and_app_checks_stop() {
    let fs = MemoryFilesystem::new().with_dir("apps/admin");
    let store = run(&fs, StubProbe::failing(), &StaticEnv::empty());

    let app_failed: Vec<_> = store
        .all(Severity::Failed)
        .filter(|f| f.category == "app")
        .collect();
    // Legacy dir + missing canonical dir, nothing else.
    assert_eq!(app_failed.len(), 2);
    assert!(app_failed[0].message.contains("old apps/"));
    assert!(app_failed[1].message.contains("app/ directory not found"));
    assert!(
        !store
            .all(Severity::Failed)
            .any(|f| f.message.contains("required file/directory")),
        "sub-path checks must not run without the canonical directory"
    );
}

#[test]
fn missing_manifest_script_is_its_own_failure() {
    let fs = healthy_tree();
    fs.add_file(
        "app/package.json",
        r#"{"scripts":{"dev":"wrangler dev","build":"astro build","deploy":"wrangler deploy"}}"#,
    );
    let store = run(&fs, StubProbe::passing(), &env_all_set());

    let failed: Vec<_> = store.all(Severity::Failed).collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].message.contains("db:migrate"));
}

#[test]
fn one_missing_placeholder_fails_only_that_token() {
    let fs = healthy_tree();
    let config = ProjectConfig::generate("example.com", "").unwrap();
    let wrangler = render_wrangler(&config).replace("{{KV_NAMESPACE_ID}}", "real-id");
    fs.add_file("app/wrangler.toml", &wrangler);

    let store = run(&fs, StubProbe::passing(), &env_all_set());

    let failed: Vec<_> = store
        .all(Severity::Failed)
        .filter(|f| f.category == "wrangler")
        .collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].message.contains("{{KV_NAMESPACE_ID}}"));

    // The other token and all binding sections still pass.
    let passed: Vec<_> = store
        .all(Severity::Passed)
        .filter(|f| f.category == "wrangler")
        .map(|f| f.message.as_str())
        .collect();
    assert!(passed.iter().any(|m| m.contains("{{D1_DATABASE_ID}}")));
    assert!(passed.iter().any(|m| m.contains("d1_databases")));
    assert!(passed.iter().any(|m| m.contains("kv_namespaces")));
    assert!(passed.iter().any(|m| m.contains("r2_buckets")));
}

#[test]
fn absent_workflow_is_one_warning_and_no_deploy_failures() {
    let fs = MemoryFilesystem::new();
    let store = run(&fs, StubProbe::failing(), &StaticEnv::empty());

    let deploy_warnings: Vec<_> = store
        .all(Severity::Warning)
        .filter(|f| f.category == "deploy")
        .collect();
    assert_eq!(deploy_warnings.len(), 1);
    assert_eq!(
        store.all(Severity::Failed).filter(|f| f.category == "deploy").count(),
        0
    );
}

#[test]
fn workflow_referencing_legacy_paths_fails() {
    let fs = healthy_tree();
    fs.add_file(
        ".github/workflows/deploy.yml",
        "jobs:\n  deploy:\n    working-directory: app\n    # also builds apps/admin\n",
    );
    let store = run(&fs, StubProbe::passing(), &env_all_set());

    assert!(
        store
            .all(Severity::Failed)
            .any(|f| f.category == "deploy" && f.message.contains("multi-worker"))
    );
}

#[test]
fn probe_failure_is_a_single_terraform_failure() {
    let store = run(&healthy_tree(), StubProbe::failing(), &env_all_set());

    let failed: Vec<_> = store.all(Severity::Failed).collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].message.contains("Terraform validation failed"));
}

#[test]
fn unset_env_vars_warn_but_never_fail() {
    let env = StaticEnv::empty().with("CF_ACCOUNT_ID");
    let store = run(&healthy_tree(), StubProbe::passing(), &env);

    assert!(!store.has_failures());
    assert_eq!(store.counts().warnings, 2);
    assert!(env.is_set("CF_ACCOUNT_ID"));
}

#[test]
fn dual_hostname_outputs_are_flagged() {
    let fs = healthy_tree();
    let config = ProjectConfig::generate("example.com", "").unwrap();
    let tainted = format!(
        "{}\noutput \"root_hostname\" {{ value = var.hostname }}\n",
        terraform_files(&config)
            .iter()
            .find(|(name, _)| *name == "outputs.tf")
            .map(|(_, content)| content.clone())
            .unwrap()
    );
    fs.add_file("infra/outputs.tf", &tainted);

    let store = run(&fs, StubProbe::passing(), &env_all_set());
    assert!(
        store
            .all(Severity::Failed)
            .any(|f| f.category == "terraform" && f.message.contains("dual-hostname"))
    );
}
