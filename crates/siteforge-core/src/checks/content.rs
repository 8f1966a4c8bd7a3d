//! Named content predicates over generated config text.
//!
//! Checks against the infrastructure and gateway files are substring-based
//! for fidelity to the conventions the scaffolder emits. Keeping them behind
//! named predicates means a structural parser could be substituted later
//! without touching stage logic.

/// Placeholder token substituted with the D1 database ID by CI.
pub const PLACEHOLDER_D1: &str = "{{D1_DATABASE_ID}}";

/// Placeholder token substituted with the KV namespace ID by CI.
pub const PLACEHOLDER_KV: &str = "{{KV_NAMESPACE_ID}}";

/// Binding sections every gateway configuration must declare.
pub const BINDING_SECTIONS: [&str; 3] = ["d1_databases", "kv_namespaces", "r2_buckets"];

/// Output names from the retired dual-hostname architecture.
pub const LEGACY_HOSTNAME_TOKENS: [&str; 2] = ["root_hostname", "admin_hostname"];

/// Per-app directories from the retired multi-worker layout.
pub const LEGACY_APP_PATHS: [&str; 2] = ["apps/admin", "apps/web"];

/// `true` if the text carries the given placeholder token verbatim.
pub fn has_placeholder(text: &str, token: &str) -> bool {
    text.contains(token)
}

/// `true` if the text declares the named binding section.
pub fn has_binding(text: &str, section: &str) -> bool {
    text.contains(section)
}

/// `true` if the text assigns a worker/service name.
pub fn has_worker_name(text: &str) -> bool {
    text.contains("name = ")
}

/// `true` if the text mentions the needle anywhere.
pub fn mentions(text: &str, needle: &str) -> bool {
    text.contains(needle)
}
