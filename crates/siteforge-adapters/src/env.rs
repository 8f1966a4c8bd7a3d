//! Environment-variable lookup adapters.

use std::collections::HashSet;

use siteforge_core::ports::EnvSource;

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for SystemEnv {
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

/// Fixed set of "set" variables for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashSet<String>,
}

impl StaticEnv {
    /// An environment where nothing is set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark a variable as set, consuming and returning self.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.vars.insert(name.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn is_set(&self, name: &str) -> bool {
        self.vars.contains(name)
    }
}
