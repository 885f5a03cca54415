//! Injectable environment variable sources.
//!
//! The readiness check reads exactly one variable, but reading it through a
//! trait keeps the check testable without mutating the real process
//! environment (set_var is process-global and racy under a threaded test
//! runner).

use std::collections::HashMap;

/// Source of environment variables.
pub trait EnvSource {
    /// Look up a variable. Returns `None` when unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Map-backed environment for tests and scripted invocations.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Build an environment from one variable.
    pub fn with(name: &str, value: &str) -> Self {
        let mut env = Self::new();
        env.set(name, value);
        env
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_returns_set_values() {
        let env = MapEnv::with("PARAMKIT_HOME", "/toolkit");
        assert_eq!(env.get("PARAMKIT_HOME"), Some("/toolkit".to_string()));
    }

    #[test]
    fn map_env_returns_none_for_unset() {
        let env = MapEnv::new();
        assert_eq!(env.get("PARAMKIT_HOME"), None);
    }

    #[test]
    fn map_env_set_replaces_value() {
        let mut env = MapEnv::with("VAR", "a");
        env.set("VAR", "b");
        assert_eq!(env.get("VAR"), Some("b".to_string()));
    }

    #[test]
    fn process_env_reads_real_environment() {
        // PATH is set in any sane test environment
        let env = ProcessEnv;
        assert!(env.get("PATH").is_some());
    }
}
