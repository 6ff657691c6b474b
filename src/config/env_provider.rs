#[cfg(test)]
use std::collections::HashMap;

/// Source of environment variables
///
/// Settings are read through this trait so tests can supply values without
/// touching the process environment, which parallel tests share.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
