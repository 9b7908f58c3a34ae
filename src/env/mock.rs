//! Mock environment implementation for testing
//!
//! Stores variables in memory and provides controlled, predictable lookups
//! without reading or mutating real process state.

use super::traits::EnvLookup;
use std::collections::HashMap;

/// In-memory environment for tests.
///
/// # Examples
///
/// ```
/// use envsub::env::{EnvLookup, MockEnv};
///
/// let env = MockEnv::new()
///     .with_var("APP_NAME", "World")
///     .with_var("APP_EMPTY", "");
///
/// assert_eq!(env.get("APP_NAME"), Some("World".to_string()));
/// assert_eq!(env.get("APP_EMPTY"), Some(String::new()));
/// assert_eq!(env.get("APP_MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Add a variable to an existing mock.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvLookup for MockEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
