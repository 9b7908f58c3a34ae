//! Real environment implementation backed by the process environment

use super::traits::EnvLookup;

/// Environment lookup that reads the actual process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
