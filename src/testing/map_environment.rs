use std::collections::HashMap;

use crate::ports::EnvironmentSource;

/// In-memory environment with separate build-time and process tables.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    build: HashMap<String, String>,
    process: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(mut self, name: &str, value: &str) -> Self {
        self.build.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_process(mut self, name: &str, value: &str) -> Self {
        self.process.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvironmentSource for MapEnvironment {
    fn build_var(&self, name: &str) -> Option<String> {
        self.build.get(name).cloned()
    }

    fn process_var(&self, name: &str) -> Option<String> {
        self.process.get(name).cloned()
    }
}
