use crate::domain::ports::ConfigSource;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

impl ConfigSource for MapSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}
