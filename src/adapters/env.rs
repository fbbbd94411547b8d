use crate::domain::ports::ConfigSource;

/// Process environment. Non-UTF-8 values are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvSource {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn source_name(&self) -> &str {
        "env"
    }
}
