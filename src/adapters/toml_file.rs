use crate::domain::ports::ConfigSource;
use crate::utils::error::{KeyConfigError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct KeyFile {
    #[serde(default)]
    environment: HashMap<String, String>,
}

/// Values from the `[environment]` table of a TOML file.
///
/// `${VAR}` placeholders are resolved once at load time through another
/// source. A value with an unresolved placeholder is dropped so a literal
/// `${VAR}` string is never handed out as a credential.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    label: String,
    values: HashMap<String, String>,
}

impl TomlFileSource {
    pub fn from_file<P: AsRef<Path>>(path: P, resolver: &dyn ConfigSource) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(KeyConfigError::IoError)?;
        Self::from_toml_str(&content, &path.display().to_string(), resolver)
    }

    pub fn from_toml_str(content: &str, label: &str, resolver: &dyn ConfigSource) -> Result<Self> {
        let parsed: KeyFile = toml::from_str(content).map_err(|e| KeyConfigError::ParseError {
            path: label.to_string(),
            message: e.to_string(),
        })?;

        let re = Regex::new(r"\$\{([^}]*)\}").map_err(|e| KeyConfigError::ParseError {
            path: label.to_string(),
            message: format!("placeholder pattern: {}", e),
        })?;

        let mut values = HashMap::with_capacity(parsed.environment.len());
        for (name, raw) in parsed.environment {
            match Self::substitute(&re, &raw, resolver) {
                Some(value) => {
                    values.insert(name, value);
                }
                None => {
                    tracing::warn!("Dropping {} from {}: unresolved placeholder", name, label);
                }
            }
        }

        tracing::debug!("Loaded {} value(s) from {}", values.len(), label);

        Ok(Self {
            label: format!("toml:{}", label),
            values,
        })
    }

    fn substitute(re: &Regex, raw: &str, resolver: &dyn ConfigSource) -> Option<String> {
        let mut unresolved = false;
        let replaced = re.replace_all(raw, |caps: &Captures| {
            let name = &caps[1];
            let value = if name.is_empty() {
                None
            } else {
                resolver.lookup(name).filter(|v| !v.is_empty())
            };
            match value {
                Some(v) => v,
                None => {
                    unresolved = true;
                    String::new()
                }
            }
        });

        if unresolved {
            None
        } else {
            Some(replaced.into_owned())
        }
    }
}

impl ConfigSource for TomlFileSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn source_name(&self) -> &str {
        &self.label
    }
}
