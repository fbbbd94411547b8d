use crate::utils::mask::mask_secret;
use serde::Serialize;
use std::fmt;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_key: String,
    pub model: String,
}

// Keep the key out of `{:?}` output.
impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key", &mask_secret(&self.api_key))
            .field("model", &self.model)
            .finish()
    }
}

/// Serializable view of [`ApiSettings`] with the key masked.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsReport {
    #[serde(rename = "OPENAI_API_KEY")]
    pub api_key: String,
    #[serde(rename = "OPENAI_MODEL")]
    pub model: String,
    pub source: String,
}

impl SettingsReport {
    pub fn new(settings: &ApiSettings, source: &str) -> Self {
        Self {
            api_key: mask_secret(&settings.api_key),
            model: settings.model.clone(),
            source: source.to_string(),
        }
    }
}
