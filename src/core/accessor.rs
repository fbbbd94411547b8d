use crate::adapters::EnvSource;
use crate::domain::model::{ApiSettings, SettingsReport, API_KEY_VAR, DEFAULT_MODEL, MODEL_VAR};
use crate::domain::ports::ConfigSource;
use crate::utils::error::Result;
use crate::utils::mask::mask_secret;
use crate::utils::validation::{non_empty, require_present};

/// Produces the API credential from an injected [`ConfigSource`].
///
/// Every call reads the source afresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct CredentialAccessor<S: ConfigSource> {
    source: S,
}

impl<S: ConfigSource> CredentialAccessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns `OPENAI_API_KEY`, or `MissingConfiguration` if it is unset or empty.
    pub fn get_api_key(&self) -> Result<String> {
        let key = require_present(API_KEY_VAR, self.source.lookup(API_KEY_VAR)).inspect_err(|_| {
            tracing::debug!("{} not found in {}", API_KEY_VAR, self.source.source_name());
        })?;

        tracing::debug!(
            "{} loaded from {} ({})",
            API_KEY_VAR,
            self.source.source_name(),
            mask_secret(&key)
        );
        Ok(key)
    }

    /// Returns `OPENAI_MODEL`, falling back to `gpt-3.5-turbo`.
    pub fn get_model(&self) -> String {
        non_empty(self.source.lookup(MODEL_VAR)).unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn settings(&self) -> Result<ApiSettings> {
        Ok(ApiSettings {
            api_key: self.get_api_key()?,
            model: self.get_model(),
        })
    }

    pub fn report(&self) -> Result<SettingsReport> {
        Ok(SettingsReport::new(&self.settings()?, self.source.source_name()))
    }
}

impl Default for CredentialAccessor<EnvSource> {
    fn default() -> Self {
        Self::new(EnvSource::new())
    }
}

/// Reads `OPENAI_API_KEY` from the process environment.
pub fn get_api_key() -> Result<String> {
    CredentialAccessor::default().get_api_key()
}
