pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use adapters::{EnvSource, LayeredSource, MapSource, TomlFileSource};
pub use core::{accessor::get_api_key, CredentialAccessor};
pub use domain::model::{ApiSettings, SettingsReport, API_KEY_VAR, DEFAULT_MODEL, MODEL_VAR};
pub use domain::ports::ConfigSource;
pub use utils::error::{KeyConfigError, Result};
