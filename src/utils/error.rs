use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyConfigError {
    #[error("Missing configuration: environment variable {variable} must be set")]
    MissingConfiguration { variable: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KeyConfigError {
    pub fn missing(variable: &str) -> Self {
        Self::MissingConfiguration {
            variable: variable.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::System,
            Self::MissingConfiguration { .. }
            | Self::ParseError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingConfiguration { variable } => format!(
                "Export {} in the invoking shell or process environment, e.g. `export {}=...`",
                variable, variable
            ),
            Self::IoError(_) => "Check that the config file exists and is readable".to_string(),
            Self::ParseError { path, .. } => {
                format!("Fix the TOML syntax in {} and try again", path)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for {}", field)
            }
        }
    }

    /// Message safe to show an operator. Never contains secret values.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfiguration { variable } => {
                format!("{} is not set. An API key is required to continue.", variable)
            }
            Self::IoError(e) => format!("Could not read configuration: {}", e),
            Self::ParseError { path, .. } => format!("Configuration file {} is invalid", path),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Option {} is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyConfigError>;
