use crate::adapters::{EnvSource, LayeredSource, TomlFileSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "openai-key"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Check that the OpenAI API key is configured without printing it")
)]
pub struct CliConfig {
    #[cfg_attr(
        feature = "cli",
        arg(long, help = "TOML file with an [environment] table, consulted after the process environment")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Print the report as JSON"))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Process environment first, then the optional TOML file.
    pub fn build_source(&self) -> Result<LayeredSource> {
        let mut source = LayeredSource::new().with_layer(EnvSource::new());

        if let Some(path) = &self.config {
            let file = TomlFileSource::from_file(path, &EnvSource::new())?;
            tracing::info!("Using config file {}", path);
            source.push(file);
        }

        Ok(source)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extension("config", path, &["toml"])?;
        }
        Ok(())
    }
}
