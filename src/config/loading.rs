use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::{Config, ConfigPaths};
use crate::{EncoreError, Result};

const DEFAULT_HEADER: &str = "# Encore configuration file\n\n";

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A default file is written first when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, the file
    /// cannot be read or written, or its contents are not a valid configuration.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads a configuration file, creating it with defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default file cannot be created
    /// - The configuration file cannot be read
    /// - The TOML content is invalid or does not match the schema
    #[instrument(fields(path = %path.display()))]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("No configuration file found, writing defaults");
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| EncoreError::io_at(e, path))?;
        let config = Self::parse(&content, Some(path))?;
        debug!(?config, "Configuration loaded");

        Ok(config)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or does not match the schema.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Self::parse(content, None)
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| EncoreError::toml_parse(e, path))?;

        value
            .try_into()
            .map_err(|e: toml::de::Error| EncoreError::ConfigValidation {
                component: "config parsing".to_string(),
                details: e.to_string(),
            })
    }
}

fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| EncoreError::io_at(e, parent))?;
    }

    let body = Config::default().to_toml()?;
    fs::write(path, format!("{DEFAULT_HEADER}{body}")).map_err(|e| EncoreError::io_at(e, path))?;

    Ok(())
}
