//! Configuration management
//!
//! nlconv stores configuration in ~/.nlconv/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// nlconv configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Conversion settings
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Default mode selector ("1" or "2"); skips the mode prompt when set
    #[serde(default)]
    pub default_mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log operations to a file
    #[serde(default = "default_debug")]
    pub debug: Option<bool>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: Some(false),
        }
    }
}

fn default_debug() -> Option<bool> {
    Some(false)
}

/// Get the configuration file path
pub fn config_file_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;

    let config_dir = home_dir.join(".nlconv");
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

    Ok(config_dir.join("config.toml"))
}

/// Get the default configuration file content with comments
fn get_default_config_content() -> &'static str {
    r#"# nlconv Configuration File
#
# This file controls default behavior for nlconv. Values set here can be
# overridden by command-line flags.

[conversion]
# Default mode selector (optional)
# "1" - replace literal '\n' sequences with real newlines
# "2" - replace real newlines with literal '\n' sequences
# When set, the interactive mode prompt is skipped.
#default_mode = "2"

[logging]
# Log operations to ~/.nlconv/nlconv.log (default: false)
debug = false
"#
}

/// Save the default commented configuration file
pub fn save_default_config() -> Result<()> {
    let config_path = config_file_path()?;

    fs::write(&config_path, get_default_config_content())
        .with_context(|| format!("Failed to write default config file: {}", config_path.display()))?;

    Ok(())
}

/// Load configuration from file, creating default if needed
///
/// If the config file doesn't exist, creates it with defaults and returns them.
/// If the config file is malformed, recreates it with defaults.
pub fn load_config() -> Result<Config> {
    let config_path = config_file_path()?;

    if !config_path.exists() {
        save_default_config()?;
    }

    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = match toml::from_str(&config_str) {
        Ok(config) => config,
        Err(_) => {
            // Config is malformed, recreate with defaults
            save_default_config()?;
            return Ok(Config::default());
        }
    };

    validate_config(&config)?;

    Ok(config)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(mode) = &config.conversion.default_mode {
        if !["1", "2"].contains(&mode.as_str()) {
            anyhow::bail!("Invalid default_mode: {} (must be \"1\" or \"2\")", mode);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.conversion.default_mode, None);
        assert_eq!(config.logging.debug, Some(false));
    }

    #[test]
    fn test_validate_config_valid() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.conversion.default_mode = Some("1".to_string());
        assert!(validate_config(&config).is_ok());

        config.conversion.default_mode = Some("2".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_default_mode() {
        let mut config = Config::default();
        config.conversion.default_mode = Some("3".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(get_default_config_content()).unwrap();
        assert_eq!(config.conversion.default_mode, None);
        assert_eq!(config.logging.debug, Some(false));
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[conversion]"));
        assert!(toml_str.contains("[logging]"));
    }

    #[test]
    fn test_partial_config_parses() {
        let config: Config = toml::from_str("[logging]\ndebug = true\n").unwrap();
        assert_eq!(config.logging.debug, Some(true));
        assert_eq!(config.conversion.default_mode, None);
    }
}
