use serde::{Deserialize, Serialize};

use super::decoder::{DecoderConfig, RdlengthPolicy, MAX_MESSAGE_SIZE};
use super::errors::ConfigError;
use super::input::{InputConfig, InputFormat};
use super::logging::LoggingConfig;
use crate::dns_header::HEADER_LEN;

const LOCAL_CONFIG_PATH: &str = "dns-observer.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-observer/config.toml";

/// Main configuration structure for dns-observer
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Decoder behaviour (RDATA reconciliation, size limit)
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// How input messages are encoded and framed
    #[serde(default)]
    pub input: InputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-observer.toml in current directory
    /// 3. /etc/dns-observer/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(format) = overrides.input_format {
            self.input.format = format;
        }
        if overrides.tcp_framing {
            self.input.tcp_framing = true;
        }
        if overrides.strict_rdlength {
            self.decoder.rdlength_policy = RdlengthPolicy::Strict;
        }
        if let Some(size) = overrides.max_message_size {
            self.decoder.max_message_size = size;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.decoder.max_message_size;
        if !(HEADER_LEN..=MAX_MESSAGE_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "max_message_size must be between {} and {}, got {}",
                HEADER_LEN, MAX_MESSAGE_SIZE, size
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_format: Option<InputFormat>,
    pub tcp_framing: bool,
    pub strict_rdlength: bool,
    pub max_message_size: Option<usize>,
    pub log_level: Option<String>,
}
