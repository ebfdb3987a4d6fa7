use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;
use crate::dns_message::HEADER_SIZE;

const LOCAL_CONFIG_PATH: &str = "tld-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/tld-dns/config.toml";

/// Main configuration structure for tld-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address, receive buffer)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone sources and matching policy
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tld-dns.toml in current directory
    /// 3. /etc/tld-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(table) = overrides.zone_table {
            self.zone.table_path = table;
        }
        if let Some(tld) = overrides.tld_file {
            self.zone.tld_path = tld;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.dns_addr()?;

        if self.server.recv_buffer_size < HEADER_SIZE {
            return Err(ConfigError::Validation(format!(
                "recv_buffer_size must be at least {} bytes",
                HEADER_SIZE
            )));
        }

        if self.zone.table_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No zone table path configured".to_string(),
            ));
        }

        if self.zone.tld_path.trim().is_empty() {
            return Err(ConfigError::Validation("No TLD path configured".to_string()));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zone_table: Option<String>,
    pub tld_file: Option<String>,
    pub log_level: Option<String>,
}
