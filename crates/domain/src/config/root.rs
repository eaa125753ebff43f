use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::health::HealthConfig;
use super::logging::LoggingConfig;
use super::providers::{default_providers, ProviderConfig};
use super::race::RaceConfig;
use super::server::ServerConfig;
use crate::Provider;

const LOCAL_CONFIG_PATH: &str = "ferrous-doh.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-doh/config.toml";

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP listener (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DoH providers, in preference order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,

    #[serde(default)]
    pub race: RaceConfig,

    #[serde(default)]
    pub health: HealthConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            race: RaceConfig::default(),
            health: HealthConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }

        let mut seen = HashSet::new();
        for provider in &self.providers {
            let invalid = |reason: String| ConfigError::InvalidProvider {
                name: provider.name.clone(),
                reason,
            };
            if provider.name.trim().is_empty() {
                return Err(invalid("name cannot be empty".to_string()));
            }
            if !seen.insert(provider.name.as_str()) {
                return Err(invalid("duplicate provider name".to_string()));
            }
            if !(provider.url.starts_with("https://") || provider.url.starts_with("http://")) {
                return Err(invalid(format!("url must be http(s), got {}", provider.url)));
            }
        }

        self.server.socket_addr()?;

        let checks = [
            (self.race.racing_width == 0, "race.racing_width", "must be at least 1"),
            (self.race.timeout_ms == 0, "race.timeout_ms", "must be greater than 0"),
            (self.cache.max_entries == 0, "cache.max_entries", "must be greater than 0"),
            (self.cache.eviction_batch == 0, "cache.eviction_batch", "must be at least 1"),
        ];
        if let Some((_, field, reason)) = checks.into_iter().find(|(failed, _, _)| *failed) {
            return Err(ConfigError::InvalidValue { field, reason });
        }

        Ok(())
    }

    pub fn provider_list(&self) -> Vec<Provider> {
        self.providers.iter().map(ProviderConfig::to_provider).collect()
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
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
