//! Layered runtime configuration.
//!
//! Sources, lowest priority first: built-in defaults, a TOML file
//! (`rotom.toml` in the working directory unless one is named explicitly),
//! then `ROTOM_` environment variables. Nested keys use a double
//! underscore, e.g. `ROTOM_LOGGING__LEVEL=debug`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};
use crate::interface::MAX_QUERY_LENGTH;

pub const DEFAULT_CONFIG_FILE: &str = "rotom.toml";
pub const DEFAULT_DATA_PATH: &str = "data/pokedex.ron";
pub const ENV_PREFIX: &str = "ROTOM_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RON dataset loaded at startup.
    pub data_path: PathBuf,
    pub max_query_length: usize,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_query_length: MAX_QUERY_LENGTH,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default sources. An explicit `config_file` must exist;
    /// the default `rotom.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let config: Config = Self::figment(config_file)?
            .extract()
            .map_err(Box::new)?;
        config.validate()?;

        debug!(
            data_path = %config.data_path.display(),
            max_query_length = config.max_query_length,
            log_level = %config.logging.level,
            "configuration loaded"
        );
        Ok(config)
    }

    fn figment(config_file: Option<&Path>) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        figment = match config_file {
            Some(path) if !path.exists() => {
                return Err(ConfigError::FileNotFound(path.to_path_buf()))
            }
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_query_length == 0 {
            return Err(ConfigError::ZeroQueryLength);
        }
        Ok(())
    }
}
