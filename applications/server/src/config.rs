/// Server configuration
use crate::error::{Result, ServerError};
use phasebook_core::Dataset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `PHASEBOOK_SERVER__PORT`
pub const ENV_PREFIX: &str = "PHASEBOOK";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataSettings {
    /// JSON file holding the user directory; the built-in seed is used when unset
    #[serde(default)]
    pub users_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from `path`, or `config.toml` when `None`, then
    /// apply environment overrides
    ///
    /// An explicit path must exist; the default `config.toml` is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with PHASEBOOK_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::Config(
                "Server host is required (set PHASEBOOK_SERVER__HOST)".to_string(),
            ));
        }

        if let Some(path) = &self.data.users_path {
            if !path.is_file() {
                return Err(ServerError::Config(format!(
                    "User dataset not found at {:?}",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Build the dataset this configuration points at
    pub fn dataset(&self) -> Result<Dataset> {
        match &self.data.users_path {
            Some(path) => Ok(Dataset::load(path)?),
            None => {
                tracing::info!("No dataset path configured, using built-in users");
                Ok(Dataset::builtin())
            }
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            data: DataSettings::default(),
        }
    }
}
