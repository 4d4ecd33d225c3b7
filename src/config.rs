//! Server configuration loaded from TOML with CLI overrides.

use std::path::Path;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_model::PostWinPolicy;
use tracing::{debug, info, instrument};

use crate::error::ConfigError;

/// File read when no `--config` is given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Whether moves are accepted after a winner exists.
    #[serde(default)]
    post_win_policy: PostWinPolicy,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_host(), default_port(), PostWinPolicy::default())
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, policy = %config.post_win_policy, "Config loaded");
        Ok(config)
    }

    /// Resolves the config file to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        post_win_policy: Option<PostWinPolicy>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(policy) = post_win_policy {
            self.post_win_policy = policy;
        }
        self
    }

    /// Serializes the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}
