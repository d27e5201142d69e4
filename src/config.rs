//! Where the service listens and how loudly it logs.
//!
//! Settings come from `climate_sense.toml` in the working directory,
//! falling back to built-in values when the file or a key is missing.
//! `CLIMATE_SENSE_*` variables and `RUST_LOG` win over the file.

use serde::Deserialize;

const CONFIG_FILE: &str = "climate_sense.toml";

/// Service settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Listener socket, `[server]` table
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to listen on, loopback unless overridden
    pub host: String,
    pub port: u16,
}

/// `[logging]` table
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `climate_sense=debug`
    pub filter: String,
}

impl Config {
    /// Read the settings file, layer the environment on top and check the result.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or unparseable settings file, or a zero port.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CLIMATE_SENSE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("CLIMATE_SENSE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("CLIMATE_SENSE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("CLIMATE_SENSE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port 0 would bind a random port".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` string handed to the tcp listener
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "climate_sense=info,tower_http=debug".to_string(),
        }
    }
}

/// Reasons the service refuses to start with the given settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("climate_sense.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unable to read climate_sense.toml: {0}")]
    Io(#[from] std::io::Error),
    #[error("rejected setting: {0}")]
    Validation(String),
}
