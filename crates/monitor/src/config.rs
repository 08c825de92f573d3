use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sensormon.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print process reports as JSON lines
    pub json: bool,
    /// Print the greeting and command list on start
    pub banner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible runs; entropy when unset
    pub seed: Option<u64>,
    pub count: usize,
    pub interval_ms: u64,
    pub devices: usize,
    /// Run a processing pass after this many readings (0 = only at the end)
    pub process_every: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: 30,
            interval_ms: 100,
            devices: 3,
            process_every: 10,
        }
    }
}

impl MonitorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// An explicit path must load. Without one, `sensormon.toml` is used
    /// if present and defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if !fallback.exists() {
            return Ok(Self::default());
        }

        match Self::load(&fallback) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Logging is not initialized yet at this point.
                eprintln!("warning: ignoring {}: {}", fallback.display(), e);
                Ok(Self::default())
            }
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::WARN)
    }
}
