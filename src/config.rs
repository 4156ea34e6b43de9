//! Application configuration.
//!
//! Sources, later wins: built-in defaults, then `~/.vestibule/config.json`
//! if present, then environment variables (`VESTIBULE_LATENCY_MS`,
//! `VESTIBULE_LOG`, `VESTIBULE_INSTANT=1`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, VestibuleError};

/// Default simulated authentication latency in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 2000;

/// Default UI animation tick in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 16;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Simulated authentication latency.
    pub latency_ms: u64,
    /// UI animation tick interval.
    pub tick_rate_ms: u64,
    /// Where tracing output goes; logging is disabled when unset.
    pub log_file: Option<PathBuf>,
}

/// On-disk shape of the config file; every field optional.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    latency_ms: Option<u64>,
    tick_rate_ms: Option<u64>,
    log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Set the simulated latency.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set the animation tick rate.
    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Set the log file target.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Simulated latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Animation tick as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Default config file path (`~/.vestibule/config.json`), if the home
    /// directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vestibule").join("config.json"))
    }

    /// Load configuration: defaults, overlaid with the file at `path` if it
    /// exists, overlaid with environment variables.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = path {
            if path.exists() {
                let contents = std::fs::read_to_string(path)?;
                let file: ConfigFile =
                    serde_json::from_str(&contents).map_err(|source| VestibuleError::ConfigParse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                if let Some(latency_ms) = file.latency_ms {
                    config.latency_ms = latency_ms;
                }
                if let Some(tick_rate_ms) = file.tick_rate_ms {
                    config.tick_rate_ms = tick_rate_ms;
                }
                if file.log_file.is_some() {
                    config.log_file = file.log_file;
                }
            }
        }

        config.apply_env();
        Ok(config)
    }

    /// Load from the default file path plus environment.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        Self::load_from(path.as_deref())
    }

    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("VESTIBULE_LATENCY_MS") {
            if let Ok(latency_ms) = value.parse() {
                self.latency_ms = latency_ms;
            }
        }
        if let Ok(path) = std::env::var("VESTIBULE_LOG") {
            if !path.is_empty() {
                self.log_file = Some(PathBuf::from(path));
            }
        }
        // Dev switch: skip the simulated wait entirely.
        if std::env::var("VESTIBULE_INSTANT").is_ok() {
            self.latency_ms = 0;
        }
    }
}
