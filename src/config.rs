use std::fs;
use std::path::Path;
use std::time::Duration;

use serde_derive::Deserialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no `timeout` key in the loaded config")]
    MissingTimeout,
    #[error("`timeout` must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),
}

/// Options read from the JSON config file. Unknown keys are ignored.
///
/// `timeout` stays `None` when the file parsed fine but did not carry the
/// key; only a failed load substitutes the default config.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub timeout: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config { timeout: Some(5.0) }
    }
}

impl Config {
    /// The per-request timeout. Errors when the loaded config has no
    /// usable `timeout`, which is fatal for the run.
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        let secs = self.timeout.ok_or(ConfigError::MissingTimeout)?;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ConfigError::InvalidTimeout(secs));
        }
        Ok(Duration::from_secs_f64(secs))
    }
}

/// A load failure is not fatal: the defaults are used and the failure
/// only shows up in the log.
pub fn load(path: &Path) -> Config {
    match read(path) {
        Ok(config) => config,
        Err(err) => {
            error!("Config loading failed: {}", err);
            Config::default()
        }
    }
}

fn read(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
