use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::StartupError;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: &str = "10";
const DEFAULT_BODY_LIMIT: &str = "2097152";

/// Settings read from `SEOSCOPE_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Scoring thresholds and penalties; defaults when unset.
    pub scoring_config: Option<PathBuf>,
    pub timeout: Duration,
    /// Maximum request body in bytes.
    pub body_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let timeout_secs: u64 = try_load(&lookup, "SEOSCOPE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            addr: try_load(&lookup, "SEOSCOPE_ADDR", DEFAULT_ADDR)?,
            scoring_config: lookup("SEOSCOPE_CONFIG").filter(|p| !p.trim().is_empty()).map(PathBuf::from),
            timeout: Duration::from_secs(timeout_secs),
            body_limit: try_load(&lookup, "SEOSCOPE_BODY_LIMIT", DEFAULT_BODY_LIMIT)?,
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T, StartupError>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        StartupError::InvalidSetting { key: key.to_string(), reason: e.to_string() }
    })
}
