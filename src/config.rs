//! Job configuration, read once from the environment at startup

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::api::{GoldApiClient, PushoverClient};
use crate::store::JsonFileStore;

pub const DEFAULT_TARGET_22K: f64 = 12700.0;
pub const DEFAULT_RESET_BUFFER: f64 = 200.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("GOLD_ALERT_PERSIST_POLICY must be `swallow` or `propagate`, got {0:?}")]
    InvalidPolicy(String),
    #[error("GOLD_ALERT_RESET_BUFFER must be greater than zero, got {0}")]
    NonPositiveBuffer(f64),
}

/// What to do when the state file cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Log the failure and finish the run normally. The next run may alert again.
    #[default]
    Swallow,
    /// Fail the run
    Propagate,
}

impl FromStr for PersistPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swallow" => Ok(PersistPolicy::Swallow),
            "propagate" => Ok(PersistPolicy::Propagate),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Alert threshold on the 22K price, INR per gram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Alert when the price is at or below this
    pub target: f64,
    /// Re-arm only once the price is above `target + reset_buffer`
    pub reset_buffer: f64,
}

impl Thresholds {
    pub fn reset_level(&self) -> f64 {
        self.target + self.reset_buffer
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET_22K,
            reset_buffer: DEFAULT_RESET_BUFFER,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub gold_api_key: String,
    pub pushover_app_token: String,
    pub pushover_user_key: String,
    pub gold_api_base_url: String,
    pub pushover_base_url: String,
    pub state_file: PathBuf,
    pub thresholds: Thresholds,
    pub persist_policy: PersistPolicy,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("gold_api_key", &redact(&self.gold_api_key))
            .field("pushover_app_token", &redact(&self.pushover_app_token))
            .field("pushover_user_key", &redact(&self.pushover_user_key))
            .field("gold_api_base_url", &self.gold_api_base_url)
            .field("pushover_base_url", &self.pushover_base_url)
            .field("state_file", &self.state_file)
            .field("thresholds", &self.thresholds)
            .field("persist_policy", &self.persist_policy)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// Credentials are not validated: a missing key shows up as an
    /// authentication failure from the API.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let number = |var: &'static str, default: f64| -> Result<f64, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or(ConfigError::InvalidNumber { var, value: raw }),
            }
        };

        let thresholds = Thresholds {
            target: number("GOLD_ALERT_TARGET", DEFAULT_TARGET_22K)?,
            reset_buffer: number("GOLD_ALERT_RESET_BUFFER", DEFAULT_RESET_BUFFER)?,
        };
        if thresholds.reset_buffer <= 0.0 {
            return Err(ConfigError::NonPositiveBuffer(thresholds.reset_buffer));
        }

        let persist_policy = match lookup("GOLD_ALERT_PERSIST_POLICY") {
            Some(raw) => raw.parse()?,
            None => PersistPolicy::default(),
        };

        Ok(Self {
            gold_api_key: text("GOLD_API_KEY", ""),
            pushover_app_token: text("PUSHOVER_APP_TOKEN", ""),
            pushover_user_key: text("PUSHOVER_USER_KEY", ""),
            gold_api_base_url: text("GOLD_API_BASE_URL", GoldApiClient::DEFAULT_BASE_URL),
            pushover_base_url: text("PUSHOVER_BASE_URL", PushoverClient::DEFAULT_BASE_URL),
            state_file: PathBuf::from(text("GOLD_ALERT_STATE_FILE", JsonFileStore::DEFAULT_PATH)),
            thresholds,
            persist_policy,
        })
    }
}
