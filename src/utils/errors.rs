use std::io;

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Exit codes from sysexits.h, so schedulers can tell "run again" from "fix me"
pub mod exit_code {
    /// Permanent API failure: rejected credentials, unusable response
    pub const UNAVAILABLE: u8 = 69;
    /// State file could not be written
    pub const IO_ERROR: u8 = 74;
    /// Transient failure; the next scheduled run is expected to recover
    pub const TEMP_FAIL: u8 = 75;
    pub const CONFIG: u8 = 78;
}

/// Anything that ends a run early
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Price fetch failed: {0}")]
    PriceFetch(#[source] ApiError),
    #[error("Pushover error: {0}")]
    Notify(#[source] ApiError),
    #[error("Failed to save alert state: {0}")]
    Persist(#[source] io::Error),
}

impl JobError {
    pub fn exit_code(&self) -> u8 {
        match self {
            JobError::Config(_) => exit_code::CONFIG,
            JobError::PriceFetch(e) | JobError::Notify(e) => {
                if e.is_transient() {
                    exit_code::TEMP_FAIL
                } else {
                    exit_code::UNAVAILABLE
                }
            }
            JobError::Persist(_) => exit_code::IO_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let network = || ApiError::Network("timed out".to_string());
        let status = |code| ApiError::UnexpectedStatus { status: code, body: String::new() };

        assert_eq!(JobError::PriceFetch(network()).exit_code(), 75);
        assert_eq!(JobError::PriceFetch(status(502)).exit_code(), 75);
        assert_eq!(JobError::PriceFetch(status(401)).exit_code(), 69);
        assert_eq!(JobError::PriceFetch(ApiError::Decode("eof".into())).exit_code(), 69);
        assert_eq!(JobError::PriceFetch(ApiError::Request("builder error".into())).exit_code(), 69);
        assert_eq!(JobError::Notify(network()).exit_code(), 75);
        assert_eq!(JobError::Notify(status(400)).exit_code(), 69);
        assert_eq!(
            JobError::Persist(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")).exit_code(),
            74
        );
        assert_eq!(JobError::Config(ConfigError::NonPositiveBuffer(0.0)).exit_code(), 78);
    }

    #[test]
    fn test_messages() {
        let err = JobError::Notify(ApiError::UnexpectedStatus { status: 429, body: "slow down".into() });
        assert_eq!(err.to_string(), "Pushover error: Unexpected status 429: slow down");
    }
}
