//! Outbound HTTP APIs: the price feed and the push notifier

use async_trait::async_trait;

pub mod error;
pub mod goldapi;
pub mod pushover;

#[cfg(test)]
pub(crate) mod test_server;

pub use error::ApiError;
pub use goldapi::GoldApiClient;
pub use pushover::PushoverClient;

/// Source of the 24K gold price
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Current 24K price in INR per gram
    async fn fetch_price_per_gram(&self) -> Result<f64, ApiError>;
}

/// Destination for alert messages
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), ApiError>;
}
