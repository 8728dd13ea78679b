//! Data models for the alert job
//!
//! Each model is either persisted state or the result of a pipeline step.

pub mod alert_state;
pub mod outcome;
pub mod price;

// Re-export commonly used types for convenience
pub use alert_state::AlertState;
pub use outcome::RunOutcome;
pub use price::PriceQuote;
