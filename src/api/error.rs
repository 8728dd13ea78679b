use thiserror::Error;

/// Failure of a single outbound API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built (bad URL, unencodable header)
    #[error("Invalid request: {0}")]
    Request(String),
    /// Request could not be sent or no response was received
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with anything but 200 OK
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns true if running the job again later is likely to succeed.
    ///
    /// Timeouts, rate limits and server errors are transient. Anything else the
    /// server rejected (bad token, unknown route) or sent back garbled will fail
    /// the same way on the next run.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::UnexpectedStatus { status, .. } => {
                matches!(status, 408 | 429) || (500..=599).contains(status)
            }
            ApiError::Request(_) | ApiError::Decode(_) => false,
        }
    }

    /// Map a failed `send()`. Builder errors come from our own config and
    /// will not go away on a re-run.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.to_string())
        } else {
            ApiError::Network(format!("Request failed: {}", err))
        }
    }
}
