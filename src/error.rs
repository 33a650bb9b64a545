//! Lookup error kinds, mapped to user-visible text by the display layer.

use thiserror::Error;

/// Everything that can go wrong during a single lookup. `Clone` so the error
/// can ride inside an iced message; each request is terminal, no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Zipcode '{0}' not found")]
    ZipcodeNotFound(String),

    #[error("No weather stations found matching '{0}'")]
    StationNotFound(String),

    #[error("No temperature data available for {0}")]
    NoTemperatureData(String),

    #[error("API request failed with status {0}")]
    BadStatus(u16),

    #[error("An error occurred: {0}")]
    Request(String),
}

impl LookupError {
    /// Wrap a transport or parse failure, keeping the underlying text.
    pub fn request(err: impl std::fmt::Display) -> Self {
        Self::Request(err.to_string())
    }
}
