//! # Donation Error Types
//!
//! Typed error handling for the donation checkout service.
//! All donation operations return `Result<T, DonationError>`.

use thiserror::Error;

/// Message returned to callers for any failure that is not their fault.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to process donation, please try again later";

/// Core error type for all donation operations
#[derive(Debug, Error)]
pub enum DonationError {
    /// Amount missing, non-numeric or outside the accepted range
    #[error("{0}")]
    InvalidAmount(String),

    /// Malformed request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DonationError {
    /// Returns true if the caller sent something we refuse to act on
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DonationError::InvalidAmount(_) | DonationError::InvalidRequest(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Validation messages are returned verbatim. Everything else is masked,
    /// the real cause only goes to the server log.
    pub fn public_message(&self) -> String {
        match self {
            DonationError::InvalidAmount(message) => message.clone(),
            DonationError::InvalidRequest(_) => self.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for donation operations
pub type DonationResult<T> = Result<T, DonationError>;
