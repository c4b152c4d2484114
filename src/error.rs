//! Error types and handling for `TripWeaver` application

use thiserror::Error;

/// Main error type for the `TripWeaver` application
#[derive(Error, Debug)]
pub enum TripWeaverError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Chat-completion API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Well-formed API response carrying an unusable payload
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripWeaverError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripWeaverError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TripWeaverError::Api { .. } | TripWeaverError::InvalidResponse { .. } => {
                "Failed to generate itinerary. Please try again.".to_string()
            }
            TripWeaverError::Validation { message } => message.clone(),
            TripWeaverError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripWeaverError::General { message } => message.clone(),
        }
    }
}
