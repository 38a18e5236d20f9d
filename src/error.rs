//! Error types and handling for the `spfcheck` core

use thiserror::Error;

/// Main error type for the `spfcheck` core
#[derive(Error, Debug)]
pub enum SpfError {
    /// Network communication errors (request failed or non-2xx status)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Malformed provider responses (bad JSON, missing fields)
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Geocoding returned an empty result set
    #[error("No matches found: {message}")]
    NotFound { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Input { message: String },
}

impl SpfError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SpfError::Network { .. } => {
                "UV lookup failed. Try again or use city search.".to_string()
            }
            SpfError::Parse { .. } => {
                "The UV service sent something unreadable. Try again.".to_string()
            }
            SpfError::NotFound { .. } => "No luck. Try a more specific city name.".to_string(),
            SpfError::Input { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}

impl From<reqwest::Error> for SpfError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}
