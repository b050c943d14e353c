//! Error handling for the dashboard API client

use reqwest::StatusCode;
use thiserror::Error;

/// Message attached to every non-success HTTP response. The body is not read.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while fetching the data.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The body of a successful response was not the declared shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded but broke a data-model invariant.
    #[error("Invalid payload: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> ApiError {
        ApiError::Http {
            status: status.as_u16(),
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Validation(_) => None,
        }
    }
}
