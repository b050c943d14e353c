use crate::api::ApiError;
use crate::logging::LogLevel;

/// Maps API failures to the level they are reported at in the activity log.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Critical: Auth
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Server trouble, or a restaurant with no data yet
            ApiError::Http { .. } => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Critical: the server broke the response contract
            ApiError::Decode(_) | ApiError::Validation(_) => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
