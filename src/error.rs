/// Error types for the meeting-recap core
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the request layer
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport-level failure: the request could not be sent or the service
    /// answered with a non-success status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered successfully but the response carried no text.
    #[error("Empty payload: model response contained no usable text")]
    EmptyPayload,

    /// Structured output was requested but the returned text did not parse as
    /// JSON or did not conform to the required schema.
    #[error("Malformed structured output: {0}")]
    MalformedOutput(String),

    /// All retry attempts were used up; wraps the last attempt's cause.
    #[error("Request failed after {attempts} attempts: {source}")]
    ExhaustedRetries {
        attempts: u32,
        #[source]
        source: Box<AppError>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this failure may be retried under the backoff policy.
    ///
    /// Transport failures, empty payloads and malformed structured output are
    /// all "got a response, but not a usable one" and retry identically.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_) | AppError::EmptyPayload | AppError::MalformedOutput(_)
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert AppError to a user-facing message string for the UI layer
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(AppError::Transport("HTTP 500".to_string()).is_retryable());
        assert!(AppError::EmptyPayload.is_retryable());
        assert!(AppError::MalformedOutput("not json".to_string()).is_retryable());

        assert!(!AppError::InvalidInput("empty transcript".to_string()).is_retryable());
        assert!(!AppError::Config("missing key".to_string()).is_retryable());
        assert!(!AppError::ExhaustedRetries {
            attempts: 5,
            source: Box::new(AppError::EmptyPayload),
        }
        .is_retryable());
    }

    #[test]
    fn test_exhausted_retries_wraps_cause() {
        let error = AppError::ExhaustedRetries {
            attempts: 5,
            source: Box::new(AppError::Transport("HTTP 503".to_string())),
        };
        let message: String = error.into();
        assert!(message.contains("5 attempts"));
        assert!(message.contains("HTTP 503"));
    }
}
