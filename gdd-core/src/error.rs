/// Error types for fetching and normalizing GDD data
use thiserror::Error;

/// Message shown for any failure below the backend's own error reporting.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to fetch GDD data. Check your backend.";

/// Failure of a single GDD query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The service answered with an `error` field
    #[error("{0}")]
    BackendReported(String),

    /// The request could not complete or the body was not JSON
    #[error("transport failure: {0}")]
    Transport(String),
}

impl FetchError {
    /// Message to show the user for this failure.
    ///
    /// Backend messages are surfaced verbatim; transport details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::BackendReported(message) => message.clone(),
            FetchError::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Transport(format!("malformed JSON: {}", e))
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = FetchError::BackendReported("Location not found".to_string());
        assert_eq!(err.user_message(), "Location not found");
        assert_eq!(err.to_string(), "Location not found");
    }

    #[test]
    fn transport_detail_is_hidden_from_user() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), TRANSPORT_FAILURE_MESSAGE);
    }

    #[test]
    fn json_errors_become_transport_failures() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(matches!(FetchError::from(parse), FetchError::Transport(_)));
    }
}
