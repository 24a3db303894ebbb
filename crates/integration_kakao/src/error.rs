//! Directions error types
//!
//! Non-200 HTTP statuses are not errors; they are reported through
//! [`ApiReply::status_code`](crate::ApiReply) instead.

use thiserror::Error;

/// Errors that can occur during a directions call
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Request construction, transport, JSON parsing or schema decoding failed
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),

    /// The API key cannot be used to authenticate requests
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// The caller supplied arguments the endpoint does not accept
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Lower-level cause of a [`DirectionsError::Internal`]
#[derive(Debug, Error)]
pub enum InternalError {
    /// The request address or body could not be formed
    #[error("could not build request: {0}")]
    InvalidRequest(String),

    /// The HTTP exchange failed (connection, timeout, body read)
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The 200 response body is not valid JSON
    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The JSON tree does not match the expected response shape
    #[error("response does not match schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl DirectionsError {
    /// Shorthand for an internal request-construction failure
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::Internal(InternalError::InvalidRequest(reason.into()))
    }

    /// Returns true if the failure was caused by the caller's input
    /// rather than by transport or decoding
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidApiKey(_) | Self::InvalidArguments(_))
    }

    /// The internal cause, if this is an internal error
    #[must_use]
    pub const fn internal(&self) -> Option<&InternalError> {
        match self {
            Self::Internal(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Internal(InternalError::Transport(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors() {
        assert!(DirectionsError::InvalidApiKey("empty".to_string()).is_caller_error());
        assert!(DirectionsError::InvalidArguments("priority".to_string()).is_caller_error());
        assert!(!DirectionsError::invalid_request("nan").is_caller_error());
    }

    #[test]
    fn test_internal_cause_is_exposed() {
        let err = DirectionsError::invalid_request("non-finite coordinate");
        assert!(matches!(
            err.internal(),
            Some(InternalError::InvalidRequest(reason)) if reason == "non-finite coordinate"
        ));
        assert!(
            DirectionsError::InvalidArguments("x".to_string())
                .internal()
                .is_none()
        );
    }

    #[test]
    fn test_error_display() {
        let err = DirectionsError::InvalidArguments(
            "priority RECOMMEND is not accepted".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid arguments: priority RECOMMEND is not accepted"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DirectionsError::from(InternalError::MalformedJson(json_err));
        assert!(err.to_string().starts_with("Internal error: response is not valid JSON"));
    }

    #[test]
    fn test_schema_error_keeps_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<u32>("\"7\"").unwrap_err();
        let err = InternalError::Schema(json_err);
        assert!(err.source().is_some());
    }
}
