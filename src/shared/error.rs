//! Directory Error Types
//!
//! Failure taxonomy for loading the society directory. All of these are
//! absorbed by the caller: a failed load is logged and leaves the candidate
//! set empty, it never propagates past the widget.
use thiserror::Error;

/// Errors that can occur while fetching or decoding the user directory
#[derive(Debug, Error, Clone)]
pub enum DirectoryError {
    /// The directory service could not be reached
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The directory service answered with a non-success status
    #[error("Directory request failed with status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body or status text
        message: String,
    },

    /// The response body could not be decoded
    #[error("Decode error: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// A record in an otherwise well-formed response had an invalid field
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that failed normalization
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl DirectoryError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new invalid-record error
    pub fn invalid_record(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error() {
        let error = DirectoryError::network("connection refused");
        match error {
            DirectoryError::Network { message } => {
                assert_eq!(message, "connection refused");
            }
            _ => panic!("Expected Network"),
        }
    }

    #[test]
    fn test_status_error_display() {
        let error = DirectoryError::status(503, "unavailable");
        let display = format!("{}", error);
        assert!(display.contains("503"));
        assert!(display.contains("unavailable"));
    }

    #[test]
    fn test_invalid_record_error() {
        let error = DirectoryError::invalid_record("createdAt", "not a timestamp");
        match error {
            DirectoryError::InvalidRecord { field, message } => {
                assert_eq!(field, "createdAt");
                assert_eq!(message, "not a timestamp");
            }
            _ => panic!("Expected InvalidRecord"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        let invalid_json = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(invalid_json);
        let error: DirectoryError = result.unwrap_err().into();
        match error {
            DirectoryError::Decode { .. } => {}
            _ => panic!("Expected Decode from serde error"),
        }
    }

    #[test]
    fn test_error_clone() {
        let error = DirectoryError::status(404, "not found");
        let cloned = error.clone();
        assert_eq!(format!("{}", error), format!("{}", cloned));
    }
}
