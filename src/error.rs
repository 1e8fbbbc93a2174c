use thiserror::Error;

/// Unified error type for release-dispatch operations
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference error: {0}")]
    Reference(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dispatch rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-dispatch
pub type Result<T> = std::result::Result<T, DispatchError>;

impl DispatchError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DispatchError::Config(msg.into())
    }

    /// Create a reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        DispatchError::Reference(msg.into())
    }

    /// Create a rejection error from a non-success response
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        DispatchError::Rejected {
            status,
            body: body.into(),
        }
    }

    /// True when the remote API refused the credentials
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            DispatchError::Rejected {
                status: 401 | 403,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DispatchError::config("missing owner");
        assert_eq!(err.to_string(), "Configuration error: missing owner");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DispatchError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DispatchError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_rejected_display_includes_status_and_body() {
        let err = DispatchError::rejected(422, "No ref found for: dev");
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("No ref found for: dev"));
    }

    #[test]
    fn test_auth_failure_detection() {
        assert!(DispatchError::rejected(401, "Bad credentials").is_auth_failure());
        assert!(DispatchError::rejected(403, "Forbidden").is_auth_failure());
        assert!(!DispatchError::rejected(404, "Not Found").is_auth_failure());
        assert!(!DispatchError::reference("empty").is_auth_failure());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DispatchError::config("x"), "Configuration error"),
            (DispatchError::reference("x"), "Reference error"),
            (DispatchError::rejected(500, "x"), "Dispatch rejected"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
