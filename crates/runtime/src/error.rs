//! Error types for the wd runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the session/protocol layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing setup input. Caught synchronously, before any
    /// network call is made. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Command arguments violate the descriptor's parameter schema.
    /// Caught before the request is sent. Never retried.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Network-level failure that exhausted the retry budget.
    #[error("Transport error after {attempts} attempt(s): {message}")]
    Transport { message: String, attempts: u32 },

    /// Well-formed HTTP response signalling a server-side failure.
    /// Surfaces immediately - a definitive server decision is not retried.
    #[error("{name}: {message} (HTTP {status})")]
    Protocol {
        /// Server-reported error name (e.g. "no such element")
        name: String,
        /// Human-readable error message
        message: String,
        /// HTTP status of the response
        status: u16,
        /// Server-side stacktrace, if reported
        stacktrace: Option<String>,
    },

    /// Command name absent from the session's surface and extensions.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Shorthand for an [`Error::InvalidParameter`] naming the offending
    /// parameter.
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns the server error name if this is a protocol error.
    pub fn protocol_error_name(&self) -> Option<&str> {
        match self {
            Error::Protocol { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the HTTP status if this is a protocol error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Returns true if this error indicates a caller bug caught before any
    /// request left the process.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::InvalidParameter { .. } | Error::CommandNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_accessors() {
        let error = Error::Protocol {
            name: "stale element reference".to_string(),
            message: "element is not attached".to_string(),
            status: 404,
            stacktrace: None,
        };
        assert_eq!(error.protocol_error_name(), Some("stale element reference"));
        assert_eq!(error.http_status(), Some(404));
        assert!(!error.is_transport());
        assert!(!error.is_caller_error());
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(Error::configuration("bad port").is_caller_error());
        assert!(Error::invalid_parameter("url", "missing").is_caller_error());
        assert!(Error::CommandNotFound("warpDrive".to_string()).is_caller_error());
        let transport = Error::Transport {
            message: "connection refused".to_string(),
            attempts: 3,
        };
        assert!(!transport.is_caller_error());
        assert!(transport.is_transport());
    }
}
