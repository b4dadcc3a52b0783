//! Session configuration accepted by the public entry points.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Per-session log verbosity.
///
/// Threaded through the session context as an explicit field rather than
/// held as process-wide mutable logger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Silent,
}

/// Options recognized by session creation.
///
/// Defaults target a local driver: plain HTTP against `localhost:4444`
/// mounted at the root path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SessionOptions {
    /// URL scheme, `http` or `https`.
    pub protocol: String,
    /// Automation server host.
    pub hostname: String,
    /// Automation server port.
    pub port: u16,
    /// Path prefix the server is mounted under (e.g. `/wd/hub`).
    pub path: String,
    /// Requested capabilities, in either the flat or the structured shape.
    pub capabilities: Value,
    /// Log verbosity for this session.
    pub log_level: LogLevel,
    /// Per-request timeout in milliseconds.
    pub connection_retry_timeout: u64,
    /// Retries after the initial attempt for transient failures.
    pub connection_retry_count: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            hostname: "localhost".to_string(),
            port: 4444,
            path: "/".to_string(),
            capabilities: Value::Object(serde_json::Map::new()),
            log_level: LogLevel::default(),
            connection_retry_timeout: 90_000,
            connection_retry_count: 2,
        }
    }
}

impl SessionOptions {
    /// Parses options from JSON, rejecting unrecognized keys and invalid
    /// values before any network call is made.
    pub fn from_json(value: Value) -> Result<Self> {
        let options: SessionOptions = serde_json::from_value(value)
            .map_err(|e| Error::Configuration(format!("invalid session options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Validates value constraints synchronously.
    pub fn validate(&self) -> Result<()> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(Error::configuration(format!(
                "protocol must be \"http\" or \"https\", got {:?}",
                self.protocol
            )));
        }
        if self.hostname.is_empty() {
            return Err(Error::configuration("hostname must not be empty"));
        }
        if self.port == 0 {
            return Err(Error::configuration("port must be non-zero"));
        }
        if !self.path.starts_with('/') {
            return Err(Error::configuration(format!(
                "path must start with '/', got {:?}",
                self.path
            )));
        }
        if !self.capabilities.is_object() {
            return Err(Error::configuration("capabilities must be a JSON object"));
        }
        if self.connection_retry_timeout == 0 {
            return Err(Error::configuration(
                "connectionRetryTimeout must be non-zero",
            ));
        }
        Ok(())
    }

    /// Base URL the executor prefixes every command path with.
    pub fn endpoint(&self) -> String {
        let path = self.path.trim_end_matches('/');
        format!("{}://{}:{}{}", self.protocol, self.hostname, self.port, path)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_retry_timeout)
    }

    /// Attempt ceiling, initial call included.
    pub fn max_attempts(&self) -> u32 {
        self.connection_retry_count.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = SessionOptions::default();
        assert_eq!(options.endpoint(), "http://localhost:4444");
        assert_eq!(options.request_timeout(), Duration::from_secs(90));
        assert_eq!(options.max_attempts(), 3);
        assert_eq!(options.log_level, LogLevel::Info);
        options.validate().unwrap();
    }

    #[test]
    fn test_from_json_overrides() {
        let options = SessionOptions::from_json(json!({
            "hostname": "grid.example.com",
            "port": 443,
            "protocol": "https",
            "path": "/wd/hub",
            "capabilities": {"browserName": "chrome"},
            "logLevel": "debug",
            "connectionRetryCount": 5,
        }))
        .unwrap();
        assert_eq!(options.endpoint(), "https://grid.example.com:443/wd/hub");
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.max_attempts(), 6);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = SessionOptions::from_json(json!({"hostnme": "typo.example.com"}));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_value_constraints() {
        let bad_protocol = SessionOptions {
            protocol: "ftp".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            bad_protocol.validate(),
            Err(Error::Configuration(_))
        ));

        let bad_path = SessionOptions {
            path: "wd/hub".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_path.validate(), Err(Error::Configuration(_))));

        let bad_caps = SessionOptions {
            capabilities: json!(["not", "an", "object"]),
            ..Default::default()
        };
        assert!(matches!(bad_caps.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let options = SessionOptions {
            path: "/wd/hub/".to_string(),
            ..Default::default()
        };
        assert_eq!(options.endpoint(), "http://localhost:4444/wd/hub");
    }
}
