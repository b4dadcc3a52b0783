//! Session state shared by every handle composed over one remote session.

use serde_json::Value;

use wd_protocol::{Dialect, RequestedCapabilities};
use wd_runtime::config::SessionOptions;
use wd_runtime::error::{Error, Result};
use wd_runtime::request::RequestExecutor;

use crate::capabilities::classify_session;

/// Immutable per-session state.
///
/// Fixed once at creation/attachment time: the dialect and capabilities are
/// set exactly once from the server's response and never change afterwards.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Opaque id issued by the server.
    pub session_id: String,
    /// Negotiated dialect; final for the session's lifetime.
    pub dialect: Dialect,
    /// Canonical capabilities as returned by the server.
    pub capabilities: Value,
    /// Both originally-requested shapes, retained for re-attachment.
    pub requested: RequestedCapabilities,
    /// Options the session was created with.
    pub options: SessionOptions,
}

/// Context plus request machinery.
///
/// Shared by `Arc` between handles, so recomposition never duplicates the
/// transport or its retry state.
pub struct SessionInner {
    pub context: SessionContext,
    pub executor: RequestExecutor,
}

/// Options for attaching to an existing session, skipping creation and
/// capability negotiation entirely.
pub struct AttachOptions {
    pub options: SessionOptions,
    /// Id of the already-running remote session.
    pub session_id: String,
    /// Dialect assumption; modern servers are the default.
    pub dialect: Dialect,
}

impl AttachOptions {
    pub fn new(options: SessionOptions, session_id: impl Into<String>) -> Self {
        Self {
            options,
            session_id: session_id.into(),
            dialect: Dialect::WebDriver,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Builds the session context from a creation-response envelope.
///
/// Both session-id locations are checked: `value.sessionId` (modern) and
/// the top-level `sessionId` (legacy).
pub(crate) fn context_from_response(
    options: SessionOptions,
    requested: RequestedCapabilities,
    envelope: &Value,
) -> Result<SessionContext> {
    let value = envelope.get("value").cloned().unwrap_or(Value::Null);
    let session_id = value
        .get("sessionId")
        .and_then(Value::as_str)
        .or_else(|| envelope.get("sessionId").and_then(Value::as_str))
        .ok_or_else(|| Error::Protocol {
            name: "session not created".to_string(),
            message: "session response carries no sessionId".to_string(),
            status: 200,
            stacktrace: None,
        })?
        .to_string();

    let dialect = classify_session(&value);
    let capabilities = value.get("capabilities").cloned().unwrap_or(value);

    Ok(SessionContext {
        session_id,
        dialect,
        capabilities,
        requested,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modern_response_shape() {
        let envelope = json!({
            "value": {
                "sessionId": "w3c-1",
                "capabilities": {"browserName": "firefox"},
            }
        });
        let context = context_from_response(
            SessionOptions::default(),
            RequestedCapabilities::default(),
            &envelope,
        )
        .unwrap();
        assert_eq!(context.session_id, "w3c-1");
        assert_eq!(context.dialect, Dialect::WebDriver);
        assert_eq!(context.capabilities["browserName"], "firefox");
    }

    #[test]
    fn test_legacy_response_shape() {
        let envelope = json!({
            "sessionId": "jwp-1",
            "value": {"browserName": "chrome"},
        });
        let context = context_from_response(
            SessionOptions::default(),
            RequestedCapabilities::default(),
            &envelope,
        )
        .unwrap();
        assert_eq!(context.session_id, "jwp-1");
        assert_eq!(context.dialect, Dialect::JsonWire);
        // flat value becomes the canonical capabilities
        assert_eq!(context.capabilities["browserName"], "chrome");
    }

    #[test]
    fn test_missing_session_id_is_an_error() {
        let envelope = json!({"value": {"capabilities": {}}});
        let error = context_from_response(
            SessionOptions::default(),
            RequestedCapabilities::default(),
            &envelope,
        )
        .unwrap_err();
        assert_eq!(error.protocol_error_name(), Some("session not created"));
    }
}
