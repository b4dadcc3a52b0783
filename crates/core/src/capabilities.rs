//! Capability negotiation and dialect classification.

use serde_json::Value;

use wd_protocol::{Dialect, RequestedCapabilities, W3cCapabilities};
use wd_runtime::error::{Error, Result};

/// Produces both wire shapes from whichever shape the caller supplied.
///
/// An input already carrying `alwaysMatch` is authoritative: the flat shape
/// is derived from its `alwaysMatch` contents. Any other object is treated
/// as the flat legacy shape and wrapped as
/// `{alwaysMatch: input, firstMatch: [{}]}`.
///
/// Validation is synchronous and happens before any network call.
pub fn negotiate(requested: &Value) -> Result<RequestedCapabilities> {
    let object = requested
        .as_object()
        .ok_or_else(|| Error::configuration("capabilities must be a JSON object"))?;

    if object.contains_key("alwaysMatch") {
        let w3c: W3cCapabilities = serde_json::from_value(requested.clone())
            .map_err(|e| Error::Configuration(format!("invalid W3C capabilities: {e}")))?;
        let jsonwp = w3c.always_match.clone();
        return Ok(RequestedCapabilities { w3c, jsonwp });
    }

    Ok(RequestedCapabilities {
        w3c: W3cCapabilities {
            always_match: object.clone(),
            first_match: vec![serde_json::Map::new()],
        },
        jsonwp: object.clone(),
    })
}

/// Classifies the negotiated dialect from the creation response `value`.
///
/// Prioritized rules, applied in order:
/// 1. `value.capabilities` is an object - modern W3C session.
/// 2. Any other object-shaped `value` - legacy JSONWP session.
/// 3. Non-object `value` - W3C, the default assumption for servers that
///    return malformed bodies.
///
/// The classification is final for the session's lifetime.
pub fn classify_session(value: &Value) -> Dialect {
    match value {
        Value::Object(map) if !map.get("capabilities").is_some_and(Value::is_object) => {
            Dialect::JsonWire
        }
        _ => Dialect::WebDriver,
    }
}
