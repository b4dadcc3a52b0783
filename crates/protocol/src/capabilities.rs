//! Capability payload shapes for session negotiation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// W3C-structured capabilities: `alwaysMatch` plus `firstMatch` candidates.
///
/// Unknown top-level keys are rejected so malformed caller input fails
/// before any network call is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct W3cCapabilities {
    #[serde(default)]
    pub always_match: Map<String, Value>,
    #[serde(default)]
    pub first_match: Vec<Map<String, Value>>,
}

/// Both capability shapes as originally requested by the caller.
///
/// Retained on the session after negotiation so a later re-attachment can
/// request an equivalent session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestedCapabilities {
    /// Structured shape, sent as `capabilities` in the creation body.
    #[serde(rename = "w3cCaps")]
    pub w3c: W3cCapabilities,
    /// Flat legacy shape, sent as `desiredCapabilities`.
    #[serde(rename = "jsonwpCaps")]
    pub jsonwp: Map<String, Value>,
}

impl RequestedCapabilities {
    /// Session-creation request body carrying both shapes under their
    /// respective field names, so either dialect's server can consume the
    /// one it expects.
    pub fn session_request_body(&self) -> Value {
        serde_json::json!({
            "capabilities": self.w3c,
            "desiredCapabilities": self.jsonwp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_w3c_capabilities_parse() {
        let caps: W3cCapabilities = serde_json::from_value(json!({
            "alwaysMatch": {"browserName": "firefox"},
            "firstMatch": [{}],
        }))
        .unwrap();
        assert_eq!(caps.always_match["browserName"], "firefox");
        assert_eq!(caps.first_match.len(), 1);
    }

    #[test]
    fn test_w3c_capabilities_reject_unknown_key() {
        let result: Result<W3cCapabilities, _> = serde_json::from_value(json!({
            "alwaysMatch": {},
            "desiredCapabilities": {},
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_session_request_body_carries_both_shapes() {
        let mut flat = Map::new();
        flat.insert("browserName".to_string(), json!("chrome"));
        let requested = RequestedCapabilities {
            w3c: W3cCapabilities {
                always_match: flat.clone(),
                first_match: vec![Map::new()],
            },
            jsonwp: flat,
        };
        let body = requested.session_request_body();
        assert_eq!(body["capabilities"]["alwaysMatch"]["browserName"], "chrome");
        assert_eq!(body["desiredCapabilities"]["browserName"], "chrome");
    }
}
