//! Command descriptors: the static definition of one remote command.
//!
//! A descriptor carries everything needed to shape a request - HTTP verb,
//! URL template with `{named}` path segments, and a typed body-parameter
//! schema. Descriptors are plain consts, loaded once per process and shared
//! read-only across all sessions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire dialect of the automation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialect {
    /// Modern W3C WebDriver protocol.
    WebDriver,
    /// Legacy JSON Wire Protocol.
    JsonWire,
    /// Mobile JSON Wire Protocol (hybrid layer usable from either base).
    MJsonWire,
    /// Appium vendor extension commands.
    Appium,
}

impl Dialect {
    /// Returns true for the modern W3C dialect.
    pub fn is_w3c(self) -> bool {
        matches!(self, Dialect::WebDriver)
    }
}

/// HTTP verb of a command endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Delete,
}

impl HttpVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a body parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    StringArray,
    ObjectArray,
    StringOrNumber,
    /// Any JSON value, including null (e.g. `switchToFrame`'s id).
    Any,
}

impl ParamKind {
    /// Returns true if `value` satisfies this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Object => value.is_object(),
            ParamKind::Array => value.is_array(),
            ParamKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ParamKind::ObjectArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_object)),
            ParamKind::StringOrNumber => value.is_string() || value.is_number(),
            ParamKind::Any => true,
        }
    }

    /// Human-readable expectation, used in parameter error messages.
    pub fn expectation(self) -> &'static str {
        match self {
            ParamKind::String => "a string",
            ParamKind::Number => "a number",
            ParamKind::Boolean => "a boolean",
            ParamKind::Object => "an object",
            ParamKind::Array => "an array",
            ParamKind::StringArray => "an array of strings",
            ParamKind::ObjectArray => "an array of objects",
            ParamKind::StringOrNumber => "a string or number",
            ParamKind::Any => "any value",
        }
    }
}

/// One body parameter of a command.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

/// Required-parameter shorthand for the dialect tables.
pub const fn req(name: &'static str, kind: ParamKind) -> Param {
    Param {
        name,
        kind,
        required: true,
    }
}

/// Optional-parameter shorthand for the dialect tables.
pub const fn opt(name: &'static str, kind: ParamKind) -> Param {
    Param {
        name,
        kind,
        required: false,
    }
}

/// Static definition of one remote command.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    /// Method name exposed on the command surface (e.g. `elementClick`).
    pub name: &'static str,
    pub verb: HttpVerb,
    /// URL template with `{named}` path segments
    /// (e.g. `/session/{sessionId}/element/{elementId}/click`).
    pub path: &'static str,
    /// Body parameter schema.
    pub params: &'static [Param],
}

impl CommandDescriptor {
    /// Iterates the named `{segment}` variables of the URL template, in
    /// order of appearance.
    pub fn path_variables(&self) -> impl Iterator<Item = &'static str> {
        PathVariables { rest: self.path }
    }

    /// Looks up a body parameter by name.
    pub fn find_param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

struct PathVariables {
    rest: &'static str,
}

impl Iterator for PathVariables {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let start = self.rest.find('{')?;
        let after = &self.rest[start + 1..];
        let end = after.find('}')?;
        let name = &after[..end];
        self.rest = &after[end + 1..];
        Some(name)
    }
}
