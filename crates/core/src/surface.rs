//! Per-session command surface generated from the static descriptor tables.
//!
//! The registry/factory at the heart of the crate: a fixed table of
//! descriptors produces bound callables per session context. No dynamic
//! descriptor mutation happens after build; the same descriptor set always
//! yields the same method names.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use wd_protocol::{CommandDescriptor, Dialect, HttpVerb, registry};
use wd_runtime::error::{Error, Result};

use crate::session::SessionInner;

/// One generated command bound to a session context.
///
/// Bound callables are generated fresh per session: the URL template is
/// resolved against that session's endpoint and id, so two sessions never
/// share callables.
#[derive(Clone)]
pub struct BoundCommand {
    descriptor: &'static CommandDescriptor,
    inner: Arc<SessionInner>,
}

impl BoundCommand {
    pub fn descriptor(&self) -> &'static CommandDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Validates `args` against the descriptor schema, partitions them into
    /// URL-path substitutions and body fields, and delegates to the request
    /// executor.
    pub async fn invoke(&self, args: Value) -> Result<Value> {
        let args = match args {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::invalid_parameter(
                    "arguments",
                    format!("expected a JSON object, got {other}"),
                ));
            }
        };
        let (path_params, body) = self.partition(args)?;
        self.inner
            .executor
            .execute(self.descriptor.verb, self.descriptor.path, &path_params, body)
            .await
    }

    fn partition(
        &self,
        mut args: Map<String, Value>,
    ) -> Result<(Map<String, Value>, Option<Value>)> {
        let mut path_params = Map::new();
        // sessionId comes from the session context, never from the caller.
        path_params.insert(
            "sessionId".to_string(),
            Value::String(self.inner.context.session_id.clone()),
        );

        for variable in self.descriptor.path_variables() {
            if variable == "sessionId" {
                continue;
            }
            let value = args.remove(variable).ok_or_else(|| {
                Error::invalid_parameter(variable, "required path segment is missing")
            })?;
            if !(value.is_string() || value.is_number()) {
                return Err(Error::invalid_parameter(
                    variable,
                    "path segment must be a string or number",
                ));
            }
            path_params.insert(variable.to_string(), value);
        }

        for param in self.descriptor.params {
            match args.get(param.name) {
                Some(value) => {
                    if !param.kind.matches(value) {
                        return Err(Error::invalid_parameter(
                            param.name,
                            format!("expected {}", param.kind.expectation()),
                        ));
                    }
                }
                None if param.required => {
                    return Err(Error::invalid_parameter(
                        param.name,
                        "required parameter is missing",
                    ));
                }
                None => {}
            }
        }

        if let Some(unknown) = args.keys().find(|k| self.descriptor.find_param(k).is_none()) {
            return Err(Error::invalid_parameter(
                unknown.clone(),
                format!("unknown parameter for command {:?}", self.descriptor.name),
            ));
        }

        // W3C requires a body on POST, so an empty object is sent when the
        // command defines no parameters.
        let body = match self.descriptor.verb {
            HttpVerb::Post => Some(Value::Object(args)),
            HttpVerb::Get | HttpVerb::Delete => None,
        };
        Ok((path_params, body))
    }
}

/// Mapping from method name to bound callable for one session.
///
/// Fixed after build and thereafter read-only, so concurrent invocation of
/// different commands through the same surface is safe.
pub struct CommandSurface {
    commands: HashMap<&'static str, BoundCommand>,
}

impl CommandSurface {
    /// Selects the descriptor subset for `dialect` and binds one callable
    /// per entry. Later layers override earlier ones on name collision.
    pub fn build(dialect: Dialect, inner: &Arc<SessionInner>) -> Self {
        let mut commands = HashMap::new();
        for set in registry::surface_sets(dialect) {
            for descriptor in set {
                commands.insert(
                    descriptor.name,
                    BoundCommand {
                        descriptor,
                        inner: Arc::clone(inner),
                    },
                );
            }
        }
        debug!(?dialect, commands = commands.len(), "command surface built");
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&BoundCommand> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Method names, sorted for deterministic listing.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
