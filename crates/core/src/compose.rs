//! Session composition.
//!
//! A [`Client`] is an immutable-shaped handle assembled from session state,
//! the generated command surface, and caller-supplied behavior. Layering
//! more behavior never mutates an existing handle: [`Client::recompose`]
//! returns a new handle that shares the underlying request machinery by
//! `Arc`, so both act on the same remote session.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use wd_protocol::{Dialect, RequestedCapabilities};
use wd_runtime::config::SessionOptions;
use wd_runtime::error::{Error, Result};
use wd_runtime::request::RequestExecutor;

use crate::session::{SessionContext, SessionInner};
use crate::surface::CommandSurface;

/// Boxed future returned by commands and extensions.
pub type CommandFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// Caller-supplied extension method. Receives a handle clone and the call
/// arguments; may invoke other commands through the handle.
pub type ExtensionFn = Arc<dyn Fn(Client, Value) -> CommandFuture + Send + Sync>;

/// Transformer applied to every generated command's successful result.
pub type ResultTransform = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// Continuation handed to a command wrapper: runs the underlying command
/// with the (possibly adjusted) arguments.
pub type NextFn = Box<dyn FnOnce(Value) -> CommandFuture + Send>;

/// Wrapper around every generated command invocation.
pub type CommandWrapper = Arc<dyn Fn(&'static str, Value, NextFn) -> CommandFuture + Send + Sync>;

/// One-shot adjustment of the session context, applied once before the
/// handle is assembled at creation/attachment time.
pub type ContextModifier = Box<dyn FnOnce(&mut SessionContext) + Send>;

/// Behavior layered onto a session at composition time.
#[derive(Default)]
pub struct Compose {
    pub(crate) extensions: HashMap<String, ExtensionFn>,
    pub(crate) transform: Option<ResultTransform>,
    pub(crate) wrapper: Option<CommandWrapper>,
    pub(crate) modifier: Option<ContextModifier>,
}

impl Compose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension method. Extensions take precedence over
    /// generated commands when names collide - an explicit override.
    pub fn with_extension(mut self, name: impl Into<String>, f: ExtensionFn) -> Self {
        self.extensions.insert(name.into(), f);
        self
    }

    /// Sets the result transformer for generated commands.
    pub fn with_transform(mut self, transform: ResultTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets the wrapper applied around every generated command invocation.
    pub fn with_wrapper(mut self, wrapper: CommandWrapper) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    /// Sets the one-shot context modifier. Only meaningful at session
    /// creation/attachment; ignored by [`Client::recompose`], where the
    /// context is already fixed.
    pub fn with_modifier(mut self, modifier: ContextModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// Composed, caller-facing session handle.
///
/// Cheap to clone; all shared state sits behind `Arc` and is read-only
/// after composition.
#[derive(Clone)]
pub struct Client {
    inner: Arc<SessionInner>,
    surface: Arc<CommandSurface>,
    extensions: Arc<HashMap<String, ExtensionFn>>,
    transform: Option<ResultTransform>,
    wrapper: Option<CommandWrapper>,
}

impl Client {
    /// Assembles a handle from freshly-established session state.
    pub(crate) fn assemble(
        mut context: SessionContext,
        executor: RequestExecutor,
        mut compose: Compose,
    ) -> Client {
        if let Some(modifier) = compose.modifier.take() {
            modifier(&mut context);
        }
        let dialect = context.dialect;
        let inner = Arc::new(SessionInner { context, executor });
        let surface = Arc::new(CommandSurface::build(dialect, &inner));
        Client {
            inner,
            surface,
            extensions: Arc::new(compose.extensions),
            transform: compose.transform,
            wrapper: compose.wrapper,
        }
    }

    /// Re-derives a new handle layering additional behavior over this one.
    ///
    /// The new handle shares this session's context, command surface, and
    /// request machinery; added extensions override same-named existing
    /// ones, and an unset transformer/wrapper is inherited. This handle is
    /// left untouched.
    pub fn recompose(&self, mut compose: Compose) -> Client {
        let mut extensions: HashMap<String, ExtensionFn> = (*self.extensions).clone();
        for (name, extension) in compose.extensions.drain() {
            extensions.insert(name, extension);
        }
        Client {
            inner: Arc::clone(&self.inner),
            surface: Arc::clone(&self.surface),
            extensions: Arc::new(extensions),
            transform: compose.transform.or_else(|| self.transform.clone()),
            wrapper: compose.wrapper.or_else(|| self.wrapper.clone()),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.inner.context.session_id
    }

    pub fn dialect(&self) -> Dialect {
        self.inner.context.dialect
    }

    /// Canonical capabilities as negotiated with the server.
    pub fn capabilities(&self) -> &Value {
        &self.inner.context.capabilities
    }

    /// Both capability shapes as originally requested.
    pub fn requested_capabilities(&self) -> &RequestedCapabilities {
        &self.inner.context.requested
    }

    pub fn options(&self) -> &SessionOptions {
        &self.inner.context.options
    }

    /// The generated command surface (extensions excluded).
    pub fn surface(&self) -> &CommandSurface {
        &self.surface
    }

    /// Returns true if the handle can resolve `name`, either as an
    /// extension or as a generated command.
    pub fn has_command(&self, name: &str) -> bool {
        self.extensions.contains_key(name) || self.surface.contains(name)
    }

    /// All resolvable command names, extensions included, sorted.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .surface
            .names()
            .into_iter()
            .map(str::to_string)
            .chain(self.extensions.keys().cloned())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Invokes a command by name.
    ///
    /// Extensions take precedence over generated commands. An unknown name
    /// fails with [`Error::CommandNotFound`] - a caller-level condition,
    /// never a protocol error.
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        if let Some(extension) = self.extensions.get(name) {
            debug!(command = name, "invoking extension");
            return extension(self.clone(), args).await;
        }

        let Some(command) = self.surface.get(name) else {
            return Err(Error::CommandNotFound(name.to_string()));
        };

        let result = match &self.wrapper {
            Some(wrapper) => {
                let bound = command.clone();
                let next: NextFn =
                    Box::new(move |args| Box::pin(async move { bound.invoke(args).await }));
                wrapper(command.name(), args, next).await?
            }
            None => command.invoke(args).await?,
        };

        Ok(match &self.transform {
            Some(transform) => transform(name, result),
            None => result,
        })
    }

    /// Terminates the remote session via the dialect's `deleteSession`.
    pub async fn end(&self) -> Result<Value> {
        self.execute("deleteSession", Value::Null).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("session_id", &self.session_id())
            .field("dialect", &self.dialect())
            .field("commands", &self.surface.len())
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
