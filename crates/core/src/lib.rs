//! wd - a wire-protocol client for browser and mobile automation servers.
//!
//! Speaks W3C WebDriver, the legacy JSON Wire Protocol, the Mobile JSON
//! Wire Protocol, and Appium's vendor commands over plain HTTP. The dialect
//! is negotiated once per session from the server's creation response, and
//! the session handle exposes exactly the commands that dialect supports.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │            Client            │  composed handle: extensions,
//! │  (compose / recompose)       │  wrapper, result transform
//! └──────────────┬───────────────┘
//!                │ execute(name, args)
//! ┌──────────────▼───────────────┐
//! │        CommandSurface        │  descriptor tables bound to
//! │   (wd-protocol descriptors)  │  one session context
//! └──────────────┬───────────────┘
//!                │ one HTTP request per invocation
//! ┌──────────────▼───────────────┐
//! │       RequestExecutor        │  URL templates, retry/backoff,
//! │         (wd-runtime)         │  envelope translation
//! └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//!
//! # async fn run() -> wd::Result<()> {
//! let mut options = wd::SessionOptions::default();
//! options.capabilities = json!({"browserName": "firefox"});
//!
//! let client = wd::new_session(options).await?;
//! client.execute("navigateTo", json!({"url": "https://example.com"})).await?;
//! client.end().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde_json::Map;
use tracing::{debug, info};

use wd_protocol::HttpVerb;
use wd_runtime::http::{HttpClient, ReqwestHttpClient};
use wd_runtime::request::{RequestExecutor, RetryPolicy};

pub mod capabilities;
pub mod compose;
pub mod session;
pub mod surface;

pub use wd_protocol as protocol;
pub use wd_runtime as runtime;

pub use compose::{
    Client, CommandFuture, CommandWrapper, Compose, ContextModifier, ExtensionFn, NextFn,
    ResultTransform,
};
pub use session::{AttachOptions, SessionContext};
pub use surface::{BoundCommand, CommandSurface};
pub use wd_protocol::{Dialect, RequestedCapabilities, W3cCapabilities};
pub use wd_runtime::config::{LogLevel, SessionOptions};
pub use wd_runtime::error::{Error, Result};

/// Creates a new remote session with no composed behavior.
pub async fn new_session(options: SessionOptions) -> Result<Client> {
    new_session_with(options, Compose::new()).await
}

/// Creates a new remote session, layering `compose` onto the handle.
///
/// Validates the options and negotiates both capability shapes before any
/// network call, then issues one `POST /session` carrying both shapes. The
/// responding server's answer fixes the session's dialect and command
/// surface for its lifetime.
pub async fn new_session_with(options: SessionOptions, compose: Compose) -> Result<Client> {
    options.validate()?;
    let http = Arc::new(ReqwestHttpClient::new(options.request_timeout())?);
    new_session_with_client(options, compose, http).await
}

/// Same as [`new_session_with`], over a caller-supplied transport.
pub async fn new_session_with_client(
    options: SessionOptions,
    compose: Compose,
    http: Arc<dyn HttpClient>,
) -> Result<Client> {
    options.validate()?;
    let requested = capabilities::negotiate(&options.capabilities)?;
    let executor = RequestExecutor::new(options.endpoint(), http, retry_policy(&options));

    debug!(endpoint = %options.endpoint(), "creating session");
    let envelope = executor
        .execute_raw(
            HttpVerb::Post,
            "/session",
            &Map::new(),
            Some(requested.session_request_body()),
        )
        .await?;

    let context = session::context_from_response(options, requested, &envelope)?;
    info!(
        session_id = %context.session_id,
        dialect = ?context.dialect,
        "session created"
    );
    Ok(Client::assemble(context, executor, compose))
}

/// Attaches to an already-running remote session without any network call.
///
/// The dialect comes from [`AttachOptions`], not from negotiation, so the
/// caller must know which dialect the session was created under.
pub fn attach_to_session(attach: AttachOptions, compose: Compose) -> Result<Client> {
    attach.options.validate()?;
    let http = Arc::new(ReqwestHttpClient::new(attach.options.request_timeout())?);
    attach_to_session_with_client(attach, compose, http)
}

/// Same as [`attach_to_session`], over a caller-supplied transport.
pub fn attach_to_session_with_client(
    attach: AttachOptions,
    compose: Compose,
    http: Arc<dyn HttpClient>,
) -> Result<Client> {
    attach.options.validate()?;
    if attach.session_id.is_empty() {
        return Err(Error::configuration(
            "cannot attach to a session without a session id",
        ));
    }

    let requested = capabilities::negotiate(&attach.options.capabilities)?;
    let executor = RequestExecutor::new(
        attach.options.endpoint(),
        http,
        retry_policy(&attach.options),
    );
    let context = SessionContext {
        session_id: attach.session_id,
        dialect: attach.dialect,
        capabilities: attach.options.capabilities.clone(),
        requested,
        options: attach.options,
    };
    info!(
        session_id = %context.session_id,
        dialect = ?context.dialect,
        "attached to session"
    );
    Ok(Client::assemble(context, executor, compose))
}

fn retry_policy(options: &SessionOptions) -> RetryPolicy {
    RetryPolicy {
        max_attempts: options.max_attempts(),
        ..RetryPolicy::default()
    }
}
