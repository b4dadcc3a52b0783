//! wd runtime - request execution infrastructure.
//!
//! This crate provides the low-level machinery for talking to an
//! automation-protocol server over HTTP:
//!
//! - **Configuration**: typed session options with synchronous validation
//! - **Transport**: the [`HttpClient`] seam plus the `reqwest`-backed
//!   production implementation
//! - **Executor**: URL-template resolution, bounded exponential backoff,
//!   response-envelope translation into typed results or errors
//! - **Errors**: the taxonomy shared by every layer above
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    wd-rs    │  Session handles, command surface
//! └──────┬──────┘
//!        │ RequestExecutor::execute
//! ┌──────▼──────┐
//! │  wd-runtime │  This crate
//! │  ┌────────┐ │
//! │  │ Exec   │ │  Retry / translate
//! │  └────────┘ │
//! │  ┌────────┐ │
//! │  │ Http   │ │  reqwest (or a test double)
//! │  └────────┘ │
//! └─────────────┘
//! ```
//!
//! The transport sits behind the object-safe [`HttpClient`] trait so tests
//! can substitute a scripted wire without a server.

pub mod config;
pub mod error;
pub mod http;
pub mod request;

// Re-export key types at crate root
pub use config::{LogLevel, SessionOptions};
pub use error::{Error, Result};
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient, TransportFailure};
pub use request::{RequestExecutor, RetryPolicy};
