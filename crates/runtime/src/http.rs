//! HTTP transport seam.
//!
//! The executor talks to the wire through the object-safe [`HttpClient`]
//! trait so tests can substitute a scripted transport. The production
//! implementation wraps a shared `reqwest` client with the per-session
//! request timeout applied.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::Value;

use wd_protocol::HttpVerb;

use crate::error::{Error, Result};

/// One wire request: verb, fully-resolved URL, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub verb: HttpVerb,
    pub url: String,
    pub body: Option<Value>,
}

/// Raw wire response, before protocol translation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Network-level failure reported by a transport.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub message: String,
    /// Connection refused/reset and timeouts are transient and eligible
    /// for retry; anything else propagates immediately.
    pub transient: bool,
}

/// Boxed future returned by [`HttpClient::send`].
pub type SendFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<HttpResponse, TransportFailure>> + Send + 'a>>;

/// Object-safe HTTP transport.
pub trait HttpClient: Send + Sync {
    /// Sends one request and resolves with the raw response.
    fn send(&self, request: HttpRequest) -> SendFuture<'_>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Builds a client with the per-session request timeout applied.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn send(&self, request: HttpRequest) -> SendFuture<'_> {
        Box::pin(async move {
            let mut builder = match request.verb {
                HttpVerb::Get => self.client.get(&request.url),
                HttpVerb::Post => self.client.post(&request.url),
                HttpVerb::Delete => self.client.delete(&request.url),
            };
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }
            let response = builder.send().await.map_err(from_reqwest)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(from_reqwest)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn from_reqwest(error: reqwest::Error) -> TransportFailure {
    TransportFailure {
        transient: error.is_timeout() || error.is_connect(),
        message: error.to_string(),
    }
}
