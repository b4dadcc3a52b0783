//! Request executor: URL resolution, retry policy, response translation.
//!
//! One command invocation maps to exactly one [`RequestExecutor::execute`]
//! call, which resolves the URL template against a session-scoped base URL,
//! sends the request (retrying transient failures with bounded exponential
//! backoff), and translates the response into an unwrapped success value or
//! a typed error.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use wd_protocol::HttpVerb;

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Bounded exponential backoff over transient failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempt ceiling, initial call included.
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub backoff_cap: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_millis(250),
            backoff_cap: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.backoff_base.saturating_mul(factor).min(self.backoff_cap)
    }
}

/// Server statuses retried under the backoff policy. Every other HTTP
/// outcome is a definitive server decision and surfaces immediately.
const TRANSIENT_STATUSES: [u16; 3] = [502, 503, 504];

/// Builds and sends one HTTP request per command invocation against a
/// session-scoped base URL.
///
/// Holds no mutable state; shared between handles via the session context.
pub struct RequestExecutor {
    base_url: String,
    http: Arc<dyn HttpClient>,
    retry: RetryPolicy,
}

impl RequestExecutor {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>, retry: RetryPolicy) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            retry,
        }
    }

    /// Base URL every command path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a command and unwraps the `value` envelope.
    pub async fn execute(
        &self,
        verb: HttpVerb,
        template: &str,
        path_params: &Map<String, Value>,
        body: Option<Value>,
    ) -> Result<Value> {
        let envelope = self.execute_raw(verb, template, path_params, body).await?;
        Ok(envelope.get("value").cloned().unwrap_or(Value::Null))
    }

    /// Executes a command and returns the full response body.
    ///
    /// Session creation needs the envelope itself: legacy servers report
    /// `sessionId` beside `value`, not inside it.
    pub async fn execute_raw(
        &self,
        verb: HttpVerb,
        template: &str,
        path_params: &Map<String, Value>,
        body: Option<Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, resolve_template(template, path_params)?);
        debug!(verb = verb.as_str(), %url, "COMMAND");
        if let Some(data) = &body {
            debug!(%data, "DATA");
        }

        let mut attempt = 0u32;
        let response = loop {
            attempt += 1;
            let request = HttpRequest {
                verb,
                url: url.clone(),
                body: body.clone(),
            };
            match self.http.send(request).await {
                Ok(response)
                    if TRANSIENT_STATUSES.contains(&response.status)
                        && attempt < self.retry.max_attempts =>
                {
                    warn!(status = response.status, attempt, "transient server status, retrying");
                    tokio::time::sleep(self.retry.backoff(attempt)).await;
                }
                Ok(response) => break response,
                Err(failure) if failure.transient && attempt < self.retry.max_attempts => {
                    warn!(error = %failure.message, attempt, "transient transport failure, retrying");
                    tokio::time::sleep(self.retry.backoff(attempt)).await;
                }
                Err(failure) => {
                    return Err(Error::Transport {
                        message: failure.message,
                        attempts: attempt,
                    });
                }
            }
        };

        translate_response(response)
    }
}

/// Substitutes every named `{segment}` of the URL template.
///
/// Fails with [`Error::InvalidParameter`] if a segment has no value, so no
/// literal placeholder can ever reach the wire.
pub fn resolve_template(template: &str, params: &Map<String, Value>) -> Result<String> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        resolved.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(Error::configuration(format!(
                "malformed URL template: {template}"
            )));
        };
        let name = &after[..end];
        let value = params.get(name).ok_or_else(|| {
            Error::invalid_parameter(name, "required path segment has no value")
        })?;
        match value {
            Value::String(s) => resolved.push_str(s),
            Value::Number(n) => resolved.push_str(&n.to_string()),
            _ => {
                return Err(Error::invalid_parameter(
                    name,
                    "path segment must be a string or number",
                ));
            }
        }
        rest = &after[end + 1..];
    }
    resolved.push_str(rest);
    Ok(resolved)
}

/// Maps a raw response onto the full parsed envelope or a typed error.
fn translate_response(response: HttpResponse) -> Result<Value> {
    let HttpResponse { status, body } = response;
    let parsed: Value = serde_json::from_str(&body).map_err(|_| Error::Protocol {
        name: "unknown error".to_string(),
        message: format!("malformed response body: {}", truncate(&body, 256)),
        status,
        stacktrace: None,
    })?;

    if let Some(error) = error_envelope(status, &parsed) {
        debug!(%error, "ERROR");
        return Err(error);
    }

    debug!(result = %parsed, "RESULT");
    Ok(parsed)
}

/// Detects the error envelope of either dialect, in priority order:
/// the W3C shape (`value.error` + `value.message`), the JSONWP non-zero
/// top-level `status`, then any remaining non-2xx HTTP status.
fn error_envelope(status: u16, body: &Value) -> Option<Error> {
    let value = body.get("value");

    if let Some(value) = value
        && let (Some(name), Some(message)) = (
            value.get("error").and_then(Value::as_str),
            value.get("message").and_then(Value::as_str),
        )
    {
        return Some(Error::Protocol {
            name: name.to_string(),
            message: message.to_string(),
            status,
            stacktrace: value
                .get("stacktrace")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }

    if let Some(code) = body.get("status").and_then(Value::as_u64)
        && code != 0
    {
        let message = value
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Some(Error::Protocol {
            name: jsonwp_error_name(code).to_string(),
            message,
            status,
            stacktrace: None,
        });
    }

    if !(200..300).contains(&status) {
        return Some(Error::Protocol {
            name: "unknown error".to_string(),
            message: format!("unexpected HTTP status {status}"),
            status,
            stacktrace: None,
        });
    }

    None
}

/// JSON Wire Protocol numeric status codes to their standard error names.
fn jsonwp_error_name(code: u64) -> &'static str {
    match code {
        6 => "invalid session id",
        7 => "no such element",
        8 => "no such frame",
        9 => "unknown command",
        10 => "stale element reference",
        11 => "element not visible",
        12 => "invalid element state",
        13 => "unknown error",
        15 => "element is not selectable",
        17 => "javascript error",
        19 => "invalid selector",
        21 => "timeout",
        23 => "no such window",
        24 => "invalid cookie domain",
        25 => "unable to set cookie",
        26 => "unexpected alert open",
        27 => "no such alert",
        28 => "script timeout",
        29 => "invalid element coordinates",
        32 => "invalid selector",
        33 => "session not created",
        34 => "move target out of bounds",
        _ => "unknown error",
    }
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{SendFuture, TransportFailure};
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type WireOutcome = std::result::Result<HttpResponse, TransportFailure>;

    /// Scripted transport recording every request it is handed.
    struct MockHttp {
        responses: Mutex<VecDeque<WireOutcome>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockHttp {
        fn new(responses: Vec<WireOutcome>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn ok(body: &str) -> WireOutcome {
            Ok(HttpResponse {
                status: 200,
                body: body.to_string(),
            })
        }

        fn status(status: u16, body: &str) -> WireOutcome {
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            })
        }

        fn refused() -> WireOutcome {
            Err(TransportFailure {
                message: "connection refused".to_string(),
                transient: true,
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl HttpClient for MockHttp {
        fn send(&self, request: HttpRequest) -> SendFuture<'_> {
            self.requests.lock().unwrap().push(request);
            let outcome = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| MockHttp::ok(r#"{"value": null}"#));
            Box::pin(async move { outcome })
        }
    }

    fn executor(http: &Arc<MockHttp>) -> RequestExecutor {
        let retry = RetryPolicy {
            max_attempts: 3,
            backoff_base: Duration::from_millis(1),
            backoff_cap: Duration::from_millis(4),
        };
        RequestExecutor::new("http://localhost:4444", Arc::clone(http) as Arc<dyn HttpClient>, retry)
    }

    fn path_params(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_resolve_template_substitutes_all_segments() {
        let params = path_params(&[("sessionId", "abc"), ("elementId", "el-1")]);
        let resolved =
            resolve_template("/session/{sessionId}/element/{elementId}/click", &params).unwrap();
        assert_eq!(resolved, "/session/abc/element/el-1/click");
        assert!(!resolved.contains('{'));
    }

    #[test]
    fn test_resolve_template_missing_segment() {
        let params = path_params(&[("sessionId", "abc")]);
        let error =
            resolve_template("/session/{sessionId}/element/{elementId}/click", &params)
                .unwrap_err();
        match error {
            Error::InvalidParameter { parameter, .. } => assert_eq!(parameter, "elementId"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_unwraps_value_envelope() {
        let http = MockHttp::new(vec![MockHttp::ok(r#"{"value": "https://example.com"}"#)]);
        let value = executor(&http)
            .execute(
                HttpVerb::Get,
                "/session/{sessionId}/url",
                &path_params(&[("sessionId", "abc")]),
                None,
            )
            .await
            .unwrap();
        assert_eq!(value, json!("https://example.com"));
        assert_eq!(http.request_count(), 1);
        let request = http.requests.lock().unwrap()[0].clone();
        assert_eq!(request.verb, HttpVerb::Get);
        assert_eq!(request.url, "http://localhost:4444/session/abc/url");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_missing_path_segment_sends_nothing() {
        let http = MockHttp::new(vec![]);
        let error = executor(&http)
            .execute(
                HttpVerb::Get,
                "/session/{sessionId}/url",
                &Map::new(),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(error, Error::InvalidParameter { .. }));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_transient_failures_retried_until_success() {
        let http = MockHttp::new(vec![
            MockHttp::refused(),
            MockHttp::refused(),
            MockHttp::ok(r#"{"value": 42}"#),
        ]);
        let value = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap();
        assert_eq!(value, json!(42));
        assert_eq!(http.request_count(), 3);
    }

    #[tokio::test]
    async fn test_retry_budget_exhausted() {
        let http = MockHttp::new(vec![
            MockHttp::refused(),
            MockHttp::refused(),
            MockHttp::refused(),
        ]);
        let error = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap_err();
        match error {
            Error::Transport { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("expected Transport, got {other:?}"),
        }
        assert_eq!(http.request_count(), 3);
    }

    #[tokio::test]
    async fn test_non_transient_failure_not_retried() {
        let http = MockHttp::new(vec![Err(TransportFailure {
            message: "invalid TLS certificate".to_string(),
            transient: false,
        })]);
        let error = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap_err();
        match error {
            Error::Transport { attempts, .. } => assert_eq!(attempts, 1),
            other => panic!("expected Transport, got {other:?}"),
        }
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_transient_server_status_retried() {
        let http = MockHttp::new(vec![
            MockHttp::status(503, "busy"),
            MockHttp::ok(r#"{"value": null}"#),
        ]);
        executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap();
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn test_client_error_status_not_retried() {
        let http = MockHttp::new(vec![MockHttp::status(
            404,
            r#"{"value": {"error": "no such element", "message": "not found"}}"#,
        )]);
        let error = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap_err();
        assert_eq!(error.protocol_error_name(), Some("no such element"));
        assert_eq!(error.http_status(), Some(404));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_w3c_error_envelope_on_success_status() {
        let http = MockHttp::new(vec![MockHttp::ok(
            r#"{"value": {"error": "stale element reference", "message": "gone", "stacktrace": "at foo"}}"#,
        )]);
        let error = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap_err();
        match error {
            Error::Protocol {
                name, stacktrace, ..
            } => {
                assert_eq!(name, "stale element reference");
                assert_eq!(stacktrace.as_deref(), Some("at foo"));
            }
            other => panic!("expected Protocol, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_jsonwp_status_code_translated() {
        let http = MockHttp::new(vec![MockHttp::status(
            500,
            r#"{"status": 7, "value": {"message": "Unable to locate element"}}"#,
        )]);
        let error = executor(&http)
            .execute(HttpVerb::Post, "/session/{sessionId}/element",
                &path_params(&[("sessionId", "abc")]),
                Some(json!({"using": "css selector", "value": "#missing"})),
            )
            .await
            .unwrap_err();
        assert_eq!(error.protocol_error_name(), Some("no such element"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_protocol_error() {
        let http = MockHttp::new(vec![MockHttp::ok("<html>proxy error</html>")]);
        let error = executor(&http)
            .execute(HttpVerb::Get, "/status", &Map::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Protocol { .. }));
    }

    #[test]
    fn test_backoff_is_bounded() {
        let retry = RetryPolicy {
            max_attempts: 10,
            backoff_base: Duration::from_millis(250),
            backoff_cap: Duration::from_secs(5),
        };
        assert_eq!(retry.backoff(1), Duration::from_millis(250));
        assert_eq!(retry.backoff(2), Duration::from_millis(500));
        assert_eq!(retry.backoff(3), Duration::from_secs(1));
        assert_eq!(retry.backoff(8), Duration::from_secs(5));
    }
}
