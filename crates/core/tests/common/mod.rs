//! Shared test transport: a scripted wire that records every request.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use wd::runtime::http::{HttpClient, HttpRequest, HttpResponse, SendFuture, TransportFailure};

pub type WireOutcome = Result<HttpResponse, TransportFailure>;

pub struct MockHttp {
    responses: Mutex<VecDeque<WireOutcome>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttp {
    pub fn new(responses: Vec<WireOutcome>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &str) -> WireOutcome {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
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
