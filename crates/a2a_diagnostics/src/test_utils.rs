use std::sync::{Arc, Mutex};
use std::time::Duration;

use a2a_domain::{DiagnosticsConfig, HttpResponse, HttpService};
use serde_json::Value;

use crate::Diagnostics;

/// Records every call and answers from canned values. A missing canned
/// value behaves like a refused connection.
#[derive(Default)]
pub struct MockHttp {
    pub response: Option<HttpResponse>,
    pub stream_error: Option<String>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl MockHttp {
    pub fn responding(response: HttpResponse) -> Self {
        Self { response: Some(response), ..Default::default() }
    }

    pub fn failing_streams(reason: &str) -> Self {
        Self { stream_error: Some(reason.to_string()), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn stream_result(&self) -> anyhow::Result<()> {
        match &self.stream_error {
            Some(reason) => Err(anyhow::anyhow!(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl HttpService for MockHttp {
    async fn get(&self, url: &str, _timeout: Duration) -> anyhow::Result<HttpResponse> {
        self.record(format!("GET {url}"));
        self.response
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn open_event_stream(&self, url: &str, _timeout: Duration) -> anyhow::Result<()> {
        self.record(format!("SSE {url}"));
        self.stream_result()
    }

    async fn post_event_stream(
        &self,
        url: &str,
        body: &Value,
        _timeout: Duration,
    ) -> anyhow::Result<()> {
        self.record(format!("POST {url}"));
        self.bodies.lock().unwrap().push(body.clone());
        self.stream_result()
    }
}

/// Never answers, so every call runs into the caller's timeout.
pub struct PendingHttp;

#[async_trait::async_trait]
impl HttpService for PendingHttp {
    async fn get(&self, _url: &str, _timeout: Duration) -> anyhow::Result<HttpResponse> {
        std::future::pending().await
    }

    async fn open_event_stream(&self, _url: &str, _timeout: Duration) -> anyhow::Result<()> {
        std::future::pending().await
    }

    async fn post_event_stream(
        &self,
        _url: &str,
        _body: &Value,
        _timeout: Duration,
    ) -> anyhow::Result<()> {
        std::future::pending().await
    }
}

/// Builds diagnostics around the mock, returning both so tests can inspect
/// recorded calls.
pub fn diagnostics_with(mock: MockHttp) -> (Diagnostics, Arc<MockHttp>) {
    let mock = Arc::new(mock);
    let diagnostics = Diagnostics::new(
        DiagnosticsConfig::default(),
        Some(mock.clone() as Arc<dyn HttpService>),
    );
    (diagnostics, mock)
}
