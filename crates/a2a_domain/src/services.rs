use std::time::Duration;

use serde_json::Value;

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl ToString) -> Self {
        Self { status, body: body.to_string() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP access used by the probes. Implementations must bound every call by
/// the given timeout.
#[async_trait::async_trait]
pub trait HttpService: Send + Sync {
    /// Performs a GET and returns the status with the full body.
    async fn get(&self, url: &str, timeout: Duration) -> anyhow::Result<HttpResponse>;

    /// Opens an event stream with a GET and succeeds once the server has
    /// accepted it.
    async fn open_event_stream(&self, url: &str, timeout: Duration) -> anyhow::Result<()>;

    /// POSTs `body` as JSON, asking for an event stream in response, and
    /// succeeds once the server has accepted it.
    async fn post_event_stream(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> anyhow::Result<()>;
}
