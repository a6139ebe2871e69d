use std::time::Duration;

use a2a_domain::{HttpResponse, HttpService};
use anyhow::Context;
use futures::StreamExt;
use reqwest::{Client, RequestBuilder};
use reqwest_eventsource::{Error as EventSourceError, Event, EventSource};
use serde_json::Value;
use tracing::debug;

/// [`HttpService`] backed by `reqwest`, with `reqwest-eventsource` for the
/// streaming probes.
#[derive(Debug, Clone)]
pub struct ReqwestHttpService {
    client: Client,
}

impl ReqwestHttpService {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("a2a/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpService for ReqwestHttpService {
    async fn get(&self, url: &str, timeout: Duration) -> anyhow::Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        Ok(HttpResponse { status, body })
    }

    async fn open_event_stream(&self, url: &str, timeout: Duration) -> anyhow::Result<()> {
        let request = self.client.get(url);
        await_stream_open(url, request, timeout).await
    }

    async fn post_event_stream(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> anyhow::Result<()> {
        let request = self.client.post(url).json(body);
        await_stream_open(url, request, timeout).await
    }
}

/// Waits for the first item of an event stream and closes it. The stream
/// counts as open once the server answers with an event-stream response.
/// `EventSource` adds the `Accept: text/event-stream` header itself.
async fn await_stream_open(
    url: &str,
    request: RequestBuilder,
    timeout: Duration,
) -> anyhow::Result<()> {
    let mut source = EventSource::new(request)
        .map_err(|e| anyhow::anyhow!("Cannot build event stream request for {url}: {e:?}"))?;

    debug!(url = %url, timeout = ?timeout, "Opening event stream");
    let first = tokio::time::timeout(timeout, source.next()).await;
    source.close();

    match first {
        Err(_) => anyhow::bail!("no response within {:.1}s", timeout.as_secs_f64()),
        Ok(None) => anyhow::bail!("event stream closed before opening"),
        Ok(Some(Ok(Event::Open))) | Ok(Some(Ok(Event::Message(_)))) => Ok(()),
        Ok(Some(Err(error))) => Err(describe(error)),
    }
}

fn describe(error: EventSourceError) -> anyhow::Error {
    match error {
        EventSourceError::InvalidStatusCode(status, _) => {
            anyhow::anyhow!("server answered with status {status}")
        }
        EventSourceError::InvalidContentType(content_type, _) => anyhow::anyhow!(
            "server answered with content type {} instead of an event stream",
            content_type.to_str().unwrap_or("<binary>")
        ),
        EventSourceError::Transport(error) => anyhow::anyhow!("connection failed: {error}"),
        other => anyhow::anyhow!("{other}"),
    }
}
