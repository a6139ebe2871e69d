use std::time::Duration;

use a2a_domain::{
    ConnectionContext, EndpointSource, InvalidInput, ProbeResult, ProbeTimeout, ResolvedEndpoint,
    SseProbe,
};
use serde_json::{json, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::resolver::{resolve_rpc, resolve_sse};
use crate::Diagnostics;

/// JSON-RPC request used to check that the agent accepts a streaming task.
pub fn send_subscribe_request(text: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": Uuid::new_v4().to_string(),
        "method": "tasks/sendSubscribe",
        "params": {
            "id": Uuid::new_v4().to_string(),
            "message": {
                "role": "user",
                "parts": [{"type": "text", "text": text}]
            }
        }
    })
}

impl Diagnostics {
    /// Checks whether an SSE endpoint is available. Without a base URL the
    /// result is always [`ProbeResult::NotConfigured`].
    ///
    /// A streaming transport that already knows its endpoint is trusted
    /// without any network call. Otherwise the endpoint derived from the base
    /// URL is opened once, bounded by `timeout` (seconds, as typed by the
    /// user). An unusable timeout falls back to the configured default and is
    /// reported in the result.
    pub async fn probe_sse(&self, context: &ConnectionContext, timeout: Option<&str>) -> SseProbe {
        let timeout = ProbeTimeout::parse(timeout, self.config().default_sse_timeout);
        if let Some(invalid) = &timeout.invalid {
            warn!(value = %invalid, fallback = ?timeout.duration, "Invalid timeout value");
        }

        // Network probes only run against a configured server, and a
        // streaming handle without one is not trusted either.
        let resolved = if context.is_configured() { resolve_sse(context) } else { None };
        let result = match resolved {
            Some(endpoint) if endpoint.source == EndpointSource::Transport => {
                ProbeResult::resolved(endpoint)
            }
            Some(endpoint) => self.open_stream(endpoint, timeout.duration).await,
            None => ProbeResult::NotConfigured,
        };

        SseProbe { timeout: timeout.duration, invalid_timeout: timeout.invalid, result }
    }

    async fn open_stream(&self, endpoint: ResolvedEndpoint, timeout: Duration) -> ProbeResult {
        let Some(http) = self.http() else {
            return ProbeResult::unreachable(format!(
                "HTTP client unavailable, cannot probe {}",
                endpoint.url
            ));
        };

        debug!(url = %endpoint.url, "Probing SSE endpoint");
        match tokio::time::timeout(timeout, http.open_event_stream(&endpoint.url, timeout)).await {
            Ok(Ok(())) => ProbeResult::resolved(endpoint),
            Ok(Err(error)) => ProbeResult::unreachable(format!("{error:#}")),
            Err(_) => ProbeResult::unreachable(format!(
                "no response within {:.1}s",
                timeout.as_secs_f64()
            )),
        }
    }

    /// Sends a single `tasks/sendSubscribe` request carrying `text` and checks
    /// that the RPC endpoint answers with an event stream.
    ///
    /// Empty text is rejected before anything else so that callers can show
    /// a usage hint.
    pub async fn probe_send_subscribe(
        &self,
        context: &ConnectionContext,
        text: &str,
    ) -> Result<ProbeResult, InvalidInput> {
        if text.trim().is_empty() {
            return Err(InvalidInput::NoText);
        }
        // Network probes only run against a configured server.
        if !context.is_configured() {
            return Ok(ProbeResult::NotConfigured);
        }
        let Some(endpoint) = resolve_rpc(context) else {
            return Ok(ProbeResult::NotConfigured);
        };
        let Some(http) = self.http() else {
            return Ok(ProbeResult::unreachable(format!(
                "HTTP client unavailable, cannot reach {}",
                endpoint.url
            )));
        };

        let timeout = self.config().send_subscribe_timeout;
        let request = send_subscribe_request(text);
        debug!(url = %endpoint.url, source = %endpoint.source, "Probing tasks/sendSubscribe");

        let exchange = http.post_event_stream(&endpoint.url, &request, timeout);
        let result = match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(())) => ProbeResult::resolved(endpoint),
            Ok(Err(error)) => ProbeResult::unreachable(format!("{error:#}")),
            Err(_) => ProbeResult::unreachable(format!(
                "no response within {:.1}s",
                timeout.as_secs_f64()
            )),
        };
        Ok(result)
    }
}
