use std::sync::Arc;

use a2a_diagnostics::Diagnostics;
use a2a_domain::{AgentCard, ClientHandle, ConnectionContext, StreamingHandle};
use anyhow::Context;
use tracing::info;
use url::Url;

/// RPC client handle created on connect. The endpoint is the one the agent
/// card advertises, if any.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: Option<String>,
}

impl ClientHandle for RpcClient {
    fn endpoint(&self) -> Option<String> {
        self.endpoint.clone()
    }
}

/// Streaming client handle, created once the event stream answered.
#[derive(Debug, Clone)]
pub struct EventStreamClient {
    sse_endpoint: String,
}

impl StreamingHandle for EventStreamClient {
    fn sse_endpoint(&self) -> Option<String> {
        Some(self.sse_endpoint.clone())
    }
}

/// Owns the connection state for one interactive run. Diagnostics only read
/// the context; all writes happen here.
pub struct Session {
    context: ConnectionContext,
    diagnostics: Diagnostics,
}

impl Session {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { context: ConnectionContext::default(), diagnostics }
    }

    pub fn with_context(mut self, context: ConnectionContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.context
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Points the session at `url`, replacing any previous connection.
    ///
    /// The agent card is fetched and cached. The RPC client is created only
    /// when the agent answered, and the streaming client only when the card
    /// advertises streaming and the event stream opens.
    pub async fn connect(&mut self, url: &str) -> anyhow::Result<()> {
        let base_url = normalize_base_url(url)?;
        let mut context = ConnectionContext::default().base_url(base_url.clone());

        if let Some(card) = self.diagnostics.fetch_agent_card(&base_url).await {
            context = context.client(Arc::new(RpcClient { endpoint: card.url.clone() }));
            if card.has_capability("streaming") {
                let probe = self.diagnostics.probe_sse(&context, None).await;
                if let Some(endpoint) = probe.result.endpoint() {
                    let client = EventStreamClient { sse_endpoint: endpoint.to_string() };
                    context = context.streaming_client(Arc::new(client));
                }
            }
            context = context.agent_info(card);
        }

        info!(base_url = %base_url, context = ?context, "Connected");
        self.context = context;
        Ok(())
    }

    pub fn disconnect(&mut self) -> Option<String> {
        let previous = std::mem::take(&mut self.context);
        previous.base_url
    }

    pub fn agent(&self) -> Option<&AgentCard> {
        self.context.agent_info.as_ref()
    }
}

fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Unsupported URL scheme: {}", url.scheme());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" http://localhost:8000/pirate_agent/ ").unwrap(),
            "http://localhost:8000/pirate_agent"
        );
        assert_eq!(normalize_base_url("http://localhost:8000").unwrap(), "http://localhost:8000");
        assert!(normalize_base_url("localhost:8000").is_err());
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[tokio::test]
    async fn test_connect_without_http_keeps_base_url() {
        let mut session = Session::new(Diagnostics::default());

        session.connect("http://localhost:8000/pirate_agent").await.unwrap();

        assert_eq!(
            session.context().server_url(),
            Some("http://localhost:8000/pirate_agent")
        );
        assert!(session.context().client.is_none());
        assert!(session.agent().is_none());
    }

    #[tokio::test]
    async fn test_disconnect_clears_context() {
        let mut session = Session::new(Diagnostics::default())
            .with_context(ConnectionContext::default().base_url("http://x".to_string()));

        assert_eq!(session.disconnect().as_deref(), Some("http://x"));
        assert!(!session.context().is_configured());
        assert_eq!(session.disconnect(), None);
    }
}
