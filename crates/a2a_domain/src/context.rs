use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use derive_setters::Setters;

use crate::AgentCard;

/// A live RPC client owned by the session. Transports that do not know their
/// endpoint keep the default.
pub trait ClientHandle: Send + Sync {
    fn endpoint(&self) -> Option<String> {
        None
    }
}

/// A live streaming client owned by the session.
pub trait StreamingHandle: Send + Sync {
    fn sse_endpoint(&self) -> Option<String> {
        None
    }
}

/// Read-only view of the session's connection state.
#[derive(Clone, Default, Setters)]
#[setters(strip_option)]
pub struct ConnectionContext {
    /// The configured server URL.
    pub base_url: Option<String>,
    /// The RPC client, if one has been created.
    pub client: Option<Arc<dyn ClientHandle>>,
    /// The streaming client, if one has been created.
    pub streaming_client: Option<Arc<dyn StreamingHandle>>,
    /// A previously fetched agent card.
    pub agent_info: Option<AgentCard>,
}

impl ConnectionContext {
    /// The configured base URL without surrounding whitespace. Blank values
    /// count as unset.
    pub fn server_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.server_url().is_some()
    }
}

impl Debug for ConnectionContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionContext")
            .field("base_url", &self.base_url)
            .field("client", &self.client.is_some())
            .field("streaming_client", &self.streaming_client.is_some())
            .field("agent_info", &self.agent_info.as_ref().map(|card| &card.name))
            .finish()
    }
}
