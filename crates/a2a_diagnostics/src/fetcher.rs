use a2a_domain::{AgentCard, DiagnosticError, Result};
use tracing::{debug, warn};

use crate::resolver::join_endpoint;
use crate::Diagnostics;

/// Well-known path of the agent self-description.
pub const AGENT_CARD_PATH: &str = "/.well-known/agent.json";

pub fn agent_card_url(base_url: &str) -> String {
    join_endpoint(base_url, AGENT_CARD_PATH)
}

impl Diagnostics {
    /// Fetches and validates the agent card served under `base_url`.
    ///
    /// Returns `None` on any failure: missing HTTP capability, connection
    /// errors, timeouts, a non-200 status or a malformed body. The cause is
    /// logged.
    pub async fn fetch_agent_card(&self, base_url: &str) -> Option<AgentCard> {
        match self.try_fetch_agent_card(base_url).await {
            Ok(card) => Some(card),
            Err(error) => {
                warn!(base_url = %base_url, error = %error, "Agent card unavailable");
                None
            }
        }
    }

    async fn try_fetch_agent_card(&self, base_url: &str) -> Result<AgentCard> {
        if base_url.trim().is_empty() {
            return Err(DiagnosticError::NotConnected);
        }
        let http = self.http().ok_or_else(|| {
            DiagnosticError::FetchFailure("HTTP client unavailable".to_string())
        })?;

        let url = agent_card_url(base_url);
        let timeout = self.config().metadata_timeout;
        debug!(url = %url, timeout = ?timeout, "Fetching agent card");

        let response = tokio::time::timeout(timeout, http.get(&url, timeout))
            .await
            .map_err(|_| {
                DiagnosticError::FetchFailure(format!(
                    "request timed out after {:.1}s",
                    timeout.as_secs_f64()
                ))
            })?
            .map_err(|e| DiagnosticError::FetchFailure(format!("{e:#}")))?;

        if !response.is_ok() {
            return Err(DiagnosticError::FetchFailure(format!(
                "{url} returned status {}",
                response.status
            )));
        }

        AgentCard::from_json(&response.body, Some(base_url))
    }
}
