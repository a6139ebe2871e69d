use a2a_domain::{
    derive_agent_name, ClientStatus, ConnectionContext, DebugInfo, DependencyVersion,
    DiagnosticReport, StreamingStatus,
};

use crate::resolver::{resolve_rpc_endpoint, resolve_sse_endpoint};
use crate::Diagnostics;

/// Versions of the libraries the client was built with, read from the
/// workspace lock file at build time.
pub fn dependency_versions() -> Vec<DependencyVersion> {
    vec![
        DependencyVersion::new("Reqwest", option_env!("A2A_DEP_VERSION_REQWEST")),
        DependencyVersion::new("Tokio", option_env!("A2A_DEP_VERSION_TOKIO")),
        DependencyVersion::new("Colored", option_env!("A2A_DEP_VERSION_COLORED")),
        DependencyVersion::new("Reedline", option_env!("A2A_DEP_VERSION_REEDLINE")),
        DependencyVersion::new("Clap", option_env!("A2A_DEP_VERSION_CLAP")),
    ]
}

impl Diagnostics {
    /// Summarizes the connection described by `context`.
    ///
    /// A cached agent card is used as is. Without one, the card is fetched
    /// once if a base URL is configured; a failed fetch leaves `agent` empty.
    pub async fn build_report(&self, context: &ConnectionContext) -> DiagnosticReport {
        let base_url = context.server_url().map(str::to_string);

        let agent = match (&context.agent_info, &base_url) {
            (Some(card), _) => Some(card.clone()),
            (None, Some(base_url)) => self.fetch_agent_card(base_url).await,
            (None, None) => None,
        };

        let display_name = agent
            .as_ref()
            .map(|card| card.name.clone())
            .or_else(|| base_url.as_deref().and_then(derive_agent_name));

        // Handles without a base URL are leftovers and do not count.
        let configured = base_url.is_some();
        DiagnosticReport {
            client_status: if configured && context.client.is_some() {
                ClientStatus::Connected
            } else {
                ClientStatus::Disconnected
            },
            rpc_endpoint: resolve_rpc_endpoint(context),
            sse_endpoint: resolve_sse_endpoint(context),
            streaming_status: if configured && context.streaming_client.is_some() {
                StreamingStatus::Available
            } else {
                StreamingStatus::NotInitialized
            },
            base_url,
            agent,
            display_name,
        }
    }

    /// [`Self::build_report`] plus build and platform details.
    pub async fn debug_info(&self, context: &ConnectionContext) -> DebugInfo {
        DebugInfo {
            report: self.build_report(context).await,
            client_version: a2a_domain::VERSION.to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            dependencies: dependency_versions(),
        }
    }
}
