use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{AgentCard, DiagnosticError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum ClientStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum StreamingStatus {
    Available,
    #[strum(to_string = "Not initialized")]
    NotInitialized,
}

/// Snapshot of what is known about the current connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub base_url: Option<String>,
    pub client_status: ClientStatus,
    pub rpc_endpoint: Option<String>,
    pub sse_endpoint: Option<String>,
    pub streaming_status: StreamingStatus,
    pub agent: Option<AgentCard>,
    /// The agent card name, or one derived from the base URL.
    pub display_name: Option<String>,
}

impl DiagnosticReport {
    pub fn is_connected(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn status_message(&self) -> String {
        match (&self.base_url, &self.display_name) {
            (None, _) => DiagnosticError::NotConnected.to_string(),
            (Some(_), Some(name)) => format!("Connected to {name}"),
            (Some(url), None) => format!("Connected to {url}"),
        }
    }
}

/// Version of a library the client was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyVersion {
    pub name: String,
    pub version: Option<String>,
}

impl DependencyVersion {
    pub fn new(name: impl ToString, version: Option<&str>) -> Self {
        Self { name: name.to_string(), version: version.map(str::to_string) }
    }
}

impl Display for DependencyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}: {}", self.name, version),
            None => write!(f, "{}: not installed", self.name),
        }
    }
}

/// A [`DiagnosticReport`] extended with build and platform details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugInfo {
    pub report: DiagnosticReport,
    pub client_version: String,
    pub os: String,
    pub arch: String,
    pub dependencies: Vec<DependencyVersion>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn report() -> DiagnosticReport {
        DiagnosticReport {
            base_url: None,
            client_status: ClientStatus::Disconnected,
            rpc_endpoint: None,
            sse_endpoint: None,
            streaming_status: StreamingStatus::NotInitialized,
            agent: None,
            display_name: None,
        }
    }

    #[test]
    fn test_status_message() {
        assert_eq!(report().status_message(), "Not connected to any server");

        let connected = DiagnosticReport {
            base_url: Some("http://x/pirate_agent".to_string()),
            display_name: Some("Pirate Agent".to_string()),
            ..report()
        };
        assert_eq!(connected.status_message(), "Connected to Pirate Agent");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StreamingStatus::NotInitialized.to_string(), "Not initialized");
        assert_eq!(ClientStatus::Connected.to_string(), "Connected");
    }

    #[test]
    fn test_dependency_display() {
        assert_eq!(
            DependencyVersion::new("Reqwest", Some("0.12.12")).to_string(),
            "Reqwest: 0.12.12"
        );
        assert_eq!(DependencyVersion::new("Clap", None).to_string(), "Clap: not installed");
    }
}
