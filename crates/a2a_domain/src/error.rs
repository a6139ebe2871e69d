use thiserror::Error;

/// A caller-supplied parameter that cannot be used as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("No text provided")]
    NoText,

    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
}

/// Failure categories surfaced by the diagnostics layer
#[derive(Error, Debug)]
pub enum DiagnosticError {
    /// No base URL is configured for the session
    #[error("Not connected to any server")]
    NotConnected,

    /// Agent metadata could not be retrieved or parsed
    #[error("Failed to fetch agent card: {0}")]
    FetchFailure(String),

    /// A configured endpoint did not respond
    #[error("Endpoint unreachable: {0}")]
    Unreachable(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

impl From<serde_json::Error> for DiagnosticError {
    fn from(err: serde_json::Error) -> Self {
        Self::FetchFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiagnosticError>;
