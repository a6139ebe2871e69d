use std::sync::Arc;

use a2a_domain::{DiagnosticsConfig, HttpService};

/// Entry point for the diagnostics operations.
///
/// The HTTP capability is optional: without it every fetch resolves to no
/// result and every network probe to `Unreachable`.
#[derive(Clone, Default)]
pub struct Diagnostics {
    config: DiagnosticsConfig,
    http: Option<Arc<dyn HttpService>>,
}

impl Diagnostics {
    pub fn new(config: DiagnosticsConfig, http: Option<Arc<dyn HttpService>>) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> Option<&dyn HttpService> {
        self.http.as_deref()
    }
}
