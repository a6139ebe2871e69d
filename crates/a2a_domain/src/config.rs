use std::time::Duration;

use derive_setters::Setters;

use crate::DEFAULT_PROBE_TIMEOUT;

/// Timeouts applied by the diagnostics layer.
#[derive(Debug, Clone, Setters)]
pub struct DiagnosticsConfig {
    /// Bound on the agent card request.
    pub metadata_timeout: Duration,
    /// Used by the SSE probe when no usable timeout is supplied.
    pub default_sse_timeout: Duration,
    /// Bound on the `tasks/sendSubscribe` probe.
    pub send_subscribe_timeout: Duration,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            metadata_timeout: Duration::from_secs(5),
            default_sse_timeout: DEFAULT_PROBE_TIMEOUT,
            send_subscribe_timeout: Duration::from_secs(10),
        }
    }
}
