use std::time::Duration;

use a2a_domain::{DiagnosticsConfig, InvalidInput, ProbeTimeout, DEFAULT_PROBE_TIMEOUT};
use clap::Parser;
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Interactive diagnostics shell for A2A agents")]
pub struct Cli {
    /// Agent to connect to on startup.
    #[arg(long, env = "A2A_BASE_URL")]
    pub base_url: Option<String>,

    /// Default timeout for `/test_sse`, in seconds.
    #[arg(long)]
    pub timeout: Option<String>,

    /// Timeout for agent card requests, in seconds.
    #[arg(long, default_value = "5", value_parser = parse_seconds)]
    pub metadata_timeout: Duration,

    /// Log filter, e.g. `info` or `a2a_diagnostics=debug`.
    #[arg(long, env = "A2A_LOG", default_value = "info")]
    pub log_level: String,

    /// Run a single slash command and exit.
    #[arg(long, short)]
    pub command: Option<String>,
}

impl Cli {
    pub fn diagnostics_config(&self) -> DiagnosticsConfig {
        let sse = ProbeTimeout::parse(self.timeout.as_deref(), DEFAULT_PROBE_TIMEOUT);
        if let Some(invalid) = &sse.invalid {
            warn!(value = %invalid, "Ignoring invalid --timeout");
        }
        DiagnosticsConfig::default()
            .metadata_timeout(self.metadata_timeout)
            .default_sse_timeout(sse.duration)
    }
}

fn parse_seconds(raw: &str) -> Result<Duration, InvalidInput> {
    let timeout = ProbeTimeout::parse(Some(raw), DEFAULT_PROBE_TIMEOUT);
    match timeout.invalid {
        Some(invalid) => Err(InvalidInput::InvalidTimeout(invalid)),
        None => Ok(timeout.duration),
    }
}
