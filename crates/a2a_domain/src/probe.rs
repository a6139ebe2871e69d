use std::time::Duration;

use serde::Serialize;

/// Where a resolved endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EndpointSource {
    /// Read from a live transport handle.
    Transport,
    /// Built from the configured base URL.
    Derived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEndpoint {
    pub url: String,
    pub source: EndpointSource,
}

impl ResolvedEndpoint {
    pub fn transport(url: impl ToString) -> Self {
        Self { url: url.to_string(), source: EndpointSource::Transport }
    }

    pub fn derived(url: impl ToString) -> Self {
        Self { url: url.to_string(), source: EndpointSource::Derived }
    }
}

/// Outcome of a single bounded reachability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeResult {
    Resolved { endpoint: String, source: EndpointSource },
    Unreachable { reason: String },
    NotConfigured,
}

impl ProbeResult {
    pub fn resolved(endpoint: ResolvedEndpoint) -> Self {
        ProbeResult::Resolved { endpoint: endpoint.url, source: endpoint.source }
    }

    pub fn unreachable(reason: impl ToString) -> Self {
        ProbeResult::Unreachable { reason: reason.to_string() }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ProbeResult::Resolved { .. })
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ProbeResult::Resolved { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

/// Timeout used when a caller supplies none, or an unusable one.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A probe timeout parsed from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTimeout {
    pub duration: Duration,
    /// The rejected input, when `duration` is the fallback.
    pub invalid: Option<String>,
}

impl ProbeTimeout {
    /// Parses a timeout in seconds. Non-numeric, non-finite, zero or negative
    /// values fall back to `default` and are reported in `invalid`.
    pub fn parse(raw: Option<&str>, default: Duration) -> Self {
        let Some(raw) = raw else {
            return Self { duration: default, invalid: None };
        };

        match raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .filter(|duration| !duration.is_zero())
        {
            Some(duration) => Self { duration, invalid: None },
            None => Self { duration: default, invalid: Some(raw.to_string()) },
        }
    }
}

/// Result of an SSE probe together with the timeout that bounded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseProbe {
    pub timeout: Duration,
    pub invalid_timeout: Option<String>,
    pub result: ProbeResult,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_timeout() {
        let default = DEFAULT_PROBE_TIMEOUT;

        assert_eq!(
            ProbeTimeout::parse(None, default),
            ProbeTimeout { duration: default, invalid: None }
        );
        assert_eq!(
            ProbeTimeout::parse(Some("2.5"), default),
            ProbeTimeout { duration: Duration::from_millis(2500), invalid: None }
        );
        assert_eq!(
            ProbeTimeout::parse(Some(" 10 "), default).duration,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_parse_timeout_rejects_unusable_values() {
        for raw in ["abc", "", "0", "-1", "NaN", "inf"] {
            let actual = ProbeTimeout::parse(Some(raw), DEFAULT_PROBE_TIMEOUT);
            assert_eq!(
                actual,
                ProbeTimeout { duration: DEFAULT_PROBE_TIMEOUT, invalid: Some(raw.to_string()) },
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_source_display() {
        assert_eq!(EndpointSource::Transport.to_string(), "transport");
        assert_eq!(EndpointSource::Derived.to_string(), "derived");
    }
}
