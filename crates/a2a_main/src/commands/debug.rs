use a2a_domain::{EndpointSource, InvalidInput, ProbeResult};

use super::{client_status_line, endpoint_lines, streaming_status_line, NOT_CONNECTED};
use crate::command::CommandName;
use crate::presenter::{Line, Panel, Presenter, Tone};
use crate::session::Session;

/// `/debug_info`
pub async fn debug_info(session: &Session, presenter: &mut dyn Presenter) -> anyhow::Result<bool> {
    let info = session.diagnostics().debug_info(session.context()).await;
    let report = &info.report;

    let mut panel = Panel::new("Debug Information")
        .border(Tone::Warning)
        .line(Line::heading("Connection Details"));
    if report.is_connected() {
        panel = panel.lines(endpoint_lines(report));
    } else {
        panel = panel.line(Line::new().span(NOT_CONNECTED, Tone::Warning));
    }
    panel = panel
        .line(client_status_line(report.client_status))
        .line(streaming_status_line(report.streaming_status));
    if let Some(card) = &report.agent {
        panel = panel.line(Line::field("Agent", format!("{} v{}", card.name, card.version)));
    }

    panel = panel
        .blank()
        .line(Line::heading("System Information"))
        .line(Line::field("Client Version", &info.client_version))
        .line(Line::field("Platform", format!("{} ({})", info.os, info.arch)))
        .blank()
        .line(Line::heading("Dependencies"))
        .lines(
            info.dependencies
                .iter()
                .map(|dependency| Line::new().plain(format!("  {dependency}"))),
        );

    presenter.panel(panel)?;
    Ok(true)
}

/// `/test_sse [--timeout X]`
pub async fn test_sse(
    session: &Session,
    presenter: &mut dyn Presenter,
    timeout: Option<&str>,
) -> anyhow::Result<bool> {
    presenter.info("Testing SSE Connection...")?;
    let probe = session.diagnostics().probe_sse(session.context(), timeout).await;

    if let Some(invalid) = probe.invalid_timeout {
        presenter.warning(&format!(
            "{}. Using default of {:.1}s",
            InvalidInput::InvalidTimeout(invalid),
            probe.timeout.as_secs_f64()
        ))?;
    }

    match probe.result {
        ProbeResult::Resolved { endpoint, source: EndpointSource::Transport } => {
            presenter.success(&format!("Configured SSE endpoint: {endpoint}"))?
        }
        ProbeResult::Resolved { endpoint, source: EndpointSource::Derived } => {
            presenter.success(&format!("SSE endpoint reachable: {endpoint}"))?
        }
        ProbeResult::Unreachable { reason } => {
            presenter.error(&format!("SSE endpoint unreachable: {reason}"))?
        }
        ProbeResult::NotConfigured => presenter.warning(NOT_CONNECTED)?,
    }
    Ok(true)
}

/// `/test_send_subscribe <text>`
pub async fn test_send_subscribe(
    session: &Session,
    presenter: &mut dyn Presenter,
    text: &str,
) -> anyhow::Result<bool> {
    let result = session
        .diagnostics()
        .probe_send_subscribe(session.context(), text)
        .await;

    match result {
        Err(error) => {
            presenter.error(&format!("Error: {error}"))?;
            presenter.info(&format!("Usage: {}", CommandName::TestSendSubscribe.usage()))?;
        }
        Ok(ProbeResult::Resolved { endpoint, source }) => presenter.success(&format!(
            "tasks/sendSubscribe accepted by {endpoint} ({source} endpoint)"
        ))?,
        Ok(ProbeResult::Unreachable { reason }) => {
            presenter.error(&format!("tasks/sendSubscribe failed: {reason}"))?
        }
        Ok(ProbeResult::NotConfigured) => presenter.warning(NOT_CONNECTED)?,
    }
    Ok(true)
}
