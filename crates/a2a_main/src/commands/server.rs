use a2a_domain::UNKNOWN_AGENT;

use super::{
    capability_lines, card_header, client_status_line, endpoint_lines, streaming_status_line,
    NOT_CONNECTED,
};
use crate::presenter::{Panel, Presenter, Tone};
use crate::session::Session;

/// `/server`: connection summary for the current session.
pub async fn execute(session: &Session, presenter: &mut dyn Presenter) -> anyhow::Result<bool> {
    let report = session.diagnostics().build_report(session.context()).await;
    if !report.is_connected() {
        presenter.warning(NOT_CONNECTED)?;
        return Ok(true);
    }

    let name = report.display_name.as_deref().unwrap_or(UNKNOWN_AGENT);
    let mut panel = Panel::new(report.status_message())
        .border(Tone::Accent)
        .lines(card_header(name, report.agent.as_ref()))
        .blank()
        .lines(endpoint_lines(&report))
        .line(client_status_line(report.client_status))
        .line(streaming_status_line(report.streaming_status));

    if let Some(card) = &report.agent {
        if !card.capabilities.is_empty() {
            panel = panel.blank().lines(capability_lines(&card.capabilities));
        }
    }

    presenter.panel(panel)?;
    Ok(true)
}
