mod agent_card;
mod connection;
mod debug;
mod server;

use a2a_domain::{AgentCard, CapabilityEntry, ClientStatus, DiagnosticReport, StreamingStatus};
use strum::IntoEnumIterator;

use crate::command::{Command, CommandName};
use crate::presenter::{Line, Panel, Presenter, Tone};
use crate::session::Session;

pub const NOT_CONNECTED: &str = "Not connected to any server";

/// Parses and runs one line of input. Returns `false` once the shell should
/// stop. Input errors are shown to the operator and never end the session.
pub async fn dispatch(
    input: &str,
    session: &mut Session,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<bool> {
    match Command::parse(input) {
        Ok(Some(command)) => execute(command, session, presenter).await,
        Ok(None) => Ok(true),
        Err(error) => {
            presenter.error(&error.to_string())?;
            Ok(true)
        }
    }
}

pub async fn execute(
    command: Command,
    session: &mut Session,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<bool> {
    match command {
        Command::Server => server::execute(session, presenter).await,
        Command::AgentCard { raw, refresh } => {
            agent_card::execute(session, presenter, raw, refresh).await
        }
        Command::DebugInfo => debug::debug_info(session, presenter).await,
        Command::TestSse { timeout } => {
            debug::test_sse(session, presenter, timeout.as_deref()).await
        }
        Command::TestSendSubscribe { text } => {
            debug::test_send_subscribe(session, presenter, &text).await
        }
        Command::Connect { url } => connection::connect(session, presenter, &url).await,
        Command::Disconnect => connection::disconnect(session, presenter),
        Command::Help => help(presenter),
        Command::Quit => Ok(false),
    }
}

fn help(presenter: &mut dyn Presenter) -> anyhow::Result<bool> {
    let width = CommandName::iter().map(|name| name.usage().len()).max().unwrap_or(0);
    let lines = CommandName::iter().map(|name| {
        Line::new()
            .span(format!("{:<width$}  ", name.usage()), Tone::Accent)
            .plain(name.description())
    });
    presenter.panel(Panel::new("Available Commands").lines(lines))?;
    Ok(true)
}

pub(crate) fn client_status_line(status: ClientStatus) -> Line {
    let tone = match status {
        ClientStatus::Connected => Tone::Success,
        ClientStatus::Disconnected => Tone::Error,
    };
    Line::new().label("Client Status").span(status, tone)
}

pub(crate) fn streaming_status_line(status: StreamingStatus) -> Line {
    let tone = match status {
        StreamingStatus::Available => Tone::Success,
        StreamingStatus::NotInitialized => Tone::Warning,
    };
    Line::new().label("Streaming Status").span(status, tone)
}

pub(crate) fn endpoint_lines(report: &DiagnosticReport) -> Vec<Line> {
    let or_missing = |value: &Option<String>| {
        value.clone().unwrap_or_else(|| "Not available".to_string())
    };
    vec![
        Line::field("Base URL", or_missing(&report.base_url)),
        Line::field("RPC Endpoint", or_missing(&report.rpc_endpoint)),
        Line::field("Events Endpoint", or_missing(&report.sse_endpoint)),
    ]
}

/// Name and version, followed by the description when there is one.
pub(crate) fn card_header(name: &str, card: Option<&AgentCard>) -> Vec<Line> {
    let mut title = Line::heading(name);
    if let Some(card) = card {
        title = title.span(format!(" v{}", card.version), Tone::Muted);
    }
    let mut lines = vec![title];
    if let Some(description) = card.and_then(|card| card.description.as_deref()) {
        lines.push(Line::new().plain(description));
    }
    lines
}

/// `Capabilities:` followed by one bullet per entry. Known capabilities get
/// their description on an indented line.
pub(crate) fn capability_lines(capabilities: &[CapabilityEntry]) -> Vec<Line> {
    if capabilities.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![Line::new().span("Capabilities:", Tone::Accent)];
    for capability in capabilities {
        lines.push(Line::new().plain("  • ").span(&capability.id, Tone::Strong));
        if let Some(description) = &capability.description {
            lines.push(Line::new().span(format!("    {description}"), Tone::Muted));
        }
    }
    lines
}
