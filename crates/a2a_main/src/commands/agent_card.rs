use a2a_diagnostics::agent_card_url;
use a2a_domain::AgentCard;

use super::{capability_lines, card_header, NOT_CONNECTED};
use crate::presenter::{Line, Panel, Presenter, Tone};
use crate::session::Session;

/// `/agent_card [--raw] [--refresh]`.
///
/// The cached card is shown unless `refresh` is set or nothing is cached.
/// A refreshed card is displayed but not written back to the session.
pub async fn execute(
    session: &Session,
    presenter: &mut dyn Presenter,
    raw: bool,
    refresh: bool,
) -> anyhow::Result<bool> {
    let Some(base_url) = session.context().server_url() else {
        presenter.warning(NOT_CONNECTED)?;
        return Ok(true);
    };

    let card = match session.agent() {
        Some(card) if !refresh => Some(card.clone()),
        _ => session.diagnostics().fetch_agent_card(base_url).await,
    };
    let Some(card) = card else {
        presenter.error(&format!(
            "Could not fetch agent card from {}",
            agent_card_url(base_url)
        ))?;
        return Ok(true);
    };

    if raw {
        presenter.code(&card.raw)?;
    } else {
        presenter.panel(card_panel(&card))?;
    }
    Ok(true)
}

fn card_panel(card: &AgentCard) -> Panel {
    let mut panel = Panel::new("Agent Card").lines(card_header(&card.name, Some(card)));

    if let Some(url) = &card.url {
        panel = panel.blank().line(Line::field("URL", url));
    }
    if !card.capabilities.is_empty() {
        panel = panel.blank().lines(capability_lines(&card.capabilities));
    }
    if !card.skills.is_empty() {
        panel = panel.blank().line(Line::new().span("Skills", Tone::Accent));
        for skill in &card.skills {
            let mut line = Line::new().plain("  • ").span(&skill.name, Tone::Strong);
            if let Some(description) = &skill.description {
                line = line.plain(format!(": {description}"));
            }
            panel = panel.line(line);
        }
    }
    panel
}
