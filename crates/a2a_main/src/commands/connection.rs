use super::NOT_CONNECTED;
use crate::presenter::Presenter;
use crate::session::Session;

pub async fn connect(
    session: &mut Session,
    presenter: &mut dyn Presenter,
    url: &str,
) -> anyhow::Result<bool> {
    if let Err(error) = session.connect(url).await {
        presenter.error(&format!("Error: {error:#}"))?;
        return Ok(true);
    }

    let base_url = session.context().server_url().unwrap_or(url).to_string();
    match session.agent() {
        Some(card) => presenter.success(&format!("Connected to {} at {base_url}", card.name))?,
        None => presenter.warning(&format!(
            "Connected to {base_url}, but no agent card was found"
        ))?,
    }
    if let Some(endpoint) = session
        .context()
        .streaming_client
        .as_ref()
        .and_then(|client| client.sse_endpoint())
    {
        presenter.info(&format!("Streaming available at {endpoint}"))?;
    }
    Ok(true)
}

pub fn disconnect(session: &mut Session, presenter: &mut dyn Presenter) -> anyhow::Result<bool> {
    match session.disconnect() {
        Some(base_url) => presenter.success(&format!("Disconnected from {base_url}"))?,
        None => presenter.warning(NOT_CONNECTED)?,
    }
    Ok(true)
}
